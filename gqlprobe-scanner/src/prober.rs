use crate::error::{Result, ScanError};
use crate::headers::HeaderSet;
use crate::query::IntrospectionRequest;
use crate::result::{ProbeResult, RequestMethod, SchemaSummary, Verdict};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Sends the introspection query to one endpoint and decides whether the
/// schema came back.
pub struct Prober {
    client: Client,
    force_post: bool,
    timeout_secs: u64,
}

impl Prober {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                "gqlprobe/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/trapdoorsec/gqlprobe)"
            ))
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            force_post: false,
            timeout_secs,
        })
    }

    /// Skip the GET fallback and judge the POST response alone.
    pub fn with_force_post(mut self, force_post: bool) -> Self {
        self.force_post = force_post;
        self
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Probe `url`, folding every failure into a disabled verdict. The error
    /// is logged and kept on the result.
    pub async fn probe(&self, url: &str, headers: &HeaderSet) -> ProbeResult {
        let mut result = ProbeResult::new(url.to_string());
        if let Err(e) = self.run(url, headers, &mut result).await {
            match e {
                ScanError::UnexpectedContentType(_) => warn!(
                    "{}. Please ensure target endpoint is a graphql endpoint",
                    e
                ),
                _ => error!("{}", e),
            }
            result.verdict = Verdict::DisabledOrRestricted;
            result.error = Some(e.to_string());
        }
        result
    }

    /// Same as [`Prober::probe`] but hands the failure back instead of logging it.
    pub async fn try_probe(&self, url: &str, headers: &HeaderSet) -> Result<ProbeResult> {
        let mut result = ProbeResult::new(url.to_string());
        self.run(url, headers, &mut result).await?;
        Ok(result)
    }

    async fn run(&self, url: &str, headers: &HeaderSet, result: &mut ProbeResult) -> Result<()> {
        let headers = headers.to_header_map()?;
        let target = Url::parse(url).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", url, e)))?;
        let payload = IntrospectionRequest::introspection();

        debug!("POST {} ({} custom headers)", target, headers.len());
        let start = Instant::now();
        let mut response = self
            .client
            .post(target.clone())
            .headers(headers.clone())
            .json(&payload)
            .send()
            .await?;
        result.method = Some(RequestMethod::Post);

        if !self.force_post && is_html(&response) {
            info!("Received HTML response, attempting GET request with parameters.");
            response = self
                .client
                .get(target)
                .headers(headers)
                .query(&payload)
                .send()
                .await?;
            result.method = Some(RequestMethod::Get);
        }
        result.response_time = start.elapsed();

        let status = response.status().as_u16();
        let content_type = content_type_of(&response);
        result.status_code = Some(status);
        result.content_type = (!content_type.is_empty()).then(|| content_type.clone());
        debug!("Final response: {} {}", status, content_type);

        if status >= 400 {
            return Err(ScanError::HttpStatus {
                status,
                url: response.url().to_string(),
            });
        }

        if !content_type.contains("application/json") {
            return Err(ScanError::UnexpectedContentType(content_type));
        }

        let body = response.text().await?;
        let parsed: Value = serde_json::from_str(&body).map_err(|source| ScanError::MalformedJson {
            source,
            raw: body.clone(),
        })?;

        match parsed.get("data").and_then(|data| data.get("__schema")) {
            Some(schema) => {
                info!("GraphQL introspection is enabled.");
                let summary = SchemaSummary::from_schema(schema);
                debug!(
                    "Schema exposes {} types and {} directives",
                    summary.type_count, summary.directive_count
                );
                result.verdict = Verdict::Enabled;
                result.schema = Some(summary);
            }
            None => {
                info!("GraphQL introspection is not enabled or schema is restricted.");
                result.verdict = Verdict::DisabledOrRestricted;
            }
        }

        Ok(())
    }
}

/// Lowercased `Content-Type` of a response, empty when absent or not ASCII.
fn content_type_of(response: &Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

fn is_html(response: &Response) -> bool {
    content_type_of(response).contains("text/html")
}
