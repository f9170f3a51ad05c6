use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Enabled,
    /// Introspection is switched off, or the schema came back restricted.
    DisabledOrRestricted,
}

impl Verdict {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Verdict::Enabled)
    }
}

impl From<bool> for Verdict {
    fn from(enabled: bool) -> Self {
        if enabled {
            Verdict::Enabled
        } else {
            Verdict::DisabledOrRestricted
        }
    }
}

/// The request that produced the response a verdict was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Post,
    Get,
}

/// Headline facts pulled out of an introspection response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSummary {
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
    pub type_count: usize,
    pub directive_count: usize,
}

impl SchemaSummary {
    pub fn from_schema(schema: &Value) -> Self {
        let root_name = |field: &str| {
            schema
                .get(field)
                .and_then(|t| t.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        let count = |field: &str| schema.get(field).and_then(Value::as_array).map_or(0, Vec::len);

        Self {
            query_type: root_name("queryType"),
            mutation_type: root_name("mutationType"),
            subscription_type: root_name("subscriptionType"),
            type_count: count("types"),
            directive_count: count("directives"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub url: String,
    pub method: Option<RequestMethod>,
    pub status_code: Option<u16>,
    pub content_type: Option<String>,
    pub response_time: Duration,
    pub verdict: Verdict,
    pub schema: Option<SchemaSummary>,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn new(url: String) -> Self {
        Self {
            url,
            method: None,
            status_code: None,
            content_type: None,
            response_time: Duration::from_secs(0),
            verdict: Verdict::DisabledOrRestricted,
            schema: None,
            error: None,
        }
    }

    pub fn with_error(url: String, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(url)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.verdict.is_enabled()
    }
}
