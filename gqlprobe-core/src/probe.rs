use gqlprobe_scanner::prober::DEFAULT_TIMEOUT_SECS;
use gqlprobe_scanner::{HeaderSet, ProbeResult, Prober};
use tracing::{debug, error, info};

/// Options for a single introspection check
pub struct ProbeOptions {
    pub url: String,
    pub headers: HeaderSet,
    pub force_post: bool,
    pub timeout_secs: u64,
}

impl ProbeOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HeaderSet::new(),
            force_post: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Run one introspection check against an already normalized URL.
/// Always yields a result; failures come back as a disabled verdict.
pub async fn execute_probe(options: ProbeOptions) -> ProbeResult {
    let ProbeOptions {
        url,
        headers,
        force_post,
        timeout_secs,
    } = options;

    info!("Checking GraphQL introspection at: {}", url);

    let prober = match Prober::with_timeout(timeout_secs) {
        Ok(prober) => prober.with_force_post(force_post),
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return ProbeResult::with_error(url, e.to_string());
        }
    };

    debug!("Request timeout: {}s", prober.timeout_secs());
    prober.probe(&url, &headers).await
}
