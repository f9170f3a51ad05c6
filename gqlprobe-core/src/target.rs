use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetError {
    #[error("URL is required.")]
    Missing,
}

/// Make sure the target carries an http(s) scheme, assuming `https://` when
/// it doesn't. The prefix check is case-sensitive.
pub fn normalize_url(raw: &str) -> Result<String, TargetError> {
    if raw.is_empty() {
        return Err(TargetError::Missing);
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Ok(raw.to_string());
    }

    warn!("URL does not start with http:// or https://.  Assuming https://");
    Ok(format!("https://{}", raw))
}
