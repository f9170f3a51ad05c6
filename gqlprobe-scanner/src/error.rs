use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request failed: HTTP status {status} for url ({url})")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header format: {0}.  Expected 'Key: Value'")]
    MalformedHeader(String),

    #[error("Request failed: invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Unexpected content type: {0}.  Expected application/json")]
    UnexpectedContentType(String),

    #[error("Failed to decode JSON response: {source}.  Raw Response: {raw}")]
    MalformedJson {
        #[source]
        source: serde_json::Error,
        raw: String,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
