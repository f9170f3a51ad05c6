pub mod error;
pub mod headers;
pub mod prober;
pub mod query;
pub mod result;

pub use error::ScanError;
pub use headers::HeaderSet;
pub use prober::Prober;
pub use query::INTROSPECTION_QUERY;
pub use result::{ProbeResult, RequestMethod, SchemaSummary, Verdict};
