pub mod probe;
pub mod report;
pub mod target;

pub use probe::{ProbeOptions, execute_probe};
pub use report::{DISABLED_LINE, ENABLED_LINE, ReportFormat, render_report, verdict_line};
pub use target::{TargetError, normalize_url};
