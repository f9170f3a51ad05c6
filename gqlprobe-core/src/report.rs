use gqlprobe_scanner::ProbeResult;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const ENABLED_LINE: &str = "GraphQL introspection is ENABLED.";
pub const DISABLED_LINE: &str = "GraphQL introspection is DISABLED or restricted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Just the verdict line
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("Unknown report format: {}", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

pub fn verdict_line(result: &ProbeResult) -> &'static str {
    if result.is_enabled() {
        ENABLED_LINE
    } else {
        DISABLED_LINE
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    verdict_line: &'static str,
    #[serde(flatten)]
    result: &'a ProbeResult,
}

/// Render the final report. The text form is exactly one verdict line.
pub fn render_report(result: &ProbeResult, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => verdict_line(result).to_string(),
        ReportFormat::Json => {
            let report = JsonReport {
                verdict_line: verdict_line(result),
                result,
            };
            serde_json::to_string_pretty(&report)
                .unwrap_or_else(|_| verdict_line(result).to_string())
        }
    }
}
