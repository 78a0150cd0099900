use crate::suitability::SuitabilityReport;
use serde_json;

/// JSON formatter for suitability reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &SuitabilityReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &SuitabilityReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
