use crate::assessment::AnalysisReport;

/// JSON formatter for analysis reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &AnalysisReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &AnalysisReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
