use crate::assessment::AnalysisReport;

/// Markdown formatter for analysis reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &AnalysisReport) -> String {
        let mut md = String::with_capacity(512);

        md.push_str("## Results\n\n");
        for result in &report.analysis {
            md.push_str(&format!(
                "- **{}** [{}]: {} (entered: {})\n",
                result.pollutant,
                result.level.as_str(),
                result.message,
                result.actual_value
            ));
        }
        md.push('\n');

        md.push_str(&format!(
            "**Overall air condition:** {}\n\n",
            report.summary.label()
        ));
        md.push_str(&format!("**Recommendations:** {}\n", report.recommendation));

        md
    }
}
