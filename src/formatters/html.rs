use crate::assessment::AnalysisReport;

/// HTML formatter for analysis reports
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format report as standalone HTML with embedded CSS
    pub fn format(report: &AnalysisReport) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<title>Air Quality Results</title>\n");
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; max-width: 720px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n");
        html.push_str("h2 { color: #1e40af; }\n");
        html.push_str("ul { list-style: none; padding: 0; }\n");
        html.push_str("li { padding: 16px; margin: 12px 0; border: 1px solid; border-radius: 8px; }\n");
        html.push_str(".overall { border-top: 1px solid #e5e7eb; padding-top: 16px; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&Self::format_fragment(report));

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Results section only, for embedding in a page
    pub fn format_fragment(report: &AnalysisReport) -> String {
        let mut html = String::with_capacity(1024);

        html.push_str("<h2>Results:</h2>\n<ul>\n");
        for result in &report.analysis {
            html.push_str(&format!(
                "<li class=\"{}\" style=\"background: {}; border-color: {};\"><strong>{}</strong>: {} (entered: {})</li>\n",
                result.level.css_class(),
                result.level.background_color(),
                result.level.accent_color(),
                escape(result.pollutant.id()),
                escape(&result.message),
                result.actual_value
            ));
        }
        html.push_str("</ul>\n");

        html.push_str("<div class=\"overall\">\n");
        html.push_str(&format!(
            "<p><strong>Overall air condition:</strong> {}</p>\n",
            report.summary.label()
        ));
        html.push_str(&format!(
            "<p><strong>Recommendations:</strong> {}</p>\n",
            escape(&report.recommendation)
        ));
        html.push_str("</div>\n");

        html
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
