// Page handlers for HTML rendering with Askama

use std::collections::HashMap;

use askama::Template;
use axum::{response::Html, Form};

use crate::assessment::AnalysisReport;
use crate::error::ApiError;
use crate::evaluator::evaluate;
use crate::reading::RawReading;
use crate::standards::Pollutant;

pub const PAGE_TITLE: &str = "Air Quality Monitoring";

// ============================================================================
// Home Page
// ============================================================================

/// One numeric input on the form
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub value: String,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub fields: Vec<FormField>,
    pub report: Option<AnalysisReport>,
}

impl HomeTemplate {
    fn new(raw: &RawReading, report: Option<AnalysisReport>) -> Self {
        let fields = Pollutant::ALL
            .into_iter()
            .map(|p| FormField {
                name: p.id(),
                label: p.field_label(),
                value: raw.get(p).unwrap_or_default().to_string(),
            })
            .collect();

        Self {
            title: PAGE_TITLE.to_string(),
            fields,
            report,
        }
    }
}

pub async fn home_page() -> Result<Html<String>, ApiError> {
    let template = HomeTemplate::new(&RawReading::new(), None);
    Ok(Html(template.render()?))
}

/// Form submission: evaluate and re-render with the entered values
pub async fn submit_form(
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let raw = RawReading::from_pairs(fields);
    let report = evaluate(&raw);
    tracing::info!("Form submission evaluated: {}", report.summary.label());

    let template = HomeTemplate::new(&raw, Some(report));
    Ok(Html(template.render()?))
}
