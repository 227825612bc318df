// Axum API Server Module
//
// Purpose: thin HTTP shell over the evaluator. The form page renders HTML,
// the /api routes speak JSON. No state is kept between requests.

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::assessment::AnalysisReport;
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::evaluator::evaluate;
use crate::reading::RawReading;
use crate::standards::{PollutantStandard, STANDARDS};
use crate::web::handlers::{home_page, submit_form};

// ============================================================================
// Router
// ============================================================================

pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Form page (HTML)
        .route("/", get(home_page).post(submit_form))

        // JSON API
        .route("/api/standards", get(list_standards))
        .route("/api/evaluate", post(evaluate_reading))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_standards() -> Json<&'static [PollutantStandard]> {
    Json(&STANDARDS[..])
}

async fn evaluate_reading(
    payload: Result<Json<RawReading>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let Json(raw) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Json(evaluate(&raw)))
}
