//! Error types for the outer surfaces.
//!
//! Evaluation itself never fails: unparseable readings degrade to 0.0.
//! Errors only arise where strings enter the system (identifiers, server
//! configuration) and in the HTTP layer.

use thiserror::Error;

/// A pollutant identifier outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pollutant identifier: {0}")]
pub struct UnknownPollutant(pub String);

/// Invalid server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),
}

/// Errors returned by the HTTP layer
#[cfg(feature = "api")]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[cfg(feature = "api")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = axum::Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
