use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Errors surfaced by the store and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    BadRequest(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail.clone()),
            AppError::Database(e) => {
                tracing::error!("❌ DB error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Config(detail) => {
                tracing::error!("❌ Config error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Service misconfigured".to_string())
            }
        };

        (
            status,
            Json(ErrorBody {
                status: "error",
                error: message,
            }),
        )
            .into_response()
    }
}
