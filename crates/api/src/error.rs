use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dossier_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds infrastructure variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses;
/// no partial HTML is ever returned on failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `dossier_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A filesystem error (template or fixture unreadable).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sample fixture failed to parse.
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found."),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Template(msg) => {
                    tracing::error!(error = %msg, "Template error");
                    internal_error()
                }
            },

            // --- Infrastructure errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
            AppError::Io(err) => {
                tracing::error!(error = %err, "I/O error");
                internal_error()
            }
            AppError::Fixture(err) => {
                tracing::error!(error = %err, "Fixture error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// The sanitized 500 triple. Details are logged, never sent to the client.
fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
