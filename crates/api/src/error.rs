use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use serde_json::json;

/// Everything a catalog handler can fail with.
///
/// Rendered as `{"error": ..., "code": ...}`. Unknown ids map to 404, bad
/// filter or sort values and invalid contact forms to 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Lookup or validation failure from the record store or query parsing.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Request that could not be extracted (malformed JSON, missing `url`).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Logged in full; the client only sees a generic message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
