use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::compose::composer::ComposeError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(#[from] LlmError),
}

impl From<ComposeError> for AppError {
    fn from(e: ComposeError) -> Self {
        match e {
            ComposeError::MissingPrompt => AppError::Validation("Missing prompt".to_string()),
            ComposeError::Generation(e) => AppError::Generation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Generation(e) => {
                // Full reason stays in the log; the client only gets the failure class
                tracing::error!("Generation error: {e}");
                let reason = e.redacted();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": format!("failed to generate: {reason}"),
                        "detail": reason,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
