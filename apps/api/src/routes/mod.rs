pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tower_http::limit::RequestBodyLimitLayer;

use crate::compose::handlers::handle_compose;
use crate::controls::handlers::handle_derive_controls;
use crate::feedback::handle_feedback;
use crate::state::AppState;

/// Largest accepted request body.
const BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// The prompt as text. Absent, `null`, and non-string prompts are all `None`.
pub fn prompt_text(prompt: Option<&Value>) -> Option<&str> {
    prompt.and_then(Value::as_str)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/nlp-parser", post(handle_derive_controls))
        .route("/api/generate-final", post(handle_compose))
        .route("/api/feedback", post(handle_feedback))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
