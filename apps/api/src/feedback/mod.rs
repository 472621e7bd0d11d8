//! Feedback intake — thumbs up/down on a composed output.
//!
//! Feedback is only logged. There is no storage behind it.

use axum::{http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use crate::llm_client::preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Up,
    Down,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub rating: Rating,
    #[serde(default)]
    pub output: Option<String>,
}

/// POST /api/feedback
pub async fn handle_feedback(Json(request): Json<FeedbackRequest>) -> StatusCode {
    let output = request.output.as_deref().map(preview).unwrap_or_default();
    info!(rating = ?request.rating, output = %output, "Feedback received");
    StatusCode::NO_CONTENT
}
