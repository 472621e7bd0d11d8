//! Axum route handler for the Prompt Composer.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::selection::Selection;
use crate::routes::prompt_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
    /// `null` and absent are both "no selections".
    #[serde(default)]
    pub selections: Option<Vec<Selection>>,
}

/// `output` is the one field name clients read the composed text from.
#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub output: String,
}

/// POST /api/generate-final
pub async fn handle_compose(
    State(state): State<AppState>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<ComposeResponse>, AppError> {
    // A non-string prompt reaches the composer as blank and fails there
    let prompt = prompt_text(request.prompt.as_ref()).unwrap_or_default();
    let selections = request.selections.unwrap_or_default();

    let output = state.composer.compose(prompt, &selections).await?;

    Ok(Json(ComposeResponse { output }))
}
