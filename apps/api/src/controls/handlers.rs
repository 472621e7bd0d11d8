//! Axum route handler for the Control Deriver.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::controls::ControlSet;
use crate::models::selection::Selection;
use crate::routes::prompt_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeriveRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
}

/// The controls plus the selections a client starts from before any dial moves.
#[derive(Debug, Serialize)]
pub struct DeriveResponse {
    pub controls: ControlSet,
    pub selections: Vec<Selection>,
}

/// POST /api/nlp-parser
///
/// Always 200 once the prompt is present: a failed derivation still yields the
/// default control set.
pub async fn handle_derive_controls(
    State(state): State<AppState>,
    Json(request): Json<DeriveRequest>,
) -> Result<Json<DeriveResponse>, AppError> {
    let prompt = prompt_text(request.prompt.as_ref())
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing prompt".to_string()))?;

    let controls = state.deriver.derive(prompt).await;
    let selections = controls.default_selections();

    Ok(Json(DeriveResponse {
        controls,
        selections,
    }))
}
