//! Control Deriver — prompt in, `ControlSet` out.
//!
//! Flow: build request → one generator call → repair_json → validate_controls.
//! Any failure along the way is logged and answered with `ControlSet::fallback()`;
//! callers never see an error from this component.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::controls::prompts::CONTROLS_SYSTEM;
use crate::controls::validation::validate_controls;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::repair::{repair_json, RepairError};
use crate::llm_client::{
    preview, ChatMessage, CompletionRequest, LlmError, ResponseFormat, TextGenerator,
};
use crate::models::controls::{ControlError, ControlSet};

/// Extraction, not creative writing: keep it near-deterministic.
pub const DERIVE_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Error)]
enum DeriveError {
    #[error("empty prompt")]
    EmptyPrompt,

    #[error("generation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("unparseable reply: {0}")]
    Repair(#[from] RepairError),

    #[error("invalid controls: {0}")]
    Invalid(#[from] ControlError),
}

#[derive(Clone)]
pub struct ControlDeriver {
    llm: Arc<dyn TextGenerator>,
    model: String,
}

impl ControlDeriver {
    pub fn new(llm: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Derives controls for `prompt`, falling back to the default set on any failure.
    pub async fn derive(&self, prompt: &str) -> ControlSet {
        match self.try_derive(prompt).await {
            Ok(controls) => {
                info!(count = controls.len(), "Derived controls from prompt");
                controls
            }
            Err(e) => {
                warn!(error = %e, "Control derivation failed, serving default controls");
                ControlSet::fallback()
            }
        }
    }

    async fn try_derive(&self, prompt: &str) -> Result<ControlSet, DeriveError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(DeriveError::EmptyPrompt);
        }

        let request = self.build_request(prompt);
        let raw = self.llm.complete(&request).await?;
        debug!("Control derivation reply: {}", preview(&raw));

        let value = repair_json(&raw)?;
        Ok(validate_controls(&value)?)
    }

    fn build_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            temperature: DERIVE_TEMPERATURE,
            messages: vec![
                ChatMessage::system(format!("{CONTROLS_SYSTEM}\n\n{JSON_ONLY_INSTRUCTION}")),
                ChatMessage::user(prompt),
            ],
            response_format: Some(ResponseFormat::json_object()),
        }
    }
}
