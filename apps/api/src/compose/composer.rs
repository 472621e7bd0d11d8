//! Prompt Composer — combines the original prompt with the user's selections
//! and asks the generator for the final text.
//!
//! Stateless: nothing is retained between calls. Failures propagate; there is
//! no synthetic substitute for generated text.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::compose::prompts::{COMPOSE_PROMPT_TEMPLATE, COMPOSE_SYSTEM, MODIFIERS_HEADER};
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::repair::strip_code_fences;
use crate::llm_client::{preview, ChatMessage, CompletionRequest, LlmError, TextGenerator};
use crate::models::selection::Selection;

/// Generative step: moderate temperature.
pub const COMPOSE_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("missing prompt")]
    MissingPrompt,

    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),
}

/// Renders selections as `- Label: value` lines, in input order.
pub fn render_selections(selections: &[Selection]) -> String {
    selections
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the user turn: the quoted prompt, then the modifiers block if any.
pub fn build_user_turn(prompt: &str, selections: &[Selection]) -> String {
    let mut turn = COMPOSE_PROMPT_TEMPLATE.replace("{prompt}", prompt);
    if !selections.is_empty() {
        turn.push_str("\n\n");
        turn.push_str(MODIFIERS_HEADER);
        turn.push('\n');
        turn.push_str(&render_selections(selections));
    }
    turn
}

#[derive(Clone)]
pub struct PromptComposer {
    llm: Arc<dyn TextGenerator>,
    model: String,
}

impl PromptComposer {
    pub fn new(llm: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Produces the final output text. The prompt is checked before any service call.
    pub async fn compose(
        &self,
        prompt: &str,
        selections: &[Selection],
    ) -> Result<String, ComposeError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ComposeError::MissingPrompt);
        }

        let request = CompletionRequest {
            model: self.model.clone(),
            temperature: COMPOSE_TEMPERATURE,
            messages: vec![
                ChatMessage::system(format!("{COMPOSE_SYSTEM}\n\n{PLAIN_TEXT_INSTRUCTION}")),
                ChatMessage::user(build_user_turn(prompt, selections)),
            ],
            response_format: None,
        };

        let raw = self.llm.complete(&request).await?;
        debug!("Composition reply: {}", preview(&raw));

        let output = strip_code_fences(&raw);
        if output.is_empty() {
            // A reply that was nothing but fences
            return Err(LlmError::EmptyContent.into());
        }
        Ok(output)
    }
}
