use std::sync::Arc;

use crate::compose::composer::PromptComposer;
use crate::config::Config;
use crate::controls::deriver::ControlDeriver;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both components hold the same generator; neither keeps per-request state.
#[derive(Clone)]
pub struct AppState {
    pub deriver: ControlDeriver,
    pub composer: PromptComposer,
}

impl AppState {
    pub fn new(llm: Arc<dyn TextGenerator>, config: &Config) -> Self {
        Self {
            deriver: ControlDeriver::new(llm.clone(), config.derive_model.clone()),
            composer: PromptComposer::new(llm, config.compose_model.clone()),
        }
    }
}
