//! Test double for `TextGenerator`: canned reply, recorded requests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CompletionRequest, LlmError, Role, TextGenerator};

#[derive(Debug, Clone)]
enum StubReply {
    Text(String),
    Status(u16),
    Empty,
}

#[derive(Debug, Clone)]
pub struct StubGenerator {
    reply: StubReply,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl StubGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with(StubReply::Text(text.into()))
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::with(StubReply::Status(status))
    }

    pub fn empty() -> Self {
        Self::with(StubReply::Empty)
    }

    fn with(reply: StubReply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Status(status) => Err(LlmError::Api {
                status: *status,
                message: "stubbed failure with sk-live-secret in body".to_string(),
            }),
            StubReply::Empty => Err(LlmError::EmptyContent),
        }
    }
}

impl CompletionRequest {
    /// Content of the first turn with the given role, if any.
    pub fn turn(&self, role: Role) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}
