use async_trait::async_trait;
use respite_core::{Llm, LlmRequest, LlmResponse, RespiteError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted transport for tests: plays back queued outcomes in order and
/// records every request it receives.
pub struct MockLlm {
    name: String,
    script: Mutex<VecDeque<Result<LlmResponse>>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, response: LlmResponse) -> Self {
        self.script.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn with_failure(self, error: RespiteError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests seen so far, in call order.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, req: LlmRequest) -> Result<LlmResponse> {
        self.requests.lock().unwrap().push(req);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RespiteError::Transport("mock script exhausted".to_string())))
    }
}
