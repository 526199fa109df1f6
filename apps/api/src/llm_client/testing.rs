//! Fake backend for tests that exercise model-backed components without a network.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmBackend, LlmError};

pub struct FakeLlm {
    /// `None` makes every call fail as if the provider were down.
    reply: Option<String>,
    call_count: AtomicU32,
    last_prompt: Mutex<Option<String>>,
}

impl FakeLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            call_count: AtomicU32::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            call_count: AtomicU32::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmBackend for FakeLlm {
    fn model(&self) -> &str {
        "fake"
    }

    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "provider unavailable".to_string(),
        })
    }
}
