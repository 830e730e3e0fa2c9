//! Mock provider implementation for testing.

use super::{GenerationParams, Prompt, ProviderError, TextProvider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A scripted reply the mock plays back.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    ApiFailure(String),
}

/// Mock text provider for testing.
///
/// Plays scripted replies in order, falling back to a fixed response
/// once the script is exhausted. Records every received prompt and
/// counts calls, so tests can assert that a handler did (or did not)
/// reach the provider.
pub struct MockTextProvider {
    fallback: String,
    script: Mutex<VecDeque<MockReply>>,
    calls: AtomicUsize,
    seen_prompts: Mutex<Vec<Prompt>>,
}

impl MockTextProvider {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            seen_prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful text reply.
    pub fn push_text(&self, text: impl Into<String>) {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(MockReply::Text(text.into()));
    }

    /// Queue an upstream API failure with the given message.
    pub fn push_api_failure(&self, message: impl Into<String>) {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(MockReply::ApiFailure(message.into()));
    }

    /// Number of generate calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<Prompt> {
        self.seen_prompts
            .lock()
            .expect("prompts lock poisoned")
            .clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &Prompt,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_prompts
            .lock()
            .expect("prompts lock poisoned")
            .push(prompt.clone());

        let next = self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front();

        match next {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::ApiFailure(message)) => Err(ProviderError::Api(message)),
            None => Ok(self.fallback.clone()),
        }
    }
}
