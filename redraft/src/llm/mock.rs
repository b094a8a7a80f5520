//! Mock LLM for tests and examples.
//!
//! Plays back a scripted sequence of replies, one per `invoke`, so a whole
//! pipeline run can be driven deterministically (plan JSON, research text,
//! drafts, critique JSONs, final answer). Structured calls go through the
//! trait's default JSON parsing, so scripted replies double as structured
//! replies.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;

/// Scripted mock: each `invoke` pops the next reply; when the script is
/// exhausted the fixed fallback is returned. `calls()` reports how many
/// requests were made, which lets tests assert how often a stage ran.
pub struct MockLlm {
    script: Mutex<VecDeque<String>>,
    fallback: String,
    calls: Mutex<usize>,
}

impl MockLlm {
    /// Mock that always returns the same reply.
    pub fn fixed(content: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: content.into(),
            calls: Mutex::new(0),
        }
    }

    /// Mock that plays the given replies in order, then falls back to `""`.
    pub fn scripted<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(replies.into_iter().map(Into::into).collect()),
            fallback: String::new(),
            calls: Mutex::new(0),
        }
    }

    /// Set the reply used once the script is exhausted (builder).
    pub fn with_fallback(mut self, content: impl Into<String>) -> Self {
        self.fallback = content.into();
        self
    }

    /// Number of `invoke` calls made so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("mock lock")
    }

    /// Number of scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().expect("mock lock").len()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, AgentError> {
        *self.calls.lock().expect("mock lock") += 1;
        let content = self
            .script
            .lock()
            .expect("mock lock")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        Ok(LlmResponse {
            content,
            usage: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Scripted replies come back in order, then the fallback.
    #[tokio::test]
    async fn scripted_replies_in_order_then_fallback() {
        let llm = MockLlm::scripted(["one", "two"]).with_fallback("done");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "one");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "two");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "done");
        assert_eq!(llm.calls(), 3);
        assert_eq!(llm.remaining(), 0);
    }

    /// **Scenario**: fixed() replies identically on every call.
    #[tokio::test]
    async fn fixed_reply_every_call() {
        let llm = MockLlm::fixed("same");
        for _ in 0..3 {
            assert_eq!(llm.invoke(&[]).await.unwrap().content, "same");
        }
        assert_eq!(llm.calls(), 3);
    }

    /// **Scenario**: A scripted JSON reply satisfies a structured call via the default impl.
    #[tokio::test]
    async fn scripted_json_serves_structured_call() {
        let llm = MockLlm::scripted([r#"{"ok": true}"#]);
        let schema = crate::llm::ResponseSchema {
            name: "Probe",
            schema: serde_json::json!({"type": "object"}),
        };
        let v = llm.invoke_structured(&[], &schema).await.unwrap();
        assert_eq!(v, serde_json::json!({"ok": true}));
    }
}
