//! Single-shot responder: one question, one model call, one answer.

use crate::error::AgentError;
use crate::llm::LlmClient;
use crate::message::Message;

const RESPONDER_SYSTEM: &str = "\
You are a helpful AI.
Task: Provide a well-reasoned recommendation to the user question.
Rules:
- Make your best effort without browsing the web.
- Be structured: Summary, Pros, Cons, Recommendation, Risks, Confidence (0-100).
";

/// Answers one question with a single model call.
///
/// The reply passes through verbatim: no parsing, no validation, no
/// post-processing. Client failures propagate unchanged.
pub async fn answer(llm: &dyn LlmClient, question: &str) -> Result<String, AgentError> {
    let messages = [Message::system(RESPONDER_SYSTEM), Message::user(question)];
    let response = llm.invoke(&messages).await?;
    Ok(response.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::llm::MockLlm;

    /// **Scenario**: The reply passes through verbatim, whitespace and all.
    #[tokio::test]
    async fn answer_passes_reply_through() {
        let llm = MockLlm::fixed("  raw reply\nwith lines  ");
        let reply = answer(&llm, "why?").await.unwrap();
        assert_eq!(reply, "  raw reply\nwith lines  ");
        assert_eq!(llm.calls(), 1);
    }

    /// **Scenario**: A client failure propagates unchanged.
    #[tokio::test]
    async fn answer_propagates_failure() {
        struct Failing;

        #[async_trait::async_trait]
        impl LlmClient for Failing {
            async fn invoke(
                &self,
                _messages: &[Message],
            ) -> Result<crate::llm::LlmResponse, AgentError> {
                Err(AgentError::ExecutionFailed("offline".into()))
            }
        }

        let err = answer(&Failing, "why?").await.unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(ref m) if m == "offline"));
    }
}
