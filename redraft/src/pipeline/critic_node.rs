//! Critic stage: structured review of the current draft.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::pipeline::prompt::CRITIC_SYSTEM;
use crate::pipeline::schema::{self, Critique};
use crate::state::PipelineState;

/// Runs after every writer pass. Stores the decoded [`Critique`] and
/// increments the iteration counter unconditionally, regardless of score.
pub struct CriticNode {
    llm: Arc<dyn LlmClient>,
}

impl CriticNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<PipelineState> for CriticNode {
    fn id(&self) -> &str {
        "critic"
    }

    async fn run(&self, mut state: PipelineState) -> Result<(PipelineState, Next), AgentError> {
        let user = format!(
            "Question:\n{}\n\nDraft:\n{}",
            state.question,
            state.draft.as_deref().unwrap_or("null"),
        );
        let messages = [Message::system(CRITIC_SYSTEM), Message::user(user)];
        let response_schema = Critique::response_schema();
        let value = self
            .llm
            .invoke_structured(&messages, &response_schema)
            .await?;
        let critique: Critique = schema::decode(&response_schema, value)?;
        tracing::debug!(score = critique.score, iteration = state.iteration + 1, "draft critiqued");
        state.critique = Some(critique);
        state.iteration += 1;
        Ok((state, Next::Continue))
    }
}
