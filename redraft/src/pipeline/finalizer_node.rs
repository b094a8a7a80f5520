//! Finalizer stage: produces the terminal draft.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::pipeline::prompt::{self, FINALIZER_SYSTEM};
use crate::state::PipelineState;

/// Runs exactly once, at the end of every run. Sees everything gathered so
/// far and overwrites `draft` with the polished final answer.
pub struct FinalizerNode {
    llm: Arc<dyn LlmClient>,
}

impl FinalizerNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<PipelineState> for FinalizerNode {
    fn id(&self) -> &str {
        "finalizer"
    }

    async fn run(&self, mut state: PipelineState) -> Result<(PipelineState, Next), AgentError> {
        let user = format!(
            "Question:\n{}\n\nPlan:\n{}\n\nResearch notes:\n{}\n\n\
             Critique (if any):\n{}\n\nCurrent draft (if any):\n{}",
            state.question,
            prompt::render_plan(state.plan.as_ref()),
            prompt::render_notes(&state.research_notes),
            prompt::render_critique(state.critique.as_ref()),
            state.draft.as_deref().unwrap_or("null"),
        );
        let messages = [Message::system(FINALIZER_SYSTEM), Message::user(user)];
        let response = self.llm.invoke(&messages).await?;
        tracing::debug!(len = response.content.len(), "final answer produced");
        state.draft = Some(response.content);
        Ok((state, Next::Continue))
    }
}
