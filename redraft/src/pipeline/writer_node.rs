//! Writer stage: produces or revises the draft from plan, notes, and critique.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::pipeline::prompt::{self, WRITER_SYSTEM};
use crate::state::PipelineState;

/// Runs on the first pass and again on every revision loop. The critique is
/// always included in the user message; on the first pass it renders as
/// `null`, on revision passes it carries the critic's fix instructions.
pub struct WriterNode {
    llm: Arc<dyn LlmClient>,
}

impl WriterNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<PipelineState> for WriterNode {
    fn id(&self) -> &str {
        "writer"
    }

    async fn run(&self, mut state: PipelineState) -> Result<(PipelineState, Next), AgentError> {
        let user = format!(
            "Question:\n{}\n\nPlan:\n{}\n\nResearch notes:\n{}\n\n\
             If critique exists, you may improve the draft accordingly.\nCritique:\n{}",
            state.question,
            prompt::render_plan(state.plan.as_ref()),
            prompt::render_notes(&state.research_notes),
            prompt::render_critique(state.critique.as_ref()),
        );
        let messages = [Message::system(WRITER_SYSTEM), Message::user(user)];
        let response = self.llm.invoke(&messages).await?;
        tracing::debug!(len = response.content.len(), revision = state.critique.is_some(), "draft written");
        state.draft = Some(response.content);
        Ok((state, Next::Continue))
    }
}
