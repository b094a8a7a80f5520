//! Researcher stage: free-text reply split into bullet notes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::pipeline::prompt::{self, RESEARCHER_SYSTEM};
use crate::state::PipelineState;

/// Runs once, after the planner. Sends the question plus the rendered plan
/// and replaces `research_notes` wholesale with the split reply.
pub struct ResearcherNode {
    llm: Arc<dyn LlmClient>,
}

impl ResearcherNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<PipelineState> for ResearcherNode {
    fn id(&self) -> &str {
        "researcher"
    }

    async fn run(&self, mut state: PipelineState) -> Result<(PipelineState, Next), AgentError> {
        let user = format!(
            "Question:\n{}\n\nPlan:\n{}",
            state.question,
            prompt::render_plan(state.plan.as_ref()),
        );
        let messages = [Message::system(RESEARCHER_SYSTEM), Message::user(user)];
        let response = self.llm.invoke(&messages).await?;
        state.research_notes = split_notes(&response.content);
        tracing::debug!(notes = state.research_notes.len(), "research notes collected");
        Ok((state, Next::Continue))
    }
}

/// Splits a free-text reply into notes, one per non-empty line, stripping a
/// leading bullet marker and surrounding whitespace. An all-blank reply
/// yields an empty list, which is legal state.
fn split_notes(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '*', '•'])
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
