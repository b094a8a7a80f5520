//! Planner stage: question in, structured [`Plan`] out.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::pipeline::prompt::PLANNER_SYSTEM;
use crate::pipeline::schema::{self, Plan};
use crate::state::PipelineState;

/// Runs first and exactly once per pipeline run. Requests a schema-enforced
/// reply and stores the decoded [`Plan`]; touches no other state field.
pub struct PlannerNode {
    llm: Arc<dyn LlmClient>,
}

impl PlannerNode {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<PipelineState> for PlannerNode {
    fn id(&self) -> &str {
        "planner"
    }

    async fn run(&self, mut state: PipelineState) -> Result<(PipelineState, Next), AgentError> {
        let messages = [
            Message::system(PLANNER_SYSTEM),
            Message::user(state.question.clone()),
        ];
        let response_schema = Plan::response_schema();
        let value = self
            .llm
            .invoke_structured(&messages, &response_schema)
            .await?;
        let plan: Plan = schema::decode(&response_schema, value)?;
        tracing::debug!(steps = plan.steps.len(), "plan produced");
        state.plan = Some(plan);
        Ok((state, Next::Continue))
    }
}
