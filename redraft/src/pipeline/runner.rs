//! Pipeline assembly and entry point.
//!
//! `build_pipeline` wires the five stage nodes into a compiled graph:
//!
//! ```text
//! START -> planner -> researcher -> writer -> critic -+-> finalizer -> END
//!                                      ^              |
//!                                      +--- revise ---+
//! ```
//!
//! `run_pipeline` drives one question through the compiled graph and
//! returns the final state.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::pipeline::critic_node::CriticNode;
use crate::pipeline::finalizer_node::FinalizerNode;
use crate::pipeline::planner_node::PlannerNode;
use crate::pipeline::researcher_node::ResearcherNode;
use crate::pipeline::router::{route_after_critic, Decision};
use crate::pipeline::writer_node::WriterNode;
use crate::state::PipelineState;

/// Failure of one pipeline run, at either phase.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Compilation(#[from] CompilationError),
    #[error(transparent)]
    Execution(#[from] AgentError),
}

/// Builds the compiled five-stage graph over the given model client.
///
/// Every stage shares the one client. The critic's conditional edge routes
/// through [`route_after_critic`]: `revise` loops back to the writer,
/// `finalize` proceeds to the finalizer.
pub fn build_pipeline(
    llm: Arc<dyn LlmClient>,
) -> Result<CompiledStateGraph<PipelineState>, CompilationError> {
    let mut graph = StateGraph::<PipelineState>::new();
    graph
        .add_node("planner", Arc::new(PlannerNode::new(llm.clone())))
        .add_node("researcher", Arc::new(ResearcherNode::new(llm.clone())))
        .add_node("writer", Arc::new(WriterNode::new(llm.clone())))
        .add_node("critic", Arc::new(CriticNode::new(llm.clone())))
        .add_node("finalizer", Arc::new(FinalizerNode::new(llm)))
        .add_edge(START, "planner")
        .add_edge("planner", "researcher")
        .add_edge("researcher", "writer")
        .add_edge("writer", "critic")
        .add_edge("finalizer", END);

    let path_map: HashMap<String, String> = [
        (Decision::Revise.as_str().to_string(), "writer".to_string()),
        (
            Decision::Finalize.as_str().to_string(),
            "finalizer".to_string(),
        ),
    ]
    .into_iter()
    .collect();
    graph.add_conditional_edges(
        "critic",
        Arc::new(|state: &PipelineState| route_after_critic(state).as_str().to_string()),
        Some(path_map),
    );

    graph.compile()
}

/// Runs one question through the pipeline and returns the final state; the
/// answer is in [`PipelineState::final_draft`].
pub async fn run_pipeline(
    llm: Arc<dyn LlmClient>,
    question: impl Into<String>,
    max_iterations: u32,
) -> Result<PipelineState, PipelineError> {
    let question = question.into();
    tracing::info!(%question, max_iterations, "pipeline run starting");
    let graph = build_pipeline(llm)?;
    let state = graph
        .invoke(PipelineState::new(question, max_iterations))
        .await?;
    tracing::info!(iterations = state.iteration, "pipeline run complete");
    Ok(state)
}
