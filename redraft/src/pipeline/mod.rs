//! Five-stage answer pipeline: plan, research, write, critique, finalize,
//! with a bounded revise loop between writer and critic.

mod critic_node;
mod finalizer_node;
mod planner_node;
pub mod prompt;
mod researcher_node;
mod router;
mod runner;
mod schema;
mod writer_node;

pub use critic_node::CriticNode;
pub use finalizer_node::FinalizerNode;
pub use planner_node::PlannerNode;
pub use researcher_node::ResearcherNode;
pub use router::{route_after_critic, Decision, REVISE_SCORE_THRESHOLD};
pub use runner::{build_pipeline, run_pipeline, PipelineError};
pub use schema::{Critique, Plan};
pub use writer_node::WriterNode;
