//! # Redraft
//!
//! A small graph-based answer pipeline in Rust with a **state-in, state-out**
//! design: one state record flows through a fixed set of stage nodes, each
//! returning an updated copy.
//!
//! Two entry points:
//!
//! - [`responder::answer`]: single-shot — one question, one model call, the
//!   reply passed through verbatim.
//! - [`run_pipeline`]: the five-stage pipeline — planner, researcher, writer,
//!   critic, finalizer — with a bounded revise loop between writer and critic
//!   driven by the critique score.
//!
//! ## Design principles
//!
//! - **Single state type**: [`PipelineState`] is the only record; every stage
//!   reads from and writes to it, and stage outputs replace, never merge.
//! - **Schema at the seams**: the planner and critic request schema-enforced
//!   replies ([`Plan`], [`Critique`]); malformed replies abort the run rather
//!   than degrade it.
//! - **Bounded loops**: the revise loop is capped by `max_iterations`, checked
//!   before the score so a run can never spin.
//! - **Swappable model client**: everything takes an [`LlmClient`];
//!   [`ChatOpenAI`] for real runs, [`MockLlm`] for tests.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`] — build and run state graphs.
//! - [`pipeline`]: the five stage nodes, [`Plan`]/[`Critique`] schemas, the
//!   revise router, [`build_pipeline`] and [`run_pipeline`].
//! - [`llm`]: [`LlmClient`] trait, [`MockLlm`], [`ChatOpenAI`].
//! - [`responder`]: the single-shot [`responder::answer`].
//! - [`message`]: [`Message`] (System / User / Assistant).
//! - [`state`]: [`PipelineState`].
//!
//! Key types are re-exported at crate root:
//! `use redraft::{run_pipeline, PipelineState, MockLlm};`
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use redraft::{run_pipeline, ChatOpenAI};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = Arc::new(ChatOpenAI::new("gpt-4o-mini").with_temperature(0.2));
//! let state = run_pipeline(llm, "Should a startup buy or build auth?", 2).await?;
//! println!("{}", state.final_draft().unwrap_or("no answer"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod pipeline;
pub mod responder;
pub mod state;

pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, ConditionalRouterFn, Next, Node, StateGraph, END, START,
};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, LlmUsage, MockLlm, ResponseSchema};
pub use message::Message;
pub use pipeline::{
    build_pipeline, run_pipeline, Critique, Decision, PipelineError, Plan, REVISE_SCORE_THRESHOLD,
};
pub use state::PipelineState;

#[cfg(test)]
mod test_logging {
    use ctor::ctor;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::Layer;

    #[ctor]
    fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(filter),
            )
            .try_init();
    }
}
