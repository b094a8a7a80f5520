//! Graph node trait: one step in a [`StateGraph`](super::StateGraph).

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// A node reads part of the state, performs at most one external call, and
/// writes part of the state back. The run loop uses the returned [`Next`]
/// (or the node's conditional router, when one is declared) to pick the
/// next node. Errors are not handled here; they abort the whole run.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"planner"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}
