//! Compiled state graph: immutable, supports `invoke` only.
//!
//! Built by [`StateGraph::compile`](super::StateGraph::compile). The run
//! loop is strictly sequential: run the current node, replace the state
//! with its output, resolve the next node (conditional router first, then
//! the node's returned [`Next`]), stop at END. A node error aborts the run
//! and is returned to the caller untouched; there is no retry and no
//! partial-result salvage.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::AgentError;

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
use super::state_graph::END;
use super::{Next, NextEntry, Node};

/// Executable graph produced by `compile()`.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Node the START edge points at.
    pub(super) first_node_id: String,
    /// Outgoing routing per node id: plain edge target or conditional router.
    pub(super) next_map: HashMap<String, NextEntry<S>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs the graph to completion and returns the final state.
    ///
    /// After each node, the next node is chosen as follows: a conditional
    /// router on the current node wins; otherwise the node's returned
    /// `Next` is honored (`Continue` follows the declared edge, `Node(id)`
    /// jumps, `End` stops). Reaching END (or a node with no outgoing
    /// route) ends the run.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        if !self.nodes.contains_key(&self.first_node_id) {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }

        log_graph_start();

        let mut state = state;
        let mut current_id = self.first_node_id.clone();

        loop {
            let node = self
                .nodes
                .get(&current_id)
                .ok_or_else(|| {
                    AgentError::ExecutionFailed(format!("unknown node: {}", current_id))
                })?
                .clone();

            log_node_start(&current_id);
            let (new_state, next) = match node.run(state.clone()).await {
                Ok(output) => output,
                Err(e) => {
                    log_graph_error(&e);
                    return Err(e);
                }
            };
            log_node_complete(&current_id, &next);
            state = new_state;

            let next_id = match self.next_map.get(&current_id) {
                Some(NextEntry::Conditional(router)) => {
                    let target = router.resolve_next(&state);
                    tracing::debug!(from = %current_id, to = %target, "conditional routing");
                    Some(target)
                }
                Some(NextEntry::Unconditional(to)) => match next {
                    Next::End => None,
                    Next::Node(id) => Some(id),
                    Next::Continue => Some(to.clone()),
                },
                None => match next {
                    Next::Node(id) => Some(id),
                    _ => None,
                },
            };

            match next_id {
                None => break,
                Some(id) if id == END => break,
                Some(id) => current_id = id,
            }
        }

        log_graph_complete();
        Ok(state)
    }
}
