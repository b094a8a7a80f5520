//! Tracing helpers for graph execution.
//!
//! The run loop emits one event per node execution plus start/complete/
//! error events for the whole run. Nothing here touches state.

use crate::error::AgentError;

use super::Next;

/// Log graph execution start.
pub fn log_graph_start() {
    tracing::info!("starting graph execution");
}

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id, "node start");
}

/// Log node completion with its routing result.
pub fn log_node_complete(node_id: &str, next: &Next) {
    tracing::debug!(node_id, ?next, "node complete");
}

/// Log graph execution completion.
pub fn log_graph_complete() {
    tracing::info!("graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &AgentError) {
    tracing::error!(?error, "graph execution error");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Helpers never panic, with or without a subscriber installed.
    #[test]
    fn logging_helpers_do_not_panic() {
        log_graph_start();
        log_node_start("planner");
        log_node_complete("planner", &Next::Continue);
        log_graph_complete();
        log_graph_error(&AgentError::ExecutionFailed("x".into()));
    }
}
