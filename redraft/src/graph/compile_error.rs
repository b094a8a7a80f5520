//! Graph compilation error.

use thiserror::Error;

/// Error from [`StateGraph::compile`](super::StateGraph::compile).
///
/// Compilation validates that every edge references a registered node,
/// that the graph has exactly one entry from START and a path to END, and
/// that no node declares both a plain edge and conditional edges.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// An edge references a node id never registered via `add_node`.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No edge leaves START, or more than one does.
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// Nothing reaches END (neither an edge nor a conditional target).
    #[error("graph has no path to END")]
    MissingEnd,

    /// A node has two outgoing plain edges.
    #[error("node has more than one outgoing edge: {0}")]
    DuplicateEdge(String),

    /// A node declares both a plain edge and conditional edges.
    #[error("node has both edge and conditional edges: {0}")]
    NodeHasBothEdgeAndConditional(String),

    /// A conditional path-map target is not a registered node or END.
    #[error("conditional path_map invalid target: {0}")]
    InvalidConditionalPathMap(String),
}
