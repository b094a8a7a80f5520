//! Next-step result from a graph node.

/// What to run after a node finishes.
///
/// - **Continue**: follow the node's outgoing edge (or stop when it points
///   at END). When the node has conditional edges, the router decides and
///   `Continue` is what nodes conventionally return.
/// - **Node(id)**: jump straight to the named node.
/// - **End**: stop and return the current state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the declared edge for this node.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop; the current state is the final result.
    End,
}
