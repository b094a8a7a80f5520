//! State graph: nodes plus explicit edges, compile and invoke.
//!
//! Build with [`StateGraph::add_node`] / [`StateGraph::add_edge`] using the
//! [`START`] and [`END`] sentinels, route a branching node with
//! [`StateGraph::add_conditional_edges`], then [`StateGraph::compile`] into
//! an immutable [`CompiledStateGraph`] and run it with `invoke`. Execution
//! is strictly sequential: one node at a time, state in, state out.

mod compile_error;
mod compiled;
mod conditional;
mod logging;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, END, START};
