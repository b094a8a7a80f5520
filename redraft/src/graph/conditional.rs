//! Conditional edges: pick the next node from the current state.
//!
//! A source node declares a routing function `(state) -> key`; the key is
//! looked up in an optional path map (falling back to the key itself) to
//! obtain the next node id or [`END`](super::END). The router is pure: it
//! reads state and performs no I/O.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Routing function: borrows the state, returns a routing key.
pub type ConditionalRouterFn<S> = Arc<dyn Fn(&S) -> String + Send + Sync>;

/// Conditional edge definition for one source node.
///
/// With a path map, `next = map[key]` when present, otherwise the key is
/// used directly as the node id (or END).
#[derive(Clone)]
pub struct ConditionalRouter<S> {
    pub(super) path: ConditionalRouterFn<S>,
    pub(super) path_map: Option<HashMap<String, String>>,
}

impl<S> ConditionalRouter<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Builds a conditional router with an optional path map.
    pub fn new(path: ConditionalRouterFn<S>, path_map: Option<HashMap<String, String>>) -> Self {
        Self { path, path_map }
    }

    /// Resolves the next node id (or END) from the current state.
    pub fn resolve_next(&self, state: &S) -> String {
        let key = (self.path)(state);
        self.path_map
            .as_ref()
            .and_then(|m| m.get(&key))
            .cloned()
            .unwrap_or(key)
    }
}

/// How the run loop finds the node after a given node.
#[derive(Clone)]
pub enum NextEntry<S> {
    /// Single declared edge; the node's returned `Next` is still honored.
    Unconditional(String),
    /// Router decides from state; the node's returned `Next` is ignored.
    Conditional(ConditionalRouter<S>),
}
