//! Stage execution error types.
//!
//! Every stage either completes or fails the whole run: there is no retry
//! and no partial-state salvage. Errors bubble up through
//! [`CompiledStateGraph::invoke`](crate::graph::CompiledStateGraph::invoke)
//! to the caller unchanged.

use thiserror::Error;

/// Error from running a stage or the single-shot responder.
///
/// `ExecutionFailed` covers the external service call going wrong (network,
/// auth, rate limit, empty response). `SchemaViolation` is raised by the
/// structured-output stages (planner, critic) when the reply cannot be
/// decoded into the declared schema; it is never retried locally.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The text-generation call failed (e.g. API error, no choices).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// A structured reply did not conform to the named schema.
    #[error("schema violation in {schema}: {detail}")]
    SchemaViolation {
        /// Name of the schema the reply was validated against.
        schema: String,
        /// What failed: parse error, missing field, out-of-range value.
        detail: String,
    },
}

impl AgentError {
    /// Builds a `SchemaViolation` for the given schema name.
    pub fn schema_violation(schema: impl Into<String>, detail: impl Into<String>) -> Self {
        AgentError::SchemaViolation {
            schema: schema.into(),
            detail: detail.into(),
        }
    }
}
