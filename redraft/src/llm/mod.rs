//! LLM client abstraction shared by every pipeline stage.
//!
//! Stages depend on [`LlmClient`], never on a concrete provider: the
//! pipeline runner is handed one client instance and threads it into each
//! node (no hidden module-level singleton). Two call shapes exist:
//!
//! - `invoke`: free-form text in, free-form text out (researcher, writer,
//!   finalizer, single-shot responder).
//! - `invoke_structured`: the request names a JSON schema and the reply
//!   must decode against it; a non-conforming reply is a hard
//!   [`SchemaViolation`](crate::AgentError::SchemaViolation), never
//!   retried (planner, critic).
//!
//! The default `invoke_structured` parses the plain reply as JSON (after
//! stripping a markdown code fence, which chat models like to add), so
//! mocks get structured support for free; `ChatOpenAI` overrides it to use
//! the provider's native `response_format` enforcement.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// A named JSON schema for a structured-output call.
///
/// `name` identifies the contract in error messages and in the provider
/// request; `schema` is the JSON-schema document the reply must satisfy.
/// See [`Plan::response_schema`](crate::pipeline::Plan::response_schema)
/// and [`Critique::response_schema`](crate::pipeline::Critique::response_schema).
#[derive(Clone, Debug)]
pub struct ResponseSchema {
    /// Schema name, e.g. `"Plan"`.
    pub name: &'static str,
    /// JSON-schema document (object with `properties`, `required`, ...).
    pub schema: serde_json::Value,
}

/// Token usage for one LLM call, when the provider reports it.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    /// Tokens in the prompt (input).
    pub prompt_tokens: u32,
    /// Tokens in the completion (output).
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

/// Reply from one free-form completion.
pub struct LlmResponse {
    /// Assistant message content, returned to callers unmodified.
    pub content: String,
    /// Token usage for this call, when available.
    pub usage: Option<LlmUsage>,
}

/// LLM client: role-tagged messages in, reply out.
///
/// Implementations: [`ChatOpenAI`] (real API) and [`MockLlm`] (scripted,
/// for tests). The pipeline holds one client behind `Arc<dyn LlmClient>`
/// and every stage borrows it for exactly one call.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One completion: read messages, return the assistant reply.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;

    /// Structured completion: the reply must be valid JSON for `schema`.
    ///
    /// Returns the decoded JSON value; callers deserialize it into their
    /// typed shape. The default implementation calls `invoke` and parses
    /// the reply text; providers with native structured output override
    /// this to let the model enforce the schema.
    async fn invoke_structured(
        &self,
        messages: &[Message],
        schema: &ResponseSchema,
    ) -> Result<serde_json::Value, AgentError> {
        let response = self.invoke(messages).await?;
        parse_structured_reply(&response.content, schema)
    }
}

/// Parses a reply as the JSON body of a structured-output call.
///
/// Strips one surrounding markdown code fence (with or without a `json`
/// language tag) before parsing. Parse failure is a [`AgentError::SchemaViolation`]
/// for `schema`.
pub(crate) fn parse_structured_reply(
    content: &str,
    schema: &ResponseSchema,
) -> Result<serde_json::Value, AgentError> {
    let body = strip_code_fence(content);
    serde_json::from_str(body)
        .map_err(|e| AgentError::schema_violation(schema.name, format!("invalid JSON: {}", e)))
}

/// Removes one ``` fence around the whole reply, if present.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop a language tag on the opening fence line.
    match rest.split_once('\n') {
        Some((first, body)) if !first.trim().contains(' ') => body.trim(),
        _ => rest.trim(),
    }
}
