//! Role-tagged messages sent to the text-generation service.
//!
//! Each stage builds a short list: one System instruction plus one User
//! message carrying the relevant slice of pipeline state.

/// A single message in a request to the LLM.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// Stage instruction; placed first in the list.
    System(String),
    /// The question plus any state the stage wants the model to see.
    User(String),
    /// Model reply (kept for completeness; the pipeline sends none).
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// The message text regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Message::System(s) | Message::User(s) | Message::Assistant(s) => s,
        }
    }
}
