//! OpenAI Chat Completions client implementing `LlmClient` (ChatOpenAI).
//!
//! Uses the real Chat Completions API; the API key comes from
//! `OPENAI_API_KEY` unless an explicit [`OpenAIConfig`] is given. For
//! structured calls the request carries `response_format: json_schema`
//! with `strict: true`, so schema enforcement happens on the provider
//! side; the reply body is still parsed here and any residual mismatch is
//! a `SchemaViolation`.
//!
//! No retries and no timeouts are added at this layer: a failed call is
//! returned to the stage as-is and aborts the run.

use async_trait::async_trait;
use tracing::debug;

use crate::error::AgentError;
use crate::llm::{parse_structured_reply, LlmClient, LlmResponse, LlmUsage, ResponseSchema};
use crate::message::Message;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
    Client,
};

/// OpenAI Chat Completions client implementing [`LlmClient`].
///
/// Build once per process (or per test) and share behind `Arc`; every
/// stage of the pipeline reuses the same instance.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build a client with default config (API key from `OPENAI_API_KEY`).
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build a client with custom config (e.g. explicit key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: None,
        }
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Convert our `Message` list to request messages (text roles only).
    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Assistant(s) => {
                    ChatCompletionRequestMessage::Assistant((s.as_str()).into())
                }
            })
            .collect()
    }

    /// One completion; `response_format` is set only for structured calls.
    async fn create(
        &self,
        messages: &[Message],
        response_format: Option<ResponseFormat>,
    ) -> Result<LlmResponse, AgentError> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        if let Some(format) = response_format {
            args.response_format(format);
        }

        let request = args.build().map_err(|e| {
            AgentError::ExecutionFailed(format!("OpenAI request build failed: {}", e))
        })?;

        debug!(
            model = %self.model,
            message_count = messages.len(),
            temperature = ?self.temperature,
            "OpenAI chat create"
        );

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("OpenAI API error: {}", e)))?;

        let usage = response.usage.map(|u| LlmUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        if let Some(ref u) = usage {
            debug!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::ExecutionFailed("OpenAI returned no choices".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
            usage,
        })
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        self.create(messages, None).await
    }

    async fn invoke_structured(
        &self,
        messages: &[Message],
        schema: &ResponseSchema,
    ) -> Result<serde_json::Value, AgentError> {
        let format = ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: schema.name.to_string(),
                description: None,
                schema: Some(schema.schema.clone()),
                strict: Some(true),
            },
        };
        let response = self.create(messages, Some(format)).await?;
        parse_structured_reply(&response.content, schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Message conversion keeps roles and order.
    #[test]
    fn messages_to_request_keeps_roles_and_order() {
        let messages = vec![
            Message::system("instructions"),
            Message::user("question"),
            Message::assistant("draft"),
        ];
        let converted = ChatOpenAI::messages_to_request(&messages);
        assert_eq!(converted.len(), 3);
        assert!(matches!(
            converted[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(converted[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(
            converted[2],
            ChatCompletionRequestMessage::Assistant(_)
        ));
    }

    /// **Scenario**: Builder sets model and temperature without touching the env.
    #[test]
    fn builder_sets_model_and_temperature() {
        let llm = ChatOpenAI::with_config(OpenAIConfig::new().with_api_key("test"), "gpt-4o-mini")
            .with_temperature(0.2);
        assert_eq!(llm.model, "gpt-4o-mini");
        assert_eq!(llm.temperature, Some(0.2));
    }
}
