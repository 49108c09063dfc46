//! OpenRouter-compatible chat-completion client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::constants::{CHAT_COMPLETIONS_PATH, CHAT_TEMPERATURE, DEFAULT_CHAT_TIMEOUT};
use crate::domain::types::ChatMessage;
use crate::infrastructure::model::traits::ChatClient;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

/// Chat-completion client for OpenRouter and other OpenAI-compatible providers
#[derive(Clone)]
pub struct OpenRouterClient {
    pub(crate) base: HttpClientBase,
    chat_timeout: Duration,
}

impl OpenRouterClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base: HttpClientBase::new(endpoint.into(), api_key),
            chat_timeout: DEFAULT_CHAT_TIMEOUT,
        }
    }

    pub fn with_chat_timeout(mut self, timeout: Duration) -> Self {
        self.chat_timeout = timeout;
        self
    }
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.base.build_url(CHAT_COMPLETIONS_PATH);

        let payload = ChatCompletionRequest {
            model: request.model.clone(),
            messages: request.messages.iter().map(WireMessage::from).collect(),
            temperature: CHAT_TEMPERATURE,
        };

        info!(
            model = request.model.as_str(),
            messages = request.messages.len(),
            "Sending chat-completion request"
        );

        let response: ChatCompletionResponse = self
            .base
            .post_with_bearer(&url, &payload, self.chat_timeout)
            .await?;
        debug!("Received chat-completion response");

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .map(|m| m.content)
            .ok_or_else(|| ModelError::invalid_response("missing choices[0].message.content"))?;

        Ok(ModelResponse::new(content))
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.as_str(),
            content: message.content.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: Option<ChatCompletionMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: String,
}
