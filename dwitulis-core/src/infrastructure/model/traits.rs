//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse, TaskOutcome};
use async_trait::async_trait;

/// Trait for chat-completion clients
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one chat request to the provider
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;

    /// Normalized surface of [`ChatClient::chat`].
    ///
    /// Every transport or provider failure becomes a failed [`TaskOutcome`]
    /// carrying the normalized message; no error crosses this boundary.
    async fn complete(&self, request: ModelRequest) -> TaskOutcome {
        match self.chat(request).await {
            Ok(response) => TaskOutcome::completed(response.message.content),
            Err(error) => TaskOutcome::failed(error.user_message()),
        }
    }
}
