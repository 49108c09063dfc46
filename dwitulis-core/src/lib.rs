pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::dispatch::{RewritePlan, TaskPair, dispatch};
pub use config::{AppConfig, ConfigError, TaskPresets};
pub use domain::types::{ChatMessage, MessageRole};
pub use infrastructure::model::{
    ChatClient, ModelCatalog, ModelError, ModelRequest, ModelResponse, OpenRouterClient,
    TaskOutcome,
};
