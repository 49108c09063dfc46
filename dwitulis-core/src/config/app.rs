//! # Application Configuration
//!
//! Configuration for the provider endpoint, model choice, and the two
//! task instructions. All fields have built-in defaults so the tool works
//! without a config file; `config/client.toml` overrides them.
//!
//! # Example
//!
//! ```toml
//! endpoint = "https://openrouter.ai/api/v1"
//! api_key = "OPENROUTER_API_KEY"
//! model = "deepseek/deepseek-chat"
//! chat_timeout_secs = 120
//!
//! [instructions]
//! left = "Ringkas artikel menjadi unggahan media sosial."
//! right = "Rapikan artikel dalam format Markdown."
//! ```

use std::env;
use std::path::Path;
use tracing::warn;

use super::defaults::{
    DEFAULT_API_KEY_VAR, DEFAULT_ENDPOINT_URL, DEFAULT_INSTRUCTION_LEFT,
    DEFAULT_INSTRUCTION_RIGHT, DEFAULT_MODEL,
};
use super::error::ConfigError;
use super::loader;

/// The two task instructions, left and right slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPresets {
    pub left: String,
    pub right: String,
}

impl Default for TaskPresets {
    fn default() -> Self {
        Self {
            left: DEFAULT_INSTRUCTION_LEFT.to_string(),
            right: DEFAULT_INSTRUCTION_RIGHT.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Provider API base URL
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Model identifier used for both tasks
    pub model: String,
    /// Per-request budget for chat-completion calls, in seconds
    pub chat_timeout_secs: u64,
    /// System instructions for the two tasks
    pub instructions: TaskPresets,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_VAR.to_string(),
            model: DEFAULT_MODEL.to_string(),
            chat_timeout_secs: 120,
            instructions: TaskPresets::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path.
    ///
    /// An explicit path must exist; with `None` the default path is used
    /// when present, otherwise the built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        loader::load_config(path)
    }

    /// Resolve the API key from the configured environment variable.
    ///
    /// The key itself never lives in the config file, only the variable
    /// name does.
    pub fn resolve_api_key(&self) -> Option<String> {
        match env::var(&self.api_key_env) {
            Ok(value) if !value.trim().is_empty() => Some(value),
            Ok(_) => {
                warn!(env_var = self.api_key_env.as_str(), "API key variable is empty");
                None
            }
            Err(_) => {
                warn!(
                    env_var = self.api_key_env.as_str(),
                    "API key environment variable is not set"
                );
                None
            }
        }
    }
}
