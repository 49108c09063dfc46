//! Application constants
//!
//! Single source of truth for endpoints, paths, and request parameters.

use std::time::Duration;

/// Default OpenRouter-compatible API base URL
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1";

/// Chat-completions path relative to the endpoint
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Model-listing path relative to the endpoint
pub const MODELS_PATH: &str = "/models";

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable consulted for the API key when the config names none
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Attribution headers some providers require for traffic accounting
pub const ATTRIBUTION_REFERER: &str = "https://dwitulis.app";
pub const ATTRIBUTION_TITLE: &str = "DwiTulis";

/// Sampling temperature for every chat-completion request
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Per-request budget for chat-completion calls
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(120);

/// Per-request budget for the model-listing call
pub const CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog fallback when the model listing cannot be fetched
pub const DEFAULT_MODELS: [&str; 3] = [
    "deepseek/deepseek-chat",
    "anthropic/claude-3.5-sonnet",
    "openai/gpt-4o",
];
