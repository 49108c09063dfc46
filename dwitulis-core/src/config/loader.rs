use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

use super::app::{AppConfig, TaskPresets};
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub chat_timeout_secs: Option<u64>,
    #[serde(default)]
    pub instructions: RawInstructions,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawInstructions {
    pub left: Option<String>,
    pub right: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(explicit) => read_config(explicit),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!("No configuration file found, using built-in defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let preset_defaults = TaskPresets::default();

    let endpoint = parsed.endpoint.unwrap_or(defaults.endpoint);
    if endpoint.trim().is_empty() {
        return Err(ConfigError::EmptyEndpoint);
    }

    let model = parsed.model.unwrap_or(defaults.model);
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel);
    }

    let left = parsed.instructions.left.unwrap_or(preset_defaults.left);
    if left.trim().is_empty() {
        return Err(ConfigError::EmptyInstruction { side: "left" });
    }
    let right = parsed.instructions.right.unwrap_or(preset_defaults.right);
    if right.trim().is_empty() {
        return Err(ConfigError::EmptyInstruction { side: "right" });
    }

    Ok(AppConfig {
        endpoint,
        api_key_env: parsed.api_key.unwrap_or(defaults.api_key_env),
        model,
        chat_timeout_secs: parsed.chat_timeout_secs.unwrap_or(defaults.chat_timeout_secs),
        instructions: TaskPresets { left, right },
    })
}
