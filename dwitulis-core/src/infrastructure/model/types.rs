//! Model types - Request, Response, Outcome, and Error types

use crate::domain::types::ChatMessage;
use reqwest::StatusCode;
use thiserror::Error;

/// One chat-completion request: a system/user message pair against a model.
///
/// Immutable once constructed. A dual rewrite builds two of these sharing
/// model and article, differing only in the system instruction.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ModelRequest {
    /// Build a rewrite request from an instruction and the shared article
    pub fn rewrite(
        model: impl Into<String>,
        instruction: impl Into<String>,
        article: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::system(instruction),
                ChatMessage::user(article),
            ],
        }
    }
}

/// Model response from the provider
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub message: ChatMessage,
}

impl ModelResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            message: ChatMessage::assistant(content),
        }
    }
}

/// Normalized result of one task, as shown to the user.
///
/// On success `content` holds the generated text; on failure it holds the
/// normalized error message. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub success: bool,
    pub content: String,
}

impl TaskOutcome {
    pub fn completed(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: message.into(),
        }
    }
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("provider requires an API key")]
    MissingApiKey,
    #[error("network error calling provider: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("provider returned invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl ModelError {
    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// User-friendly error message in Indonesian.
    ///
    /// Maps provider and transport signals onto a small fixed set of
    /// categories; anything unmatched passes through its raw text behind
    /// the generic "Kesalahan:" marker.
    pub fn user_message(&self) -> String {
        match self {
            ModelError::MissingApiKey => {
                "API key belum diatur. Masukkan API key terlebih dahulu.".to_string()
            }
            ModelError::Network { source } => {
                if source.is_timeout() {
                    return "Permintaan melebihi batas waktu, silakan coba lagi.".to_string();
                }
                match source.status() {
                    Some(StatusCode::UNAUTHORIZED) => {
                        "API key tidak valid atau sudah kedaluwarsa.".to_string()
                    }
                    Some(StatusCode::PAYMENT_REQUIRED) => {
                        "Saldo akun tidak mencukupi, silakan isi ulang.".to_string()
                    }
                    Some(StatusCode::TOO_MANY_REQUESTS) => {
                        "Permintaan terlalu sering, coba beberapa saat lagi.".to_string()
                    }
                    Some(_) => format!("Kesalahan: {source}"),
                    None => normalize_wording(&source.to_string()),
                }
            }
            ModelError::InvalidResponse { reason } => {
                format!("Kesalahan: respons penyedia tidak valid ({reason})")
            }
        }
    }
}

/// Fallback matching on error wording for transports that report no status
fn normalize_wording(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    if lowered.contains("401") || lowered.contains("unauthorized") {
        "API key tidak valid atau sudah kedaluwarsa.".to_string()
    } else if lowered.contains("402") || lowered.contains("payment") {
        "Saldo akun tidak mencukupi, silakan isi ulang.".to_string()
    } else if lowered.contains("429") || lowered.contains("rate") {
        "Permintaan terlalu sering, coba beberapa saat lagi.".to_string()
    } else if lowered.contains("timeout") || lowered.contains("timed out") {
        "Permintaan melebihi batas waktu, silakan coba lagi.".to_string()
    } else {
        format!("Kesalahan: {raw}")
    }
}
