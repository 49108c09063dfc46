//! Model directory lookup with static fallback
//!
//! Best-effort read of the provider's model catalog. Any failure is swallowed
//! and replaced by the fixed default list; the failure is surfaced only as an
//! advisory string for the presentation layer.

use serde::Deserialize;
use tracing::{debug, warn};

use super::clients::OpenRouterClient;
use super::types::ModelError;
use crate::constants::{CATALOG_TIMEOUT, DEFAULT_MODELS, MODELS_PATH};

/// Sorted model identifiers, with an advisory when the static fallback is used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCatalog {
    pub models: Vec<String>,
    pub advisory: Option<String>,
}

impl ModelCatalog {
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            advisory: Some(format!(
                "Gagal mengambil daftar model: {}. Menggunakan daftar bawaan.",
                reason.into()
            )),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.advisory.is_some()
    }
}

impl OpenRouterClient {
    /// Fetch the provider's model catalog, falling back on any failure
    pub async fn models(&self) -> ModelCatalog {
        match self.try_fetch_models().await {
            Ok(models) if !models.is_empty() => {
                debug!(count = models.len(), "Fetched model catalog");
                ModelCatalog {
                    models,
                    advisory: None,
                }
            }
            Ok(_) => {
                warn!("Model catalog came back empty, using default list");
                ModelCatalog::fallback("daftar kosong")
            }
            Err(error) => {
                warn!(error = %error, "Model catalog fetch failed, using default list");
                ModelCatalog::fallback(error.user_message())
            }
        }
    }

    async fn try_fetch_models(&self) -> Result<Vec<String>, ModelError> {
        let url = self.base.build_url(MODELS_PATH);
        let response: ModelListResponse = self.base.get_with_bearer(&url, CATALOG_TIMEOUT).await?;

        let mut models: Vec<String> = response.data.into_iter().map(|entry| entry.id).collect();
        models.sort();
        Ok(models)
    }
}

#[derive(Deserialize)]
struct ModelListResponse {
    #[serde(default)]
    data: Vec<ModelListEntry>,
}

#[derive(Deserialize)]
struct ModelListEntry {
    id: String,
}
