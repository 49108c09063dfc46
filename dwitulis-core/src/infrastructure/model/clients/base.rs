//! Base HTTP client with shared logic

use crate::constants::{ATTRIBUTION_REFERER, ATTRIBUTION_TITLE};
use crate::infrastructure::model::types::ModelError;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            endpoint,
            api_key,
            http: Client::new(),
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON with bearer auth and attribution headers
    pub async fn post_with_bearer<Req, Res>(
        &self,
        url: &str,
        body: &Req,
        timeout: Duration,
    ) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;

        self.http
            .post(url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", ATTRIBUTION_REFERER)
            .header("X-Title", ATTRIBUTION_TITLE)
            .json(body)
            .send()
            .await
            .map_err(ModelError::network)?
            .error_for_status()
            .map_err(ModelError::network)?
            .json()
            .await
            .map_err(ModelError::network)
    }

    /// Get JSON with bearer auth and attribution headers
    pub async fn get_with_bearer<Res>(&self, url: &str, timeout: Duration) -> Result<Res, ModelError>
    where
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;

        self.http
            .get(url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("HTTP-Referer", ATTRIBUTION_REFERER)
            .header("X-Title", ATTRIBUTION_TITLE)
            .send()
            .await
            .map_err(ModelError::network)?
            .error_for_status()
            .map_err(ModelError::network)?
            .json()
            .await
            .map_err(ModelError::network)
    }

    fn require_api_key(&self) -> Result<&str, ModelError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ModelError::MissingApiKey)
    }
}
