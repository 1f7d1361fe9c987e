//! HTTP transport for the import API.

use anyhow::anyhow;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use super::ImportApi;
use crate::error::ImportError;
use crate::models::{ApiEnvelope, ImportRecord};

/// reqwest-backed [`ImportApi`] bound to one API base URL.
pub struct HttpImportApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpImportApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ImportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ImportError::Transport(anyhow!("Failed to create HTTP client: {}", e)))?;

        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

impl ImportApi for HttpImportApi {
    async fn post_batch(
        &self,
        endpoint: &str,
        batch: &[ImportRecord],
    ) -> Result<ApiEnvelope, ImportError> {
        let url = self.url_for(endpoint);
        log::debug!("POST {} ({} records)", url, batch.len());

        let response = self
            .client
            .post(&url)
            .json(batch)
            .send()
            .await
            .map_err(|e| ImportError::Transport(anyhow!("Request failed for {}: {}", endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Import API error for {}: {} - {}", endpoint, status, body);
            return Err(ImportError::Transport(anyhow!(
                "HTTP error for {}: {} - {}",
                endpoint,
                status,
                body
            )));
        }

        response
            .json::<ApiEnvelope>()
            .await
            .map_err(|e| ImportError::Transport(anyhow!("Failed to parse JSON for {}: {}", endpoint, e)))
    }
}
