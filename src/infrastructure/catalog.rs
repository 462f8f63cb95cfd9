use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::domain::images::ImageRecord;

pub const PICSUM_URL: &str = "https://picsum.photos/";
const LIST_PATH: &str = "v2/list";
const USER_AGENT: &str = "segpic/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to list images: {0}")]
    Network(String),
    #[error("failed to decode images: {0}")]
    Decode(String),
}

/// Read-only client for the remote photo catalog.
#[derive(Clone)]
pub struct CatalogClient {
    base_url: Url,
    http: Client,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to configure HTTP client")?;
        Self::with_client(base_url, http)
    }

    /// Use a caller-supplied HTTP client instead of the default 10 second one.
    pub fn with_client(base_url: &str, http: Client) -> anyhow::Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("invalid catalog url: {base_url}"))?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path().trim_end_matches('/')));
        }
        Ok(Self { base_url, http })
    }

    /// Fetch the catalog's image list. One request, no retries, no paging.
    #[tracing::instrument(skip(self), fields(catalog = %self.base_url))]
    pub async fn list_images(&self) -> Result<Vec<ImageRecord>, CatalogError> {
        let url = self
            .base_url
            .join(LIST_PATH)
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "catalog returned status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        let images: Vec<ImageRecord> =
            serde_json::from_slice(&body).map_err(|err| CatalogError::Decode(err.to_string()))?;

        info!(count = images.len(), "fetched image catalog");
        Ok(images)
    }
}
