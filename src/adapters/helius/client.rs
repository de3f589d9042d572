//! Helius Token Metadata Client
//!
//! HTTP client for the Helius-style token-metadata endpoint plus the two
//! follow-up fetches icon resolution needs: the off-chain metadata document
//! and the image bytes. Authenticated by an API key passed as a query
//! parameter. No retries; the resolver treats any failure as "no icon".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::TokenMetadataEntry;
use crate::ports::icon_source::{IconSource, IconSourceError, MetadataEntry, OffchainMetadata};

/// Default Helius token-metadata endpoint.
const DEFAULT_METADATA_URL: &str = "https://api.helius.xyz/v0/token-metadata";

/// Helius client configuration
#[derive(Debug, Clone)]
pub struct HeliusConfig {
    /// Token-metadata endpoint URL
    pub api_url: String,
    /// API key; appended as the `api-key` query parameter when present.
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HeliusConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_METADATA_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Helius token-metadata client
#[derive(Debug, Clone)]
pub struct HeliusClient {
    config: HeliusConfig,
    http: Client,
}

impl HeliusClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, IconSourceError> {
        Self::with_config(HeliusConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HeliusConfig) -> Result<Self, IconSourceError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IconSourceError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Configured metadata endpoint URL
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, IconSourceError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| IconSourceError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IconSourceError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl IconSource for HeliusClient {
    async fn token_metadata(&self, mint: &str) -> Result<Option<MetadataEntry>, IconSourceError> {
        let mut request = self.http.get(&self.config.api_url).query(&[("mint", mint)]);
        if let Some(ref api_key) = self.config.api_key {
            request = request.query(&[("api-key", api_key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| IconSourceError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IconSourceError::Status(status.as_u16()));
        }

        let entries: Vec<TokenMetadataEntry> = response
            .json()
            .await
            .map_err(|e| IconSourceError::Parse(e.to_string()))?;

        Ok(entries.into_iter().next().map(MetadataEntry::from))
    }

    async fn offchain_metadata(&self, uri: &str) -> Result<OffchainMetadata, IconSourceError> {
        self.get(uri)
            .await?
            .json()
            .await
            .map_err(|e| IconSourceError::Parse(e.to_string()))
    }

    async fn image_bytes(&self, url: &str) -> Result<Vec<u8>, IconSourceError> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| IconSourceError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
