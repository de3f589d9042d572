//! Icon Source Port
//!
//! Trait abstraction over the three network hops of icon resolution: the
//! token-metadata lookup, the optional off-chain metadata URI, and the image
//! download itself. The resolver in the application layer drives these; the
//! port keeps it testable without a network.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Icon source error type
#[derive(Debug, Error)]
pub enum IconSourceError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("unexpected response status: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Off-chain metadata document, inlined in the metadata response or fetched
/// from a referenced URI. Only the image URL is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OffchainMetadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub symbol: Option<String>,

    /// Icon image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// The slice of a token-metadata entry the resolver consumes.
#[derive(Debug, Clone, Default)]
pub struct MetadataEntry {
    /// Off-chain metadata inlined in the response, when present.
    pub off_chain_metadata: Option<OffchainMetadata>,
    /// Pointer to the off-chain metadata document, when not inlined.
    pub off_chain_uri: Option<String>,
}

/// Source for token metadata and icon image bytes.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Look up the metadata entry for a mint. `Ok(None)` means the service
    /// returned an empty result for this mint.
    async fn token_metadata(&self, mint: &str) -> Result<Option<MetadataEntry>, IconSourceError>;

    /// Fetch an off-chain metadata document from its URI.
    async fn offchain_metadata(&self, uri: &str) -> Result<OffchainMetadata, IconSourceError>;

    /// Download raw image bytes.
    async fn image_bytes(&self, url: &str) -> Result<Vec<u8>, IconSourceError>;
}
