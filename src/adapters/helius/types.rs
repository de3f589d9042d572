//! Helius Token Metadata Types
//!
//! Wire types for the token-metadata endpoint. The response is a JSON array;
//! only the first element's off-chain pointers are consumed.

use serde::Deserialize;

use crate::ports::icon_source::{MetadataEntry, OffchainMetadata};

/// One element of the token-metadata response array.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenMetadataEntry {
    /// Off-chain metadata inlined in the response, when the service already
    /// resolved it.
    #[serde(rename = "offChainMetadata", default)]
    pub off_chain_metadata: Option<OffchainMetadata>,

    /// URI of the off-chain metadata document, when not inlined.
    #[serde(rename = "offChainUri", default)]
    pub off_chain_uri: Option<String>,
}

impl From<TokenMetadataEntry> for MetadataEntry {
    fn from(entry: TokenMetadataEntry) -> Self {
        Self {
            off_chain_metadata: entry.off_chain_metadata,
            off_chain_uri: entry.off_chain_uri,
        }
    }
}
