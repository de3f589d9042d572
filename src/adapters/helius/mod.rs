//! Helius Adapter
//!
//! Implementation of the IconSource port: token-metadata lookup, off-chain
//! metadata fetch, and image download.

mod client;
mod types;

pub use client::{HeliusClient, HeliusConfig};
pub use types::TokenMetadataEntry;
