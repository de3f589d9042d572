//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, these traits abstract:
//! - The aggregator market-list feed
//! - The token-metadata / off-chain metadata / image sources
//!
//! `mocks` provides deterministic call-recording implementations for tests.

pub mod icon_source;
pub mod market_feed;
pub mod mocks;

pub use icon_source::{IconSource, IconSourceError, MetadataEntry, OffchainMetadata};
pub use market_feed::{FeedError, MarketFeed};
