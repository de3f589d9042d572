//! Market Feed Port
//!
//! Trait abstraction for the aggregator market-list endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::MarketRecord;

/// Market feed error type
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("unexpected response status: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Source of the full trading-pair market list.
///
/// One call fetches the complete list; the first response is treated as
/// complete (no pagination). Implementations do not retry.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Fetch all market records from the aggregator.
    async fn fetch_markets(&self) -> Result<Vec<MarketRecord>, FeedError>;
}
