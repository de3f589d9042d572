//! Jupiter Adapter
//!
//! Implementation of the MarketFeed port for the Jupiter aggregator
//! market-list endpoint.

mod markets;

pub use markets::{JupiterConfig, JupiterMarketsClient};
