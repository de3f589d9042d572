//! Application Layer - Refresh workflow and icon resolution
//!
//! Coordinates the domain pipeline with the port implementations and owns
//! the two pieces of shared state: the last ranked dataset and the icon
//! cache.

pub mod icon_cache;
pub mod icon_resolver;
pub mod screener;

pub use icon_cache::IconCache;
pub use icon_resolver::IconResolver;
pub use screener::{MarketScreener, RefreshError, RefreshSummary};
