//! Domain Layer - Core pipeline logic for pairscope
//!
//! Pure data transformations with no I/O. All external interactions happen
//! through the ports layer.
//!
//! - `market`: the market-record view over aggregator responses
//! - `filter`: recency + native-mint pair filtering
//! - `rank`: liquidity ranking
//! - `icon`: fixed-size icon decoding

pub mod filter;
pub mod icon;
pub mod market;
pub mod rank;

pub use filter::{filter_markets, DEFAULT_WINDOW_DAYS};
pub use icon::{IconDecodeError, TokenIcon, ICON_SIZE};
pub use market::{is_valid_mint, MarketRecord, NATIVE_SOL_MINT};
pub use rank::{top_markets, DEFAULT_TOP_N};
