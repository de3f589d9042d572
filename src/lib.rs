//! pairscope - Recently listed Solana trading pairs ranked by liquidity
//!
//! Fetches the Jupiter market list, filters to pairs involving native SOL
//! that launched within a recent window, ranks them by liquidity, and
//! resolves token icon images on demand.
//!
//! # Modules
//!
//! - `domain`: Pure pipeline logic (MarketRecord, filter, rank, TokenIcon)
//! - `ports`: Trait abstractions (MarketFeed, IconSource) and test mocks
//! - `adapters`: External implementations (Jupiter, Helius, CLI)
//! - `application`: Refresh orchestration, icon cache and resolver
//! - `config`: Configuration loading and validation

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
