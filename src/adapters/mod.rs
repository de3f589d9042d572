//! Adapters Layer - External System Implementations
//!
//! Implementations of the port traits:
//! - Jupiter: aggregator market-list client
//! - Helius: token-metadata and icon image client
//! - CLI: command definitions and table rendering

pub mod cli;
pub mod helius;
pub mod jupiter;

pub use cli::CliApp;
pub use helius::HeliusClient;
pub use jupiter::JupiterMarketsClient;
