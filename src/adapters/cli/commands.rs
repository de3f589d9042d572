//! CLI Command Definitions
//!
//! clap command surface for pairscope plus the ranked-table renderer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::MarketRecord;

/// pairscope - recently listed Solana trading pairs ranked by liquidity
#[derive(Parser, Debug)]
#[command(
    name = "pairscope",
    version = env!("CARGO_PKG_VERSION"),
    about = "Recently listed Solana trading pairs ranked by liquidity",
    long_about = "pairscope fetches the Jupiter market list, keeps pairs involving native SOL \
                  that launched within a recent window, ranks them by liquidity, and can \
                  resolve token icon images on demand."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Refresh market data and print the ranked table
    Top(TopCmd),

    /// Resolve and save the icon images for a trading pair
    Icons(IconsCmd),
}

/// Refresh and rank markets
#[derive(Parser, Debug)]
pub struct TopCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Override the launch-recency window in days
    #[arg(long, value_name = "DAYS")]
    pub window_days: Option<i64>,

    /// Override the number of ranked markets to show
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Resolve a pair's token icons
#[derive(Parser, Debug)]
pub struct IconsCmd {
    /// Base token mint address
    #[arg(value_name = "BASE_MINT")]
    pub base_mint: String,

    /// Quote token mint address
    #[arg(value_name = "QUOTE_MINT")]
    pub quote_mint: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Directory to write the decoded PNG icons into
    #[arg(short, long, value_name = "DIR", default_value = "icons")]
    pub out_dir: PathBuf,
}

/// Render the ranked dataset as a fixed-width table.
pub fn render_table(markets: &[MarketRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:<12} {:<44} {:<44} {:<12} {:>14}\n",
        "base", "quote", "base mint", "quote mint", "launched", "liquidity USD"
    ));

    for market in markets {
        out.push_str(&format!(
            "{:<12} {:<12} {:<44} {:<44} {:<12} {:>14.2}\n",
            market.base_symbol_display(),
            market.quote_symbol_display(),
            market.base_mint.as_deref().unwrap_or("-"),
            market.quote_mint.as_deref().unwrap_or("-"),
            market.launch_date(),
            market.liquidity(),
        ));
    }

    out
}
