//! pairscope - Recently listed Solana trading pairs ranked by liquidity

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pairscope::adapters::cli::{render_table, CliApp, Command, IconsCmd, TopCmd};
use pairscope::adapters::helius::{HeliusClient, HeliusConfig};
use pairscope::adapters::jupiter::{JupiterConfig, JupiterMarketsClient};
use pairscope::application::{IconCache, IconResolver, MarketScreener};
use pairscope::config::{load_config, Config};
use pairscope::domain::is_valid_mint;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (the API key goes here, not in config.toml).
    dotenvy::dotenv().ok();

    let app = CliApp::parse();

    let config_path = match &app.command {
        Command::Top(cmd) => &cmd.config,
        Command::Icons(cmd) => &cmd.config,
    };
    let config_path = shellexpand::tilde(&config_path.to_string_lossy()).to_string();
    let config = load_config(&config_path).context("Failed to load configuration")?;

    init_logging(app.verbose, app.debug, &config.logging.level);

    match app.command {
        Command::Top(cmd) => top_command(cmd, config).await,
        Command::Icons(cmd) => icons_command(cmd, config).await,
    }
}

/// Initialize logging. CLI flags win; otherwise the configured level is the
/// fallback behind RUST_LOG.
fn init_logging(verbose: bool, debug: bool, config_level: &str) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        config_level
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Handle the top command: one refresh cycle, then print the ranked table.
async fn top_command(cmd: TopCmd, config: Config) -> Result<()> {
    let window_days = cmd.window_days.unwrap_or(config.markets.window_days);
    if window_days <= 0 {
        bail!("--window-days must be > 0, got {window_days}");
    }
    let top_n = cmd.top.unwrap_or(config.markets.top_n);

    let feed = JupiterMarketsClient::with_config(JupiterConfig {
        list_url: config.markets.list_url.clone(),
        timeout: Duration::from_secs(config.markets.timeout_secs),
    })
    .context("Failed to create Jupiter client")?;

    let screener = MarketScreener::new(
        feed,
        config.tokens.native_mint.clone(),
        window_days,
        top_n,
        Arc::new(IconCache::new()),
    );

    let summary = screener.refresh().await?;
    println!(
        "fetched {} markets, {} launched within the last {} days and paired with the native token",
        summary.fetched, summary.filtered, window_days
    );

    let markets = screener.markets().await;
    if markets.is_empty() {
        println!("no markets to show");
        return Ok(());
    }

    print!("{}", render_table(&markets));
    Ok(())
}

/// Handle the icons command: resolve both icons of a pair and write PNGs.
async fn icons_command(cmd: IconsCmd, config: Config) -> Result<()> {
    for mint in [&cmd.base_mint, &cmd.quote_mint] {
        if !is_valid_mint(mint) {
            bail!("not a valid base58 mint address: {mint}");
        }
    }

    let client = HeliusClient::with_config(HeliusConfig {
        api_url: config.metadata.api_url.clone(),
        api_key: config.metadata.get_api_key(),
        timeout: Duration::from_secs(config.metadata.timeout_secs),
    })
    .context("Failed to create metadata client")?;

    let resolver = IconResolver::new(client, Arc::new(IconCache::new()));

    std::fs::create_dir_all(&cmd.out_dir)
        .with_context(|| format!("Failed to create {}", cmd.out_dir.display()))?;

    for mint in [cmd.base_mint, cmd.quote_mint] {
        match resolver.resolve_icon(&mint).await {
            Some(icon) => {
                let path = cmd.out_dir.join(format!("{mint}.png"));
                let png = icon
                    .to_png_bytes()
                    .with_context(|| format!("Failed to encode icon for {mint}"))?;
                std::fs::write(&path, png)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{mint}: icon saved to {}", path.display());
            }
            None => println!("{mint}: icon not found"),
        }
    }

    Ok(())
}
