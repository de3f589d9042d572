//! Market Screener
//!
//! Orchestrates one refresh cycle: clear the previous dataset and icon
//! cache, fetch the market list, filter to recent native-token pairs, rank
//! by liquidity, and retain the ranked set so later icon lookups can recover
//! a row's base/quote mints.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use super::icon_cache::IconCache;
use crate::domain::{filter_markets, top_markets, MarketRecord};
use crate::ports::market_feed::MarketFeed;

#[derive(Debug, Error)]
pub enum RefreshError {
    /// A refresh is already in flight; the trigger is disabled until it
    /// completes.
    #[error("a refresh is already running")]
    AlreadyRunning,
}

/// Counts reported after a refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub fetched: usize,
    pub filtered: usize,
    pub ranked: usize,
}

/// Refresh pipeline plus the only state shared across interactions: the
/// last ranked dataset and the icon cache.
pub struct MarketScreener<F: MarketFeed> {
    feed: F,
    native_mint: String,
    window_days: i64,
    top_n: usize,
    cache: Arc<IconCache>,
    markets: RwLock<Vec<MarketRecord>>,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<F: MarketFeed> MarketScreener<F> {
    pub fn new(
        feed: F,
        native_mint: String,
        window_days: i64,
        top_n: usize,
        cache: Arc<IconCache>,
    ) -> Self {
        Self {
            feed,
            native_mint,
            window_days,
            top_n,
            cache,
            markets: RwLock::new(Vec::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one refresh cycle and return the stage counts.
    ///
    /// A fetch failure is logged and treated as an empty market list - the
    /// refresh completes with zero rows rather than aborting. Only an
    /// attempt to start a second refresh while one is in flight is an error.
    pub async fn refresh(&self) -> Result<RefreshSummary, RefreshError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(RefreshError::AlreadyRunning);
        }
        let _guard = InFlightGuard(&self.in_flight);

        self.markets.write().await.clear();
        self.cache.clear().await;
        tracing::info!("refreshing market data");

        let markets = match self.feed.fetch_markets().await {
            Ok(markets) => markets,
            Err(e) => {
                tracing::error!(error = %e, "market fetch failed, continuing with zero markets");
                Vec::new()
            }
        };
        tracing::info!(fetched = markets.len(), "fetched markets");

        let filtered = filter_markets(&markets, &self.native_mint, self.window_days, Utc::now());
        tracing::info!(
            filtered = filtered.len(),
            window_days = self.window_days,
            "filtered to recent native-token pairs"
        );

        let ranked = top_markets(&filtered, self.top_n);
        let summary = RefreshSummary {
            fetched: markets.len(),
            filtered: filtered.len(),
            ranked: ranked.len(),
        };

        *self.markets.write().await = ranked;
        tracing::info!(ranked = summary.ranked, "refresh complete");
        Ok(summary)
    }

    /// Snapshot of the last ranked dataset.
    pub async fn markets(&self) -> Vec<MarketRecord> {
        self.markets.read().await.clone()
    }

    /// Ranked market at a table row, if the row exists.
    pub async fn market_at(&self, row: usize) -> Option<MarketRecord> {
        self.markets.read().await.get(row).cloned()
    }

    /// Shared icon cache, cleared at the start of every refresh.
    pub fn icon_cache(&self) -> Arc<IconCache> {
        Arc::clone(&self.cache)
    }
}
