//! Market Ranker
//!
//! Stable sort of the filtered market set by liquidity descending, truncated
//! to the top N. Ties keep their original relative order.

use std::cmp::Ordering;

use super::market::MarketRecord;

/// Default number of ranked markets to keep.
pub const DEFAULT_TOP_N: usize = 20;

/// Return the `top_n` markets with the highest liquidity, descending.
///
/// Missing liquidity sorts as 0. The sort is stable, so equal-liquidity
/// markets keep their input order. Shorter input yields a shorter output.
pub fn top_markets(filtered: &[MarketRecord], top_n: usize) -> Vec<MarketRecord> {
    let mut ranked = filtered.to_vec();
    ranked.sort_by(|a, b| {
        b.liquidity()
            .partial_cmp(&a.liquidity())
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}
