//! Market Filter
//!
//! Selects markets that launched within the recency window and have the
//! native mint on either side of the pair. Pure function over the fetched
//! list; skipped records are reported as log diagnostics, never as errors.

use chrono::{DateTime, Duration, Utc};

use super::market::MarketRecord;

/// Default recency window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Filter `markets` down to pairs involving `native_mint` that launched
/// within the last `window_days`, preserving original relative order.
///
/// The cutoff boundary is inclusive: a record whose launch time equals
/// `now - window_days` exactly is kept. Records with missing or unparseable
/// launch times are skipped with a diagnostic; records that are merely too
/// old or not paired with the native mint are skipped silently.
pub fn filter_markets(
    markets: &[MarketRecord],
    native_mint: &str,
    window_days: i64,
    now: DateTime<Utc>,
) -> Vec<MarketRecord> {
    let cutoff = now - Duration::days(window_days);
    let mut filtered = Vec::new();

    for market in markets {
        let launch_time = match market.launch_time.as_deref() {
            Some(t) => t,
            None => {
                tracing::debug!(
                    market = market.address_or_unknown(),
                    "skipping market without launch time"
                );
                continue;
            }
        };

        // RFC 3339 accepts both a literal `Z` suffix and explicit offsets.
        let launched = match DateTime::parse_from_rfc3339(launch_time) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(_) => {
                tracing::debug!(launch_time, "unparseable launch time, skipping market");
                continue;
            }
        };

        if launched < cutoff {
            continue;
        }

        if !market.involves(native_mint) {
            continue;
        }

        filtered.push(market.clone());
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::NATIVE_SOL_MINT;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn sol_market(address: &str, launch_time: Option<&str>) -> MarketRecord {
        MarketRecord {
            base_mint: Some(NATIVE_SOL_MINT.to_string()),
            quote_mint: Some("Quote111".to_string()),
            launch_time: launch_time.map(str::to_string),
            market_address: Some(address.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_recent_sol_pair_included() {
        let markets = vec![sol_market("m1", Some("2024-03-12T12:00:00Z"))];
        let filtered = filter_markets(&markets, NATIVE_SOL_MINT, 7, fixed_now());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].address_or_unknown(), "m1");
    }

    #[test]
    fn test_cutoff_boundary_is_inclusive() {
        // Exactly at now - 7 days.
        let at_cutoff = sol_market("exact", Some("2024-03-08T12:00:00Z"));
        // One microsecond older than the cutoff.
        let just_older = sol_market("older", Some("2024-03-08T11:59:59.999999Z"));

        let filtered = filter_markets(
            &[at_cutoff, just_older],
            NATIVE_SOL_MINT,
            7,
            fixed_now(),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].address_or_unknown(), "exact");
    }

    #[test]
    fn test_window_narrows_result() {
        // Launched 3 days before the fixed now.
        let markets = vec![sol_market("m1", Some("2024-03-12T12:00:00Z"))];

        let wide = filter_markets(&markets, NATIVE_SOL_MINT, 7, fixed_now());
        assert_eq!(wide.len(), 1);

        let narrow = filter_markets(&markets, NATIVE_SOL_MINT, 2, fixed_now());
        assert!(narrow.is_empty());
    }

    #[test]
    fn test_missing_launch_time_skipped() {
        let markets = vec![sol_market("m1", None)];
        let filtered = filter_markets(&markets, NATIVE_SOL_MINT, 7, fixed_now());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_unparseable_launch_time_skipped() {
        let markets = vec![
            sol_market("m1", Some("yesterday-ish")),
            sol_market("m2", Some("2024-03-14")),
        ];
        let filtered = filter_markets(&markets, NATIVE_SOL_MINT, 7, fixed_now());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_offset_suffix_accepted() {
        let markets = vec![sol_market("m1", Some("2024-03-14T10:00:00+02:00"))];
        let filtered = filter_markets(&markets, NATIVE_SOL_MINT, 7, fixed_now());
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_non_native_pair_excluded_regardless_of_timestamp() {
        let market = MarketRecord {
            base_mint: Some("TokenA11".to_string()),
            quote_mint: Some("TokenB22".to_string()),
            launch_time: Some("2024-03-14T12:00:00Z".to_string()),
            ..Default::default()
        };
        let filtered = filter_markets(&[market], NATIVE_SOL_MINT, 7, fixed_now());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_output_preserves_relative_order() {
        let markets = vec![
            sol_market("a", Some("2024-03-10T00:00:00Z")),
            sol_market("b", None),
            sol_market("c", Some("2024-03-14T00:00:00Z")),
            sol_market("d", Some("2024-03-11T00:00:00Z")),
        ];
        let filtered = filter_markets(&markets, NATIVE_SOL_MINT, 7, fixed_now());
        let order: Vec<&str> = filtered.iter().map(|m| m.address_or_unknown()).collect();
        assert_eq!(order, vec!["a", "c", "d"]);
    }
}
