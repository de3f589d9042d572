//! Market Record
//!
//! Transient view over a single trading-pair object from the aggregator's
//! market list. Only the fields the pipeline consumes are modeled; everything
//! else in the response is ignored. No identity is tracked across refreshes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Mint address of wrapped SOL, the native-token filter predicate.
pub const NATIVE_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Length in bytes of a decoded Solana address.
const MINT_ADDRESS_LEN: usize = 32;

/// One trading-pair record from the aggregator market list.
///
/// The feed is semi-structured: any field may be missing and `liquidityUSD`
/// occasionally arrives as a non-numeric value. Deserialization is lenient so
/// a single malformed field never drops the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketRecord {
    #[serde(rename = "baseSymbol", default)]
    pub base_symbol: Option<String>,

    #[serde(rename = "quoteSymbol", default)]
    pub quote_symbol: Option<String>,

    #[serde(rename = "baseMint", default)]
    pub base_mint: Option<String>,

    #[serde(rename = "quoteMint", default)]
    pub quote_mint: Option<String>,

    /// Launch timestamp as an ISO-8601 string (`Z` or explicit offset suffix).
    #[serde(rename = "launchTime", default)]
    pub launch_time: Option<String>,

    /// Liquidity estimate in USD; used purely as a sort key.
    #[serde(rename = "liquidityUSD", default, deserialize_with = "lenient_f64")]
    pub liquidity_usd: Option<f64>,

    /// Market account address, used only in diagnostics.
    #[serde(rename = "marketAddress", default)]
    pub market_address: Option<String>,
}

impl MarketRecord {
    /// Liquidity sort key. Missing or non-finite values read as 0.
    pub fn liquidity(&self) -> f64 {
        match self.liquidity_usd {
            Some(l) if l.is_finite() => l,
            _ => 0.0,
        }
    }

    /// Whether this pair has `mint` on either side.
    pub fn involves(&self, mint: &str) -> bool {
        self.base_mint.as_deref() == Some(mint) || self.quote_mint.as_deref() == Some(mint)
    }

    /// Market address for log lines, or "unknown".
    pub fn address_or_unknown(&self) -> &str {
        self.market_address.as_deref().unwrap_or("unknown")
    }

    /// Date part of the launch timestamp for table display.
    pub fn launch_date(&self) -> &str {
        self.launch_time
            .as_deref()
            .and_then(|t| t.split('T').next())
            .unwrap_or("unknown")
    }

    /// Base symbol for display.
    pub fn base_symbol_display(&self) -> &str {
        self.base_symbol.as_deref().unwrap_or("N/A")
    }

    /// Quote symbol for display.
    pub fn quote_symbol_display(&self) -> &str {
        self.quote_symbol.as_deref().unwrap_or("N/A")
    }
}

/// Accept a JSON number for `liquidityUSD`; anything else reads as absent.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

/// Check that a string decodes as a base58 32-byte Solana address.
pub fn is_valid_mint(mint: &str) -> bool {
    bs58::decode(mint)
        .into_vec()
        .map(|bytes| bytes.len() == MINT_ADDRESS_LEN)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "baseSymbol": "BONK",
            "quoteSymbol": "SOL",
            "baseMint": "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
            "quoteMint": "So11111111111111111111111111111111111111112",
            "launchTime": "2024-03-01T12:00:00Z",
            "liquidityUSD": 1234.56,
            "marketAddress": "Mkt111"
        }"#;

        let record: MarketRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_symbol.as_deref(), Some("BONK"));
        assert_eq!(record.quote_symbol.as_deref(), Some("SOL"));
        assert!(record.involves(NATIVE_SOL_MINT));
        assert_relative_eq!(record.liquidity(), 1234.56);
        assert_eq!(record.launch_date(), "2024-03-01");
        assert_eq!(record.address_or_unknown(), "Mkt111");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: MarketRecord = serde_json::from_str("{}").unwrap();
        assert!(record.launch_time.is_none());
        assert_eq!(record.liquidity(), 0.0);
        assert_eq!(record.address_or_unknown(), "unknown");
        assert_eq!(record.launch_date(), "unknown");
        assert_eq!(record.base_symbol_display(), "N/A");
        assert!(!record.involves(NATIVE_SOL_MINT));
    }

    #[test]
    fn test_non_numeric_liquidity_reads_as_zero() {
        let json = r#"{"liquidityUSD": "a lot", "baseSymbol": "X"}"#;
        let record: MarketRecord = serde_json::from_str(json).unwrap();
        assert!(record.liquidity_usd.is_none());
        assert_eq!(record.liquidity(), 0.0);
        // The rest of the record still deserialized.
        assert_eq!(record.base_symbol.as_deref(), Some("X"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"baseSymbol": "WIF", "lpMint": "x", "volume24h": 99}"#;
        let record: MarketRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base_symbol.as_deref(), Some("WIF"));
    }

    #[test]
    fn test_involves_either_side() {
        let record = MarketRecord {
            base_mint: Some("AAA".to_string()),
            quote_mint: Some(NATIVE_SOL_MINT.to_string()),
            ..Default::default()
        };
        assert!(record.involves(NATIVE_SOL_MINT));
        assert!(record.involves("AAA"));
        assert!(!record.involves("BBB"));
    }

    #[test]
    fn test_is_valid_mint() {
        assert!(is_valid_mint(NATIVE_SOL_MINT));
        assert!(is_valid_mint("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"));
        assert!(!is_valid_mint("not-base58-0OIl"));
        assert!(!is_valid_mint("abc"));
        assert!(!is_valid_mint(""));
    }
}
