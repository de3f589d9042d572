//! Jupiter Markets Client
//!
//! HTTP client for the Jupiter aggregator market-list endpoint. One GET
//! returns the full list of trading-pair objects; the first response is
//! treated as complete. No auth, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::MarketRecord;
use crate::ports::market_feed::{FeedError, MarketFeed};

/// Default Jupiter market-list endpoint.
const DEFAULT_MARKETS_URL: &str = "https://lite-api.jup.ag/v1/markets";

/// Jupiter markets client configuration
#[derive(Debug, Clone)]
pub struct JupiterConfig {
    /// Market-list endpoint URL
    pub list_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for JupiterConfig {
    fn default() -> Self {
        Self {
            list_url: DEFAULT_MARKETS_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Jupiter market-list client
#[derive(Debug, Clone)]
pub struct JupiterMarketsClient {
    config: JupiterConfig,
    http: Client,
}

impl JupiterMarketsClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, FeedError> {
        Self::with_config(JupiterConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: JupiterConfig) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FeedError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Configured market-list URL
    pub fn list_url(&self) -> &str {
        &self.config.list_url
    }

    /// Decode a market-list response body.
    ///
    /// A non-array body is a diagnostic, not an error: the refresh proceeds
    /// with zero markets. Array elements that fail to deserialize are
    /// skipped individually so one malformed record never drops the batch.
    fn decode_markets(body: Value) -> Vec<MarketRecord> {
        let items = match body {
            Value::Array(items) => items,
            other => {
                tracing::warn!(
                    body_type = value_type(&other),
                    "markets endpoint returned a non-array body"
                );
                return Vec::new();
            }
        };

        if items.is_empty() {
            tracing::debug!("markets endpoint returned an empty list");
            return Vec::new();
        }

        // Schema probe for the semi-structured feed.
        if let Some(Value::Object(sample)) = items.first() {
            let fields: Vec<&str> = sample.keys().map(String::as_str).collect();
            tracing::debug!(?fields, "market record fields");
        }

        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<MarketRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping undecodable market record");
                    None
                }
            })
            .collect()
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl MarketFeed for JupiterMarketsClient {
    async fn fetch_markets(&self) -> Result<Vec<MarketRecord>, FeedError> {
        let response = self
            .http
            .get(&self.config.list_url)
            .send()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        Ok(Self::decode_markets(body))
    }
}
