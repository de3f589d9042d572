//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching
//! config/default.toml structure.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::market::is_valid_mint;

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub markets: MarketsSection,
    pub tokens: TokensSection,
    pub metadata: MetadataSection,
    pub logging: LoggingSection,
}

/// Market-list pipeline configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsSection {
    /// Aggregator market-list endpoint URL
    pub list_url: String,
    /// Launch-recency window in days
    pub window_days: i64,
    /// Number of ranked markets to keep
    pub top_n: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Tokens configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TokensSection {
    /// Native-token mint used as the pair filter predicate
    pub native_mint: String,
}

/// Token-metadata endpoint configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataSection {
    /// Token-metadata endpoint URL
    pub api_url: String,
    /// API key; may instead be supplied via the HELIUS_API_KEY env var
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MetadataSection {
    /// Get the API key with environment variable fallback.
    /// Checks the config value first, then the HELIUS_API_KEY env var.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var("HELIUS_API_KEY").ok()
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markets.list_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "markets.list_url cannot be empty".to_string(),
            ));
        }

        if self.markets.window_days <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "markets.window_days must be > 0, got {}",
                self.markets.window_days
            )));
        }

        if self.markets.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "markets.top_n must be > 0".to_string(),
            ));
        }

        if self.markets.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "markets.timeout_secs must be > 0".to_string(),
            ));
        }

        if !is_valid_mint(&self.tokens.native_mint) {
            return Err(ConfigError::ValidationError(format!(
                "tokens.native_mint is not a valid base58 address: {}",
                self.tokens.native_mint
            )));
        }

        if self.metadata.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "metadata.api_url cannot be empty".to_string(),
            ));
        }

        if self.metadata.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "metadata.timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_valid_config() -> String {
        r#"
[markets]
list_url = "https://lite-api.jup.ag/v1/markets"
window_days = 7
top_n = 20
timeout_secs = 30

[tokens]
native_mint = "So11111111111111111111111111111111111111112"

[metadata]
api_url = "https://api.helius.xyz/v0/token-metadata"
api_key = "test-key"
timeout_secs = 30

[logging]
level = "info"
"#
        .to_string()
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(create_valid_config().as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.markets.window_days, 7);
        assert_eq!(config.markets.top_n, 20);
        assert_eq!(
            config.tokens.native_mint,
            "So11111111111111111111111111111111111111112"
        );
        assert_eq!(config.metadata.get_api_key().as_deref(), Some("test-key"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/config.toml");
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_invalid_window_days() {
        let content = create_valid_config().replace("window_days = 7", "window_days = 0");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_invalid_top_n() {
        let content = create_valid_config().replace("top_n = 20", "top_n = 0");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_invalid_native_mint() {
        let content = create_valid_config().replace(
            "So11111111111111111111111111111111111111112",
            "not-a-mint",
        );
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_api_key_optional_in_file() {
        let content = create_valid_config().replace("api_key = \"test-key\"\n", "");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert!(config.metadata.api_key.is_none());
    }

    #[test]
    fn test_empty_api_key_falls_through() {
        let section = MetadataSection {
            api_url: "https://api.helius.xyz/v0/token-metadata".to_string(),
            api_key: Some(String::new()),
            timeout_secs: 30,
        };
        // Empty config value is treated as absent (env var may still apply).
        assert_eq!(section.get_api_key(), std::env::var("HELIUS_API_KEY").ok());
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[markets\nlist_url = ").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }
}
