use anyhow::Context;
use tracing::level_filters::LevelFilter;

use crate::utils::precision::DEFAULT_MAX_DECIMALS;

/// Settings for the demo binary, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub swap_from: Option<String>,
    pub swap_to: Option<String>,
    /// Raw amount, sanitized by the form
    pub swap_amount: String,
    pub max_decimals: usize,
    /// Inline JSON feed replacing the built-in one
    pub price_feed_json: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swap_from: None,
            swap_to: None,
            swap_amount: "1".to_string(),
            max_decimals: DEFAULT_MAX_DECIMALS,
            price_feed_json: None,
            log_level: LevelFilter::INFO,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_decimals = match non_empty("MAX_DECIMALS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("Invalid MAX_DECIMALS {}", v))?,
            None => defaults.max_decimals,
        };

        let log_level = match non_empty("LOG_LEVEL") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("Invalid LOG_LEVEL {}", v))?,
            None => defaults.log_level,
        };

        Ok(Self {
            swap_from: non_empty("SWAP_FROM"),
            swap_to: non_empty("SWAP_TO"),
            swap_amount: non_empty("SWAP_AMOUNT").unwrap_or(defaults.swap_amount),
            max_decimals,
            price_feed_json: non_empty("PRICE_FEED_JSON"),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("SWAP_FROM", "ETH"),
            ("SWAP_TO", "USDC"),
            ("SWAP_AMOUNT", "1.5"),
            ("MAX_DECIMALS", "6"),
            ("LOG_LEVEL", "debug"),
            ("PRICE_FEED_JSON", ""),
        ]))
        .unwrap();

        assert_eq!(config.swap_from.as_deref(), Some("ETH"));
        assert_eq!(config.swap_to.as_deref(), Some("USDC"));
        assert_eq!(config.swap_amount, "1.5");
        assert_eq!(config.max_decimals, 6);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert!(config.price_feed_json.is_none());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(Config::from_lookup(lookup(&[("MAX_DECIMALS", "-1")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).is_err());
    }
}
