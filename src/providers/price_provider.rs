use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::token::{find_token, sanitize_price, Token};
use crate::traits::price_provider::PriceProvider;

/// Built-in price feed used when no other feed is configured
pub const DEFAULT_PRICE_FEED: &str = r#"[
    {"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.20811525423728813},
    {"currency": "bNEO", "date": "2023-08-29T07:10:50.000Z", "price": 7.1282679},
    {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.9337373737374},
    {"currency": "USDC", "date": "2023-08-29T07:10:40.000Z", "price": 1.0},
    {"currency": "ATOM", "date": "2023-08-29T07:10:50.000Z", "price": 7.186657333333334},
    {"currency": "OSMO", "date": "2023-08-29T07:10:50.000Z", "price": 0.3772974333333333},
    {"currency": "WBTC", "date": "2023-08-29T07:10:52.000Z", "price": 26002.82202020202},
    {"currency": "USDC", "date": "2023-08-29T07:10:30.000Z", "price": 0.989832},
    {"currency": "LUNA", "date": "2023-08-29T07:10:40.000Z", "price": 0.40955638333333334},
    {"currency": "RATOM", "date": "2023-08-29T07:10:50.000Z", "price": 0}
]"#;

/// One entry of a JSON price feed
#[derive(Debug, Deserialize)]
struct FeedEntry {
    #[serde(default)]
    id: Option<String>,
    currency: String,
    price: f64,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    logo: Option<String>,
}

impl FeedEntry {
    /// Missing ids fall back to the currency symbol
    fn into_token(self) -> Token {
        let id = self.id.unwrap_or_else(|| self.currency.clone());
        let logo = self
            .logo
            .unwrap_or_else(|| format!("{}.svg", self.currency));

        Token {
            id,
            currency: self.currency,
            price: sanitize_price(self.price),
            logo,
            date: self.date,
        }
    }
}

/// Price provider serving a fixed snapshot.
///
/// Single-id lookups go through `price_cache`, which is filled on first
/// lookup of each id so repeated lookups skip the scan over `tokens`.
pub struct StaticPriceProvider {
    tokens: Vec<Token>,
    price_cache: Arc<DashMap<String, f64>>,
}

impl StaticPriceProvider {
    /// Create a provider from an already built token list
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: dedup_tokens(tokens),
            price_cache: Arc::new(DashMap::new()),
        }
    }

    /// Number of ids looked up so far
    pub fn cached_prices(&self) -> usize {
        self.price_cache.len()
    }

    /// Parse a JSON array of feed entries
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let entries: Vec<FeedEntry> =
            serde_json::from_str(json).context("Invalid price feed JSON")?;
        debug!("Loaded {} price feed entries", entries.len());

        Ok(Self::new(entries.into_iter().map(FeedEntry::into_token).collect()))
    }

    /// Tokens in feed order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of unique tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the feed is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for StaticPriceProvider {
    fn default() -> Self {
        match Self::from_json(DEFAULT_PRICE_FEED) {
            Ok(provider) => provider,
            Err(e) => {
                warn!("Built-in price feed rejected: {}", e);
                Self::new(Vec::new())
            }
        }
    }
}

/// Keep the first token seen for each id
fn dedup_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| {
            let fresh = seen.insert(token.id.clone());
            if !fresh {
                warn!("Dropping duplicate price entry for {}", token.id);
            }
            fresh
        })
        .collect()
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn fetch_token_prices(&self) -> anyhow::Result<Vec<Token>> {
        Ok(self.tokens.clone())
    }

    async fn get_token_price(&self, id: &str) -> Option<f64> {
        // Check cache first
        if let Some(price) = self.price_cache.get(id) {
            debug!("Price cache hit for {}", id);
            return Some(*price);
        }

        let price = find_token(&self.tokens, id)?.price;
        self.price_cache.insert(id.to_string(), price);
        Some(price)
    }
}
