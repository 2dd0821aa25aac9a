use async_trait::async_trait;

use crate::models::token::Token;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the current price snapshot, one entry per token id
    async fn fetch_token_prices(&self) -> anyhow::Result<Vec<Token>>;

    /// Get USD price for a token id
    async fn get_token_price(&self, id: &str) -> Option<f64> {
        let tokens = self.fetch_token_prices().await.ok()?;
        tokens.into_iter().find(|t| t.id == id).map(|t| t.price)
    }
}
