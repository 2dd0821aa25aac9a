use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info};

use crate::models::balance::{WalletBalance, WalletRow};
use crate::models::token::Token;
use crate::traits::{balance_provider::WalletBalanceProvider, price_provider::PriceProvider};
use crate::utils::helper::format_usd;
use super::sort::sort_wallet_balances;

/// Join ranked balances with USD prices keyed by currency.
/// Currencies without a price are valued at 0.
pub fn build_wallet_rows(balances: &[WalletBalance], prices: &HashMap<String, f64>) -> Vec<WalletRow> {
    sort_wallet_balances(balances)
        .into_iter()
        .map(|b| {
            let usd_price = prices.get(&b.balance.currency).copied().unwrap_or(0.0);
            WalletRow {
                key: format!("{}-{}", b.balance.currency, b.balance.blockchain),
                amount: b.balance.amount,
                usd_value: usd_price * b.balance.amount,
                formatted_amount: b.formatted,
            }
        })
        .collect()
}

/// Price per currency; the first feed entry wins, as it does for ids
pub fn prices_by_currency(tokens: Vec<Token>) -> HashMap<String, f64> {
    let mut prices = HashMap::new();
    for token in tokens {
        prices.entry(token.currency).or_insert(token.price);
    }
    prices
}

/// Wallet page: ranked balances valued with the current price feed
pub struct WalletPage {
    balance_provider: Arc<dyn WalletBalanceProvider>,
    price_provider: Arc<dyn PriceProvider>,
}

impl WalletPage {
    /// Create a new wallet page
    pub fn new(
        balance_provider: Arc<dyn WalletBalanceProvider>,
        price_provider: Arc<dyn PriceProvider>,
    ) -> Self {
        Self {
            balance_provider,
            price_provider,
        }
    }

    /// Fetch balances and prices and build the rows to render
    pub async fn rows(&self) -> anyhow::Result<Vec<WalletRow>> {
        let balances = self.balance_provider.fetch_balances().await?;

        // A missing price feed only zeroes the USD column
        let prices: HashMap<String, f64> = match self.price_provider.fetch_token_prices().await {
            Ok(tokens) => prices_by_currency(tokens),
            Err(e) => {
                error!("Error fetching token prices: {}", e);
                HashMap::new()
            }
        };

        Ok(build_wallet_rows(&balances, &prices))
    }

    /// Log the wallet rows
    pub async fn log_rows(&self) -> anyhow::Result<()> {
        let rows = self.rows().await?;

        info!("{}", "=".repeat(80));
        info!("WALLET BALANCES");
        info!("{}", "=".repeat(80));

        if rows.is_empty() {
            info!("No balances to show");
            return Ok(());
        }

        for (i, row) in rows.iter().enumerate() {
            info!("{}. {}", i + 1, row.key);
            info!("   Amount: {}", row.formatted_amount);
            info!("   Value: {}", format_usd(row.usd_value));
        }

        Ok(())
    }
}
