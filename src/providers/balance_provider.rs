use async_trait::async_trait;

use crate::models::balance::WalletBalance;
use crate::traits::balance_provider::WalletBalanceProvider;

/// Balance provider serving a fixed list
pub struct StaticBalanceProvider {
    balances: Vec<WalletBalance>,
}

impl StaticBalanceProvider {
    /// Create a provider over the given balances
    pub fn new(balances: Vec<WalletBalance>) -> Self {
        Self { balances }
    }

    /// Demo wallet: one ranked chain, one empty balance, one unranked chain
    pub fn demo() -> Self {
        Self::new(vec![
            WalletBalance::new("OSMO", 100.0, "Osmosis"),
            WalletBalance::new("ETH", 0.0, "Ethereum"),
            WalletBalance::new("BTC", 0.5, "Bitcoin"),
        ])
    }
}

impl Default for StaticBalanceProvider {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl WalletBalanceProvider for StaticBalanceProvider {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        Ok(self.balances.clone())
    }
}
