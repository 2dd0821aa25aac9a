use async_trait::async_trait;

use crate::models::balance::WalletBalance;

/// Source of wallet balances
#[async_trait]
pub trait WalletBalanceProvider: Send + Sync {
    /// Fetch all balances held by the wallet
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>>;
}
