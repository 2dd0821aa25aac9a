use serde::{Deserialize, Serialize};

/// Balance of one currency on one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
}

impl WalletBalance {
    /// Create a new wallet balance
    pub fn new(currency: impl Into<String>, amount: f64, blockchain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }

    /// Only strictly positive amounts are shown
    pub fn is_displayable(&self) -> bool {
        self.amount > 0.0
    }
}

/// A wallet balance with its display-formatted amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedWalletBalance {
    #[serde(flatten)]
    pub balance: WalletBalance,
    pub formatted: String,
}

impl FormattedWalletBalance {
    /// Wrap a balance, formatting its amount as a whole number
    pub fn new(balance: WalletBalance) -> Self {
        let formatted = format_whole(balance.amount);
        Self { balance, formatted }
    }
}

/// Round half away from zero and print without decimals
pub fn format_whole(amount: f64) -> String {
    format!("{:.0}", amount.round())
}

/// Row rendered on the wallet page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletRow {
    /// Stable key: `{currency}-{blockchain}`
    pub key: String,
    pub amount: f64,
    pub usd_value: f64,
    pub formatted_amount: String,
}
