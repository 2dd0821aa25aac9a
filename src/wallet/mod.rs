//! Wallet balance ranking and the rows shown on the wallet page

pub mod sort;
pub mod page;

pub use sort::sort_wallet_balances;
pub use page::{build_wallet_rows, prices_by_currency, WalletPage};
