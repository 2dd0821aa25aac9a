//! Data models for the swap form and wallet page

pub mod token;
pub mod balance;
pub mod swap;

// Re-export for convenience
pub use token::Token;
pub use balance::{WalletBalance, FormattedWalletBalance, WalletRow};
pub use swap::{SwapRequest, SwapReceipt, FormErrors};
