//! Core traits for the swap desk

pub mod price_provider;
pub mod balance_provider;
pub mod event_handler;

// Re-export for convenience
pub use price_provider::PriceProvider;
pub use balance_provider::WalletBalanceProvider;
pub use event_handler::SwapEventHandler;
