//! Price and balance providers

pub mod price_provider;
pub mod balance_provider;

// Re-export for convenience
pub use price_provider::StaticPriceProvider;
pub use balance_provider::StaticBalanceProvider;
