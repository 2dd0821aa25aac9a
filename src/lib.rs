//! Swap Desk Library
//!
//! Logic behind a token swap form and a wallet balance list: amount
//! sanitizing, price-ratio conversion and chain-priority ranking.

// Public modules - these are the API surface
pub mod config;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod swap;
pub mod wallet;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::Config;
pub use models::{
    token::Token,
    balance::{WalletBalance, FormattedWalletBalance, WalletRow},
    swap::{SwapRequest, SwapReceipt, FormErrors},
};
pub use traits::{
    price_provider::PriceProvider,
    balance_provider::WalletBalanceProvider,
    event_handler::SwapEventHandler,
};
pub use providers::{
    price_provider::StaticPriceProvider,
    balance_provider::StaticBalanceProvider,
};
pub use handlers::{
    console::ConsoleEventHandler,
    composite::CompositeEventHandler,
};
pub use swap::{SwapForm, SwapPage};
pub use wallet::{build_wallet_rows, sort_wallet_balances, WalletPage};
pub use utils::{
    compute_output, format_input, format_input_default, get_priority,
    sum_to_n_formula, sum_to_n_iterative, sum_to_n_recursive,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
