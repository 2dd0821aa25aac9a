use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::swap::{FormErrors, SwapReceipt};
use crate::traits::event_handler::SwapEventHandler;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwapEventHandler for ConsoleEventHandler {
    async fn on_swap(&self, receipt: &SwapReceipt) {
        info!("{}", "-".repeat(80));
        info!("✅ Success!");
        info!("  {}", receipt.summary());
        info!("     From: {} ({})", receipt.from_currency, receipt.request.from);
        info!("     To:   {} ({})", receipt.to_currency, receipt.request.to);
        info!("{}", "=".repeat(80));
    }

    async fn on_rejected(&self, errors: &FormErrors) {
        let fields = [
            ("amount", &errors.amount),
            ("from", &errors.from),
            ("to", &errors.to),
        ];
        for (field, message) in fields {
            if let Some(message) = message {
                warn!("Swap rejected: {}: {}", field, message);
            }
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        info!("Swap desk error: {}", error);
    }
}
