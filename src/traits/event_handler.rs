use async_trait::async_trait;

use crate::models::swap::{FormErrors, SwapReceipt};

/// Handler for swap form events
#[async_trait]
pub trait SwapEventHandler: Send + Sync {
    /// Called after a swap was submitted successfully
    async fn on_swap(&self, receipt: &SwapReceipt);

    /// Called when a submit was rejected by validation
    async fn on_rejected(&self, errors: &FormErrors);

    /// Handle provider errors
    async fn handle_error(&self, error: &anyhow::Error);
}
