use std::sync::Arc;
use async_trait::async_trait;

use crate::models::swap::{FormErrors, SwapReceipt};
use crate::traits::event_handler::SwapEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn SwapEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn SwapEventHandler>) {
        self.handlers.push(handler);
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwapEventHandler for CompositeEventHandler {
    async fn on_swap(&self, receipt: &SwapReceipt) {
        for handler in &self.handlers {
            handler.on_swap(receipt).await;
        }
    }

    async fn on_rejected(&self, errors: &FormErrors) {
        for handler in &self.handlers {
            handler.on_rejected(errors).await;
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::models::swap::SwapRequest;

    #[derive(Default)]
    struct CountingHandler {
        swaps: AtomicUsize,
        errors: AtomicUsize,
    }

    #[async_trait]
    impl SwapEventHandler for CountingHandler {
        async fn on_swap(&self, _receipt: &SwapReceipt) {
            self.swaps.fetch_add(1, Ordering::SeqCst);
        }

        async fn on_rejected(&self, _errors: &FormErrors) {}

        async fn handle_error(&self, _error: &anyhow::Error) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_fans_out_to_every_handler() {
        let first = Arc::new(CountingHandler::default());
        let second = Arc::new(CountingHandler::default());
        let mut composite = CompositeEventHandler::new();
        assert!(composite.is_empty());
        composite.add_handler(first.clone());
        composite.add_handler(second.clone());
        assert_eq!(composite.len(), 2);

        let receipt = SwapReceipt {
            request: SwapRequest {
                from: "1".into(),
                to: "2".into(),
                amount: "1".into(),
            },
            from_currency: "A".into(),
            to_currency: "B".into(),
            output: 0.5,
        };
        composite.on_swap(&receipt).await;
        composite.handle_error(&anyhow::anyhow!("boom")).await;

        for handler in [&first, &second] {
            assert_eq!(handler.swaps.load(Ordering::SeqCst), 1);
            assert_eq!(handler.errors.load(Ordering::SeqCst), 1);
        }
    }
}
