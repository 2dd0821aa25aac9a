use std::sync::Arc;

use tracing::{debug, error, info};

use crate::models::swap::SwapReceipt;
use crate::models::token::Token;
use crate::traits::{event_handler::SwapEventHandler, price_provider::PriceProvider};
use super::form::SwapForm;

/// Currency swap page: loads the price feed and submits the form
pub struct SwapPage {
    price_provider: Arc<dyn PriceProvider>,
    event_handler: Arc<dyn SwapEventHandler>,
    tokens: Vec<Token>,
}

impl SwapPage {
    /// Create a new swap page
    pub fn new(
        price_provider: Arc<dyn PriceProvider>,
        event_handler: Arc<dyn SwapEventHandler>,
    ) -> Self {
        Self {
            price_provider,
            event_handler,
            tokens: Vec::new(),
        }
    }

    /// Load token prices. On failure the token list is left empty and the
    /// error is reported to the handler before being returned.
    pub async fn load(&mut self) -> anyhow::Result<()> {
        match self.price_provider.fetch_token_prices().await {
            Ok(tokens) => {
                info!("Loaded {} tokens", tokens.len());
                self.tokens = tokens;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching token prices: {}", e);
                self.tokens = Vec::new();
                self.event_handler.handle_error(&e).await;
                Err(e)
            }
        }
    }

    /// Current token snapshot
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Submit the form against the loaded prices
    pub async fn submit(&self, form: &mut SwapForm) -> Option<SwapReceipt> {
        match form.submit(&self.tokens) {
            Ok(receipt) => {
                debug!("Swapping: {:?}", receipt.request);
                self.event_handler.on_swap(&receipt).await;
                Some(receipt)
            }
            Err(errors) => {
                self.event_handler.on_rejected(&errors).await;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::models::swap::FormErrors;
    use crate::providers::StaticPriceProvider;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SwapEventHandler for RecordingHandler {
        async fn on_swap(&self, receipt: &SwapReceipt) {
            self.events.lock().unwrap().push(receipt.summary());
        }

        async fn on_rejected(&self, errors: &FormErrors) {
            self.events.lock().unwrap().push(format!("rejected: {:?}", errors.to));
        }

        async fn handle_error(&self, error: &anyhow::Error) {
            self.events.lock().unwrap().push(format!("error: {}", error));
        }
    }

    struct BrokenFeed;

    #[async_trait]
    impl PriceProvider for BrokenFeed {
        async fn fetch_token_prices(&self) -> anyhow::Result<Vec<Token>> {
            Err(anyhow::anyhow!("Failed to fetch token prices"))
        }
    }

    fn provider() -> Arc<StaticPriceProvider> {
        Arc::new(StaticPriceProvider::new(vec![
            Token::new("1", "tokenA", 2.0),
            Token::new("2", "tokenB", 4.0),
            Token::new("3", "tokenC", 1.0),
        ]))
    }

    #[tokio::test]
    async fn test_submit_notifies_handler() {
        let handler = Arc::new(RecordingHandler::default());
        let mut page = SwapPage::new(provider(), handler.clone());
        page.load().await.unwrap();

        let mut form = SwapForm::new();
        form.set_amount("3");
        let receipt = page.submit(&mut form).await.unwrap();
        assert_eq!(receipt.output, 6.0);

        form.set_to("1");
        assert!(page.submit(&mut form).await.is_none());

        let events = handler.events.lock().unwrap();
        assert_eq!(events[0], "Swapped 3 tokenA → 6.0000 tokenC");
        assert_eq!(events[1], "rejected: Some(\"Cannot swap to same token\")");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_tokens() {
        let handler = Arc::new(RecordingHandler::default());
        let mut page = SwapPage::new(Arc::new(BrokenFeed), handler.clone());

        assert!(page.load().await.is_err());
        assert!(page.tokens().is_empty());
        assert_eq!(
            handler.events.lock().unwrap().as_slice(),
            ["error: Failed to fetch token prices".to_string()]
        );
    }
}
