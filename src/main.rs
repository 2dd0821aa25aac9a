use std::sync::Arc;

use swap_desk::{
  CompositeEventHandler, Config, ConsoleEventHandler, PriceProvider,
  StaticBalanceProvider, StaticPriceProvider, SwapForm, SwapPage, WalletPage,
};
use swap_desk::utils::helper::format_usd;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  let config = Config::from_env()?;

  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_max_level(config.log_level)
    .with_file(true)
    .with_line_number(true)
    .init();

  tokio::runtime::Runtime::new()?.block_on(async {
    info!("Swap desk v{}", swap_desk::VERSION);

    let price_provider = Arc::new(match &config.price_feed_json {
      Some(json) => StaticPriceProvider::from_json(json)?,
      None => StaticPriceProvider::default(),
    });

    let mut handler = CompositeEventHandler::new();
    handler.add_handler(Arc::new(ConsoleEventHandler::new()));
    let handler = Arc::new(handler);

    let mut swap_page = SwapPage::new(price_provider.clone(), handler);
    if let Err(e) = swap_page.load().await {
      warn!("Continuing without prices: {}", e);
    }

    info!("{}", "=".repeat(80));
    info!("CURRENCY SWAP");
    info!("{}", "=".repeat(80));

    let tokens = swap_page.tokens();
    for token in tokens {
      info!("  {} ({}): {}", token.currency, token.id, token.formatted_price());
    }

    let mut form = SwapForm::with_max_decimals(config.max_decimals);
    if let Some(from) = &config.swap_from {
      form.set_from(from);
    }
    if let Some(to) = &config.swap_to {
      form.set_to(to);
    }
    form.set_amount(&config.swap_amount);

    info!("Amount: {:?} -> {:?}", config.swap_amount, form.amount());
    if let Some(value) = form.usd_value(tokens) {
      info!("Amount value: {}", format_usd(value));
    }
    if let Some(value) = form.output_usd_value(tokens) {
      info!("Output value: {}", format_usd(value));
    }
    let from_id = form.from_id(tokens);
    match price_provider.get_token_price(&from_id).await {
      Some(price) => info!("{} price: {}", from_id, format_usd(price)),
      None => warn!("No price for {:?}", from_id),
    }
    info!(
      "{} {} ~ {} {}",
      form.amount(),
      form.from_id(tokens),
      form.display_output(tokens),
      form.to_id(tokens)
    );

    swap_page.submit(&mut form).await;

    let wallet_page =
      WalletPage::new(Arc::new(StaticBalanceProvider::demo()), price_provider);
    wallet_page.log_rows().await?;

    Ok(())
  })
}
