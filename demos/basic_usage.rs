// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use swap_amount::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Swap Form Example ===\n");

    // Price feed and balances as the caller would fetch them
    let now = Utc::now();
    let prices = vec![
        PriceData::new("USDC", now, 0.9998),
        PriceData::new("ETH", now, 1645.93),
        PriceData::new("STATOM", now, 8.51),
    ];
    let balances = HashMap::from([("USDC".to_string(), 2500.0), ("STATOM".to_string(), 40.0)]);
    let catalog = CoinCatalog::from_prices(&prices, &balances);

    println!("Catalog:");
    for coin in catalog.all() {
        println!(
            "  {:<8} ${:<10} balance {:<8} {}",
            coin.name, coin.price_usd, coin.balance, coin.icon_url
        );
    }

    let mut form = SwapFormBuilder::new(catalog)
        .decimal_places(6)
        .build(Arc::new(LoggingEventHandler))
        .expect("valid settings");

    println!(
        "\nPay {} -> receive {}",
        form.pay_coin().map_or("-", |c| c.name.as_str()),
        form.receive_coin().map_or("-", |c| c.name.as_str())
    );

    // Simulate keystrokes, each passing the full field text
    println!("\n=== Typing ===");
    for raw in ["0", "01", "012", "012.", "012.5", "012.5x", "12345678901.25"] {
        let outcome = form.edit_amount(raw);
        println!(
            "  typed {:<16} -> field {:<16} ({:?})",
            format!("{raw:?}"),
            format!("{:?}", form.amount().as_str()),
            outcome
        );
    }

    form.edit_amount("125");
    println!("\n=== Quote ===");
    let pay_name = form.pay_coin().map_or("-", |c| c.name.as_str());
    println!("  Rate:       1 {} = {}", pay_name, form.conversion_rate());
    println!(
        "  You pay:    {} (${})",
        form.amount(),
        form.usd_value().unwrap_or_default()
    );
    println!("  You get:    {}", form.received_display());

    println!("\n=== Transfer ===");
    println!("  {}", form.request_transfer());

    form.edit_amount("999999");
    println!("  {}", form.request_transfer());

    form.swap_coins();
    println!("\nAfter swap: rate = {}", form.conversion_rate());
}
