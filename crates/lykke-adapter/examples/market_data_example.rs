/*
[INPUT]:  Asset pair identifier (e.g., "LKKEUR")
[OUTPUT]: Market data (rates, volume, order book, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use lykke_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== Lykke Market Data Example ===\n");

    let client = match LykkePublicApi::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Public client created against {}\n", client.base_url());

    let asset_pair = "LKKEUR";

    println!("Querying rate for {}...", asset_pair);
    match client.asset_pairs_rates(Some(asset_pair)).await {
        Ok(response) => match response.json::<AssetPairRate>() {
            Ok(rate) => println!("✓ Rate: {:?}", rate),
            Err(_) => println!("✓ Raw rate: {}", response.text()),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying 24h volume for {}...", asset_pair);
    match client.market(Some(asset_pair)).await {
        Ok(response) => println!("✓ Market: {}", response.text()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", asset_pair);
    match client.order_book(Some(asset_pair)).await {
        Ok(response) => println!("✓ Order book: {}", response.text()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying last 5 trades...");
    match client.trades(5).await {
        Ok(response) => println!("✓ Trades: {}", response.text()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
