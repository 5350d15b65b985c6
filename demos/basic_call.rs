//! Fetching prices, market data and a typed coin from the public API.
//!
//! Run with: `cargo run --example basic_call`

use coingecko_client::endpoints::{CoinOptions, MarketsOptions};
use coingecko_client::models::Coin;
use coingecko_client::{Client, ClientConfig, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("coingecko_client=debug,basic_call=info")
        .init();

    // COINGECKO_BASE_URL, COINGECKO_MAX_ATTEMPTS and COINGECKO_TIMEOUT_SECS apply if set
    let client = Client::from_config(&ClientConfig::from_env()?)?;

    println!("=== Ping ===");
    let ping = client.ping().await?;
    println!("{}", ping.data["gecko_says"]);
    println!();

    println!("=== Simple Prices ===");
    let prices = client.get_prices("bitcoin,ethereum", "usd,eur").await?;
    println!("BTC/USD: {}", prices.data["bitcoin"]["usd"]);
    println!("ETH/EUR: {}", prices.data["ethereum"]["eur"]);
    println!("Request latency: {:?}", prices.latency);
    println!();

    println!("=== Hourly History (falls back to daily past 90 days) ===");
    let history = client
        .get_hourly_historical_prices("bitcoin", 120, "usd")
        .await?;
    let points = history.data["prices"].as_array().map_or(0, Vec::len);
    println!("{} price points", points);
    println!();

    println!("=== Markets ===");
    let options = MarketsOptions {
        per_page: Some(5),
        price_change_percentage: vec!["1h".to_string(), "24h".to_string()],
        ..Default::default()
    };
    let markets = client.markets("bitcoin,ethereum,solana", "usd", &options).await?;
    for row in markets.data.as_array().into_iter().flatten() {
        println!("{:<12} {}", row["id"], row["current_price"]);
    }
    println!();

    println!("=== Typed Coin ===");
    let options = CoinOptions {
        localization: Some(false),
        tickers: Some(false),
        community_data: Some(false),
        developer_data: Some(false),
        ..Default::default()
    };
    let coin = client.coin("bitcoin", &options).await?.decode::<Coin>()?;
    println!("{} ({})", coin.name, coin.symbol);
    println!("USD price: {:?}", coin.price_in("usd"));
    println!("Content-Type: {:?}", coin.header("content-type"));
    println!("Was retried: {}", coin.was_retried());

    Ok(())
}
