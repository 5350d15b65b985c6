//! Matching on errors: HTTP failures, schema mismatches and network trouble.
//!
//! Run with: `cargo run --example error_handling`

use coingecko_client::retry::{OrPredicate, RetryOn5xx, RetryOnTransient};
use coingecko_client::{Classification, Client, Error, ErrorKind, RetryStrategy};
use serde::Deserialize;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("coingecko_client=info")
        .init();

    let client = Client::new()?;

    println!("=== Example 1: HTTP Errors ===");
    match client.exchange("no-such-exchange").await {
        Ok(response) => println!("Success: {}", response.data["name"]),
        Err(Error::Http {
            status,
            classification,
            message,
            raw_response,
            ..
        }) => {
            println!("HTTP Error!");
            println!("  Status: {}", status);
            println!("  Classification: {}", classification.key());
            println!("  Message: {:?}", message);
            println!("  Raw response: {}", raw_response);
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 2: Schema Mismatch ===");
    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct WrongSchema {
        nonexistent_field: String,
    }

    match client.ping().await?.decode::<WrongSchema>() {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Decode {
            raw_response,
            serde_error,
            status,
        }) => {
            println!("Decode Failed!");
            println!("  Status: {}", status);
            println!("  Serde error: {}", serde_error);
            println!("  Raw response: {}", raw_response);
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 3: Network Errors ===");
    let bad_client = Client::builder()
        .base_url("https://this-domain-does-not-exist-12345.com")?
        .max_attempts(2)
        .retry_strategy(RetryStrategy::Linear {
            delay: Duration::from_millis(100),
        })
        .build()?;

    match bad_client.ping().await {
        Ok(_) => println!("Unexpected success"),
        Err(e) => {
            println!("Error: {}", e);
            println!("  Kind: {:?}", e.kind());
            println!("  Classification: {:?}", e.classification().map(Classification::key));
            if let Error::RetriesExhausted { attempts, .. } = &e {
                println!("  Gave up after {} attempts", attempts);
            }
        }
    }
    println!();

    println!("=== Example 4: Retrying Server Errors ===");
    let patient_client = Client::builder()
        .retry_predicate(Box::new(OrPredicate::new(vec![
            Box::new(RetryOnTransient),
            Box::new(RetryOn5xx),
        ])))
        .build()?;

    match patient_client.global().await {
        Ok(response) => println!("Succeeded after {} attempt(s)", response.attempts),
        Err(e) if e.kind() == ErrorKind::Http => println!("API refused: {}", e),
        Err(e) => println!("Gave up: {}", e),
    }

    Ok(())
}
