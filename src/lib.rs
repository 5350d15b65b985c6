//! # coingecko-client - an async client for the CoinGecko API
//!
//! One method per CoinGecko endpoint, a single request path with bounded
//! retries for flaky networks, and errors you can match on without knowing
//! anything about the HTTP library underneath.
//!
//! ## Quick Start
//!
//! ```no_run
//! use coingecko_client::{endpoints::MarketsOptions, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), coingecko_client::Error> {
//!     let client = Client::new()?;
//!
//!     let prices = client.get_prices("bitcoin", "usd").await?;
//!     println!("BTC/USD: {}", prices.data["bitcoin"]["usd"]);
//!
//!     let options = MarketsOptions {
//!         per_page: Some(10),
//!         ..Default::default()
//!     };
//!     let markets = client.markets("bitcoin,ethereum", "eur", &options).await?;
//!     println!("{} rows in {:?}", markets.data.as_array().map_or(0, Vec::len), markets.latency);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Responses
//!
//! The API's schema changes on its own schedule, so catalog methods hand back
//! the JSON as a [`serde_json::Value`] inside a [`Response`], together with
//! the status, headers, raw body, latency and attempt count. Where a shape is
//! documented, [`Response::decode`] turns it into a typed model from
//! [`models`] or any `Deserialize` type of your own.
//!
//! ## Error Handling
//!
//! Every failure is an [`Error`] with a coarse [`ErrorKind`] and, for
//! transport and HTTP failures, a fine-grained [`Classification`]:
//!
//! ```no_run
//! use coingecko_client::{Client, Error, ErrorKind};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new()?;
//! match client.exchange("no-such-exchange").await {
//!     Ok(response) => println!("{}", response.data["name"]),
//!     Err(Error::Http { status, message, .. }) => {
//!         eprintln!("HTTP {}: {}", status, message.unwrap_or_default());
//!     }
//!     Err(e) if e.kind() == ErrorKind::Transport => {
//!         eprintln!("Network failure ({:?}): {}", e.classification(), e);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Retries
//!
//! A request gets up to five attempts by default. Only transient transport
//! failures (timeouts, refused or reset connections) are retried, with
//! jittered exponential backoff in between. HTTP errors are returned straight
//! away.
//!
//! ```no_run
//! use coingecko_client::{retry::{OrPredicate, RetryOn5xx, RetryOnTransient}, Client, RetryStrategy};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), coingecko_client::Error> {
//! let client = Client::builder()
//!     .max_attempts(3)
//!     .timeout(Duration::from_secs(10))
//!     .retry_strategy(RetryStrategy::ExponentialBackoff {
//!         initial_delay: Duration::from_millis(200),
//!         max_delay: Duration::from_secs(2),
//!         jitter: true,
//!     })
//!     .retry_predicate(Box::new(OrPredicate::new(vec![
//!         Box::new(RetryOnTransient),
//!         Box::new(RetryOn5xx),
//!     ])))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Requests, responses and retries are reported through `tracing`. Nothing is
//! printed unless the application installs a subscriber.

mod classify;
mod client;
mod config;
pub mod endpoints;
mod error;
pub mod models;
mod query;
mod request;
mod response;
pub mod retry;

pub use classify::{classify, Classification};
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, BASE_URL, DEFAULT_MAX_ATTEMPTS};
pub use endpoints::{DEFAULT_VS_CURRENCY, HOURLY_HISTORY_MAX_DAYS};
pub use error::{Error, ErrorKind, Result};
pub use query::{Query, QueryValue};
pub use request::Request;
pub use response::Response;
pub use retry::{RetryPredicate, RetryStrategy};
