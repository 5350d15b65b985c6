//! Response wrapper that keeps the decoded payload next to the raw exchange.
//!
//! Catalog methods return [`Response<Value>`]: the API's JSON passed through
//! untouched, plus the status, headers, raw body, latency and attempt count of
//! the call that produced it.

use crate::{Error, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// A successful API response.
///
/// # Examples
///
/// ```no_run
/// use coingecko_client::Client;
///
/// # async fn example() -> Result<(), coingecko_client::Error> {
/// let client = Client::new()?;
/// let response = client.get_prices("bitcoin", "usd").await?;
///
/// println!("BTC/USD: {}", response.data["bitcoin"]["usd"]);
/// println!("Request took {:?} over {} attempt(s)", response.latency, response.attempts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T = Value> {
    /// The decoded response data.
    pub data: T,

    /// The raw response body.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from the first attempt being sent until this response was received.
    pub latency: Duration,

    /// The number of attempts made, `1` if the first one succeeded.
    pub attempts: usize,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
        attempts: usize,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
            attempts,
        }
    }

    /// Maps the response data to a different type, keeping the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use coingecko_client::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    ///     1,
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
            attempts: self.attempts,
        }
    }

    /// Returns `true` if the request required retries.
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Returns a header value by name, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl Response<Value> {
    /// Decodes the JSON payload into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the payload does not fit `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use coingecko_client::{Response, models::SimplePrice};
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let body = r#"{"bitcoin":{"usd":50000}}"#;
    /// let response: Response<serde_json::Value> = Response::new(
    ///     serde_json::from_str(body).unwrap(),
    ///     body.to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(20),
    ///     1,
    /// );
    ///
    /// let prices: Response<SimplePrice> = response.decode().unwrap();
    /// assert_eq!(prices.data["bitcoin"]["usd"], 50000.0);
    /// ```
    pub fn decode<U: DeserializeOwned>(self) -> Result<Response<U>> {
        let data = serde_json::from_value(self.data).map_err(|e| Error::Decode {
            raw_response: self.raw_body.clone(),
            serde_error: e.to_string(),
            status: self.status,
        })?;

        Ok(Response {
            data,
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
            attempts: self.attempts,
        })
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
