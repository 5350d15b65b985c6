//! The CoinGecko client and its request dispatcher.
//!
//! [`Client`] owns the configuration and the connection pool; every catalog
//! method funnels into [`Client::call`], which builds the URL, performs the
//! GET with bounded retries and classifies whatever goes wrong.

use crate::{
    config::{ClientConfig, BASE_URL, DEFAULT_MAX_ATTEMPTS},
    retry::{RetryOnTransient, RetryPredicate, RetryStrategy},
    classify, Classification, Error, Query, Request, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("coingecko-client/", env!("CARGO_PKG_VERSION"));

/// An async CoinGecko API client.
///
/// Cloning is cheap: clones share the connection pool and configuration, and
/// the client holds no per-call state, so one instance can serve concurrent
/// tasks.
///
/// # Examples
///
/// ```no_run
/// use coingecko_client::{Client, RetryStrategy};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), coingecko_client::Error> {
/// let client = Client::builder()
///     .timeout(Duration::from_secs(10))
///     .max_attempts(3)
///     .retry_strategy(RetryStrategy::Linear {
///         delay: Duration::from_millis(500),
///     })
///     .build()?;
///
/// let prices = client.get_prices("bitcoin,ethereum", "usd,eur").await?;
/// println!("{}", prices.data);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    max_attempts: usize,
    retry_strategy: RetryStrategy,
    retry_predicate: Box<dyn RetryPredicate>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("max_attempts", &self.inner.max_attempts)
            .field("retry_strategy", &self.inner.retry_strategy)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client from deployment settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or `max_attempts` is zero.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        ClientBuilder::from_config(config)?.build()
    }

    /// The base URL endpoint paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The maximum number of attempts per request.
    pub fn max_attempts(&self) -> usize {
        self.inner.max_attempts
    }

    /// Makes a GET request to any endpoint, decoding the body as `T`.
    ///
    /// This is the escape hatch for endpoints the catalog does not wrap.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coingecko_client::{Client, Query};
    ///
    /// # async fn example() -> Result<(), coingecko_client::Error> {
    /// let client = Client::new()?;
    /// let query = Query::new().with("query", "bitcoin");
    /// let results = client.get::<serde_json::Value>("search", query).await?;
    /// println!("{}", results.data["coins"][0]["id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T>(&self, endpoint: &str, query: Query) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        self.call(Request::parse(endpoint).with_query(query)).await
    }

    /// Executes a request, retrying transient failures.
    ///
    /// Makes up to `max_attempts` attempts. After each failure the retry
    /// predicate decides whether to go again; if it says yes but the budget is
    /// spent, the last error is returned inside [`Error::RetriesExhausted`].
    pub async fn call<T>(&self, request: Request) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(&request)?;
        let start_time = Instant::now();
        let mut attempt = 0;

        loop {
            attempt += 1;

            let result = match self.execute_request(&url, attempt).await {
                Ok(response) => {
                    let latency = start_time.elapsed();
                    self.parse_response(response, latency, attempt).await
                }
                Err(e) => Err(e),
            };

            let error = match result {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            tracing::warn!(
                error = %error,
                attempt = attempt,
                endpoint = %request.endpoint(),
                "Request failed"
            );

            if !self.inner.retry_predicate.should_retry(&error, attempt) {
                return Err(error);
            }

            if attempt >= self.inner.max_attempts {
                return Err(Error::RetriesExhausted {
                    attempts: attempt,
                    last_error: Box::new(error),
                });
            }

            let delay = self.inner.retry_strategy.delay_for_attempt(attempt);
            tracing::info!(
                delay_ms = delay.as_millis(),
                attempt = attempt,
                "Retrying request after delay"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Builds the full URL: base path, then the endpoint segments, then the query.
    fn build_url(&self, request: &Request) -> Result<Url> {
        let mut url = self.inner.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                Error::Configuration(format!(
                    "Base URL cannot take a path: {}",
                    self.inner.base_url
                ))
            })?
            .pop_if_empty()
            .extend(request.segments());

        if !request.query().is_empty() {
            url.set_query(Some(&request.query().encode()));
        }

        Ok(url)
    }

    /// Executes a single attempt.
    async fn execute_request(&self, url: &Url, attempt: usize) -> Result<reqwest::Response> {
        tracing::debug!(url = %url, attempt = attempt, "Executing HTTP request");

        let mut request = self.inner.http_client.get(url.clone());

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        request.send().await.map_err(Error::from_transport)
    }

    /// Turns a response into a decoded `Response` or a classified error.
    async fn parse_response<T>(
        &self,
        response: reqwest::Response,
        latency: Duration,
        attempts: usize,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let headers = response.headers().clone();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            attempts = attempts,
            "Received HTTP response"
        );

        if !status.is_success() {
            // The status is already known, so a body cut short still yields an HTTP error.
            let raw_body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read error response body");
                    String::new()
                }
            };

            if status.is_server_error() {
                tracing::warn!(status = status.as_u16(), response = %raw_body, "Server error (5xx)");
            } else {
                tracing::debug!(status = status.as_u16(), response = %raw_body, "Client error (4xx)");
            }
            return Err(Error::http(status, raw_body, headers));
        }

        let raw_body = response.text().await.map_err(|source| {
            // Headers arrived, so an unrecognised read failure is a body interruption
            let classification = match classify(&source) {
                Classification::Unknown => Classification::BodyInterrupted,
                other => other,
            };
            Error::Transport {
                classification,
                source,
            }
        })?;

        match serde_json::from_str::<T>(&raw_body) {
            Ok(data) => Ok(Response::new(
                data, raw_body, status, headers, latency, attempts,
            )),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw_body,
                    "Failed to decode response"
                );

                Err(Error::Decode {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                })
            }
        }
    }

    /// Runs a catalog request, returning the JSON payload untouched.
    pub(crate) async fn fetch(&self, request: Request) -> Result<Response<Value>> {
        self.call(request).await
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// Every setting has a default: the public API base URL, 5 attempts, jittered
/// exponential backoff, retries on transient transport failures only, and no
/// explicit timeout.
///
/// # Examples
///
/// ```no_run
/// use coingecko_client::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), coingecko_client::Error> {
/// let client = ClientBuilder::new()
///     .base_url("http://localhost:8080/api/v3/")?
///     .timeout(Duration::from_secs(30))
///     .default_header("x-request-source", "pricing-job")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    max_attempts: usize,
    retry_strategy: RetryStrategy,
    retry_predicate: Option<Box<dyn RetryPredicate>>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        Self {
            base_url: None,
            default_headers,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_strategy: RetryStrategy::default(),
            retry_predicate: None,
            timeout: None,
        }
    }

    /// Creates a builder preloaded with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.base_url` is not a valid URL.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::new()
            .base_url(&config.base_url)?
            .max_attempts(config.max_attempts);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(builder)
    }

    /// Sets the base URL for all requests, e.g. to point at a stub server.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the maximum number of attempts per request, including the first.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets how long to wait between attempts.
    pub fn retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = strategy;
        self
    }

    /// Sets a custom retry predicate.
    ///
    /// By default, only transient transport failures are retried
    /// ([`RetryOnTransient`]).
    pub fn retry_predicate(mut self, predicate: Box<dyn RetryPredicate>) -> Self {
        self.retry_predicate = Some(predicate);
        self
    }

    /// Sets the per-request timeout, applied to each attempt separately.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero, the base URL cannot take a
    /// path, or the HTTP client cannot be built.
    pub fn build(self) -> Result<Client> {
        if self.max_attempts == 0 {
            return Err(Error::Configuration(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(BASE_URL)?,
        };

        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "Base URL cannot take a path: {}",
                base_url
            )));
        }

        let http_client = reqwest::Client::builder()
            .default_headers(self.default_headers)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        let retry_predicate = self
            .retry_predicate
            .unwrap_or_else(|| Box::new(RetryOnTransient));

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                max_attempts: self.max_attempts,
                retry_strategy: self.retry_strategy,
                retry_predicate,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        Client::builder().base_url(base).unwrap().build().unwrap()
    }

    #[test]
    fn test_url_under_default_base() {
        let client = Client::new().unwrap();
        let request = Request::new(["coins", "bitcoin", "history"]).param("date", "30-12-2017");

        assert_eq!(
            client.build_url(&request).unwrap().as_str(),
            "https://api.coingecko.com/api/v3/coins/bitcoin/history?date=30-12-2017"
        );
    }

    #[test]
    fn test_url_without_trailing_slash_or_query() {
        let client = client("http://127.0.0.1:9000");
        let url = client.build_url(&Request::parse("exchanges/list")).unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:9000/exchanges/list");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_path_segments_are_escaped() {
        let client = client("http://localhost/api/v3/");
        let url = client
            .build_url(&Request::new(["coins", "a/b c"]))
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost/api/v3/coins/a%2Fb%20c");
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        let result = Client::builder().max_attempts(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_non_base_url_is_rejected() {
        let result = Client::builder().base_url("mailto:someone@example.com").unwrap().build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            base_url: "http://localhost:1234/".to_string(),
            max_attempts: 2,
            timeout_secs: Some(3),
        };
        let client = Client::from_config(&config).unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:1234/");
        assert_eq!(client.max_attempts(), 2);
        assert_eq!(client.inner.timeout, Some(Duration::from_secs(3)));
    }
}
