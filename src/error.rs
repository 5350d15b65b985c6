//! Error types for CoinGecko API calls.
//!
//! Every failure is surfaced as an [`Error`] whose [`kind`](Error::kind) is one
//! of a small, fixed taxonomy. Transport failures keep the original
//! `reqwest::Error` as their [`source`](std::error::Error::source), and HTTP
//! failures keep the raw body and headers so nothing is lost for debugging.

use crate::Classification;
use http::{HeaderMap, StatusCode};

/// The coarse category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The response body was not valid JSON, or did not fit the requested type.
    Decode,
    /// The API answered with a non-success status.
    Http,
    /// The request could not be completed at the network layer.
    Transport,
    /// The HTTP layer failed in a way the classifier does not recognise.
    UnknownTransport,
    /// The client or request was configured incorrectly.
    Configuration,
}

/// The main error type for CoinGecko API calls.
///
/// # Examples
///
/// ```no_run
/// use coingecko_client::{Client, Error, ErrorKind};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new()?;
///
/// match client.coin("not-a-coin", &Default::default()).await {
///     Ok(response) => println!("{}", response.data["name"]),
///     Err(Error::Http { status, message, .. }) => {
///         eprintln!("API said {}: {:?}", status, message);
///     }
///     Err(e) if e.kind() == ErrorKind::Transport => eprintln!("network trouble: {}", e),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A classified network-level failure (timeout, refused connection, reset).
    #[error("Transport error ({classification}): {source}")]
    Transport {
        /// What kind of transport failure this was
        classification: Classification,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// A failure from the HTTP layer that could not be classified.
    #[error("Unclassified transport error: {0}")]
    UnknownTransport(#[source] reqwest::Error),

    /// The API returned a non-2xx status.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code
    /// * `classification` - `ClientError` for 4xx, `ServerError` for 5xx
    /// * `message` - The `error` field of a JSON error body, if present
    /// * `raw_response` - The raw response body
    /// * `headers` - The response headers
    #[error("HTTP error {status}: {raw_response}")]
    Http {
        /// The HTTP status code
        status: StatusCode,
        /// Classification derived from the status
        classification: Classification,
        /// Error message extracted from the response body
        message: Option<String>,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response (status {status}): {serde_error}")]
    Decode {
        /// The raw response body that failed to decode
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The retry budget was used up on transient failures.
    #[error("Gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        /// The number of attempts made
        attempts: usize,
        /// The error from the final attempt
        last_error: Box<Error>,
    },

    /// Invalid configuration was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Wraps an error raised by the HTTP layer with its classification.
    pub fn from_transport(source: reqwest::Error) -> Self {
        match crate::classify::classify(&source) {
            Classification::Unknown => Error::UnknownTransport(source),
            classification => Error::Transport {
                classification,
                source,
            },
        }
    }

    /// Builds an [`Error::Http`] from a non-success response.
    ///
    /// The `message` is taken from the body's `error` field when the body is a
    /// JSON object carrying one (either `{"error": "..."}` or
    /// `{"status": {"error_message": "..."}}`).
    pub fn http(status: StatusCode, raw_response: String, headers: HeaderMap) -> Self {
        let message = extract_message(&raw_response);
        Error::Http {
            status,
            classification: Classification::from_status(status),
            message,
            raw_response,
            headers,
        }
    }

    /// Returns the coarse kind of this error.
    ///
    /// [`Error::RetriesExhausted`] reports the kind of its last error.
    ///
    /// # Examples
    ///
    /// ```
    /// use coingecko_client::{Error, ErrorKind};
    /// use http::{HeaderMap, StatusCode};
    ///
    /// let err = Error::http(
    ///     StatusCode::NOT_FOUND,
    ///     r#"{"error":"coin not found"}"#.to_string(),
    ///     HeaderMap::new(),
    /// );
    /// assert_eq!(err.kind(), ErrorKind::Http);
    /// assert_eq!(err.message(), Some("coin not found"));
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } => ErrorKind::Transport,
            Error::UnknownTransport(_) => ErrorKind::UnknownTransport,
            Error::Http { .. } => ErrorKind::Http,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::RetriesExhausted { last_error, .. } => last_error.kind(),
            Error::Configuration(_) | Error::InvalidUrl(_) => ErrorKind::Configuration,
        }
    }

    /// Returns the fine-grained classification, if this error has one.
    pub fn classification(&self) -> Option<Classification> {
        match self {
            Error::Transport { classification, .. } => Some(*classification),
            Error::Http { classification, .. } => Some(*classification),
            Error::UnknownTransport(_) => Some(Classification::Unknown),
            Error::RetriesExhausted { last_error, .. } => last_error.classification(),
            _ => None,
        }
    }

    /// Returns `true` if another attempt might succeed.
    ///
    /// Only transient transport failures qualify. HTTP statuses, decode
    /// failures and configuration errors are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport { classification, .. } => classification.is_transient(),
            Error::UnknownTransport(_) => false,
            Error::Http { .. } => false,
            Error::Decode { .. } => false,
            Error::RetriesExhausted { .. } => false,
            Error::Configuration(_) => false,
            Error::InvalidUrl(_) => false,
        }
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Decode { status, .. } => Some(*status),
            Error::RetriesExhausted { last_error, .. } => last_error.status(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Http { raw_response, .. } => Some(raw_response),
            Error::Decode { raw_response, .. } => Some(raw_response),
            Error::RetriesExhausted { last_error, .. } => last_error.raw_response(),
            _ => None,
        }
    }

    /// Returns the API's error message, falling back to the raw body.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Http {
                message: Some(message),
                ..
            } => Some(message),
            _ => self.raw_response(),
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.pointer("/status/error_message"))
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}

/// A specialized `Result` type for CoinGecko API calls.
pub type Result<T> = std::result::Result<T, Error>;
