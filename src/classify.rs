//! Classification of transport and HTTP failures.
//!
//! Every failure the client can observe is mapped onto one of a fixed set of
//! [`Classification`]s. Each classification has a stable string key (for logs
//! and for callers that match on names) and belongs to one coarse
//! [`ErrorKind`](crate::ErrorKind).

use crate::ErrorKind;
use http::StatusCode;
use std::fmt;

/// Fine-grained classification of a failed request.
///
/// # Examples
///
/// ```
/// use coingecko_client::Classification;
/// use http::StatusCode;
///
/// let class = Classification::from_status(StatusCode::NOT_FOUND);
/// assert_eq!(class, Classification::ClientError);
/// assert_eq!(class.key(), "ClientError");
/// assert_eq!(Classification::from_key("TimeoutError"), Some(Classification::Timeout));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The request or response did not finish within the configured timeout.
    Timeout,
    /// No connection could be established (DNS, refused, TLS handshake).
    ConnectionFailed,
    /// The request could not be sent, e.g. the connection was reset.
    RequestFailed,
    /// The connection dropped while the response body was being read.
    BodyInterrupted,
    /// Redirect loop or a 3xx response that was not followed.
    Redirect,
    /// 4xx response.
    ClientError,
    /// 5xx response.
    ServerError,
    /// Anything the classifier does not recognise.
    Unknown,
}

impl Classification {
    /// Every classification, in declaration order.
    pub const ALL: [Classification; 8] = [
        Classification::Timeout,
        Classification::ConnectionFailed,
        Classification::RequestFailed,
        Classification::BodyInterrupted,
        Classification::Redirect,
        Classification::ClientError,
        Classification::ServerError,
        Classification::Unknown,
    ];

    /// Returns the stable name of this classification.
    pub fn key(self) -> &'static str {
        match self {
            Classification::Timeout => "TimeoutError",
            Classification::ConnectionFailed => "ConnectionFailed",
            Classification::RequestFailed => "RequestFailed",
            Classification::BodyInterrupted => "BodyInterrupted",
            Classification::Redirect => "RedirectError",
            Classification::ClientError => "ClientError",
            Classification::ServerError => "ServerError",
            Classification::Unknown => "UnknownTransportError",
        }
    }

    /// Looks up a classification by its [`key`](Self::key).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.key() == key)
    }

    /// The coarse error kind this classification belongs to.
    pub fn kind(self) -> ErrorKind {
        match self {
            Classification::ClientError | Classification::ServerError => ErrorKind::Http,
            Classification::Unknown => ErrorKind::UnknownTransport,
            Classification::Timeout
            | Classification::ConnectionFailed
            | Classification::RequestFailed
            | Classification::BodyInterrupted
            | Classification::Redirect => ErrorKind::Transport,
        }
    }

    /// Returns `true` for transient transport failures worth another attempt.
    ///
    /// HTTP statuses are never transient here: an application-level error such
    /// as "coin not found" will not change on retry.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            Classification::Timeout
                | Classification::ConnectionFailed
                | Classification::RequestFailed
                | Classification::BodyInterrupted
        )
    }

    /// Classifies a non-success HTTP status.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_client_error() {
            Classification::ClientError
        } else if status.is_server_error() {
            Classification::ServerError
        } else if status.is_redirection() {
            Classification::Redirect
        } else {
            Classification::Unknown
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Classifies an error raised by the HTTP layer.
///
/// Never fails; errors carrying no recognisable kind fall back to
/// [`Classification::Unknown`].
pub fn classify(error: &reqwest::Error) -> Classification {
    if let Some(status) = error.status() {
        return Classification::from_status(status);
    }

    if error.is_timeout() {
        Classification::Timeout
    } else if error.is_connect() {
        Classification::ConnectionFailed
    } else if error.is_redirect() {
        Classification::Redirect
    } else if error.is_body() || error.is_decode() {
        // reqwest reports a body cut off mid-read as a decode error
        Classification::BodyInterrupted
    } else if error.is_request() {
        Classification::RequestFailed
    } else {
        Classification::Unknown
    }
}
