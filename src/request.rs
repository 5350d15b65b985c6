//! Request descriptors.

use crate::{query::QueryValue, Query, Result};
use serde::Serialize;
use std::fmt;

/// Everything needed to make one GET against the API.
///
/// A request is an endpoint, stored as path segments relative to the base
/// URL, plus its query parameters. Segments are percent-encoded individually
/// when the URL is built, so identifiers can be passed through as given.
///
/// # Examples
///
/// ```
/// use coingecko_client::Request;
///
/// let request = Request::new(["coins", "bitcoin", "market_chart"])
///     .param("vs_currency", "usd")
///     .param("days", 30);
///
/// assert_eq!(request.endpoint(), "coins/bitcoin/market_chart");
/// assert_eq!(request.query().encode(), "days=30&vs_currency=usd");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    segments: Vec<String>,
    query: Query,
}

impl Request {
    /// Creates a request for the endpoint made of `segments`.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Query::new(),
        }
    }

    /// Creates a request from a slash-separated endpoint such as `"coins/list"`.
    ///
    /// Empty segments (leading, trailing or doubled slashes) are dropped.
    pub fn parse(endpoint: &str) -> Self {
        Self::new(endpoint.split('/').filter(|s| !s.is_empty()))
    }

    /// Adds a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Merges a whole query into this request. Keys from `query` win.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query.merge(query);
        self
    }

    /// Merges an options struct into the query.
    ///
    /// Explicit parameters set before this call are overridden by option keys
    /// with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` does not flatten into a query; see
    /// [`Query::from_serialize`].
    pub fn with_options<O: Serialize + ?Sized>(self, options: &O) -> Result<Self> {
        Ok(self.with_query(Query::from_serialize(options)?))
    }

    /// The endpoint's path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The endpoint path, joined with `/`.
    pub fn endpoint(&self) -> String {
        self.segments.join("/")
    }

    /// The query parameters.
    pub fn query(&self) -> &Query {
        &self.query
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.endpoint())?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query.encode())?;
        }
        Ok(())
    }
}
