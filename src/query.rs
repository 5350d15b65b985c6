//! Query parameters.
//!
//! A [`Query`] is a map of unique keys to scalar [`QueryValue`]s. Keys are kept
//! sorted, so two queries holding the same pairs always encode to the same
//! string no matter the order they were built in.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// A string value.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean, encoded as `true`/`false`.
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::UInt(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64);
impl_from_int!(UInt, u64: u8, u16, u32, u64);

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        QueryValue::UInt(value as u64)
    }
}

/// An ordered set of query parameters.
///
/// # Examples
///
/// ```
/// use coingecko_client::Query;
///
/// let a = Query::new().with("per_page", 10).with("page", 2);
/// let b = Query::new().with("page", 2).with("per_page", 10);
/// assert_eq!(a.encode(), "page=2&per_page=10");
/// assert_eq!(a.encode(), b.encode());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: BTreeMap<String, QueryValue>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a parameter only when `value` is `Some`.
    pub fn with_opt<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Merges `other` into this query. Keys from `other` win on collision.
    pub fn merge(&mut self, other: Query) {
        self.params.extend(other.params);
    }

    /// Flattens a serializable options struct into a query.
    ///
    /// Fields that serialize to `null` are skipped and arrays are joined with
    /// commas, which is how the API takes lists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `options` does not serialize to a
    /// flat object.
    pub fn from_serialize<T: Serialize + ?Sized>(options: &T) -> Result<Self> {
        let value = serde_json::to_value(options)
            .map_err(|e| Error::Configuration(format!("Invalid query options: {}", e)))?;

        let fields = match value {
            Value::Object(fields) => fields,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(Error::Configuration(format!(
                    "Query options must be an object, got {}",
                    other
                )))
            }
        };

        let mut query = Self::new();
        for (key, value) in fields {
            if let Some(value) = scalar(&key, value)? {
                query.insert(key, value);
            }
        }
        Ok(query)
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// Returns `true` if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encodes the query as `application/x-www-form-urlencoded`, in key order.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

fn scalar(key: &str, value: Value) -> Result<Option<QueryValue>> {
    Ok(match value {
        Value::Null => None,
        Value::Bool(b) => Some(QueryValue::Bool(b)),
        Value::String(s) => Some(QueryValue::Str(s)),
        Value::Number(n) => Some(if let Some(u) = n.as_u64() {
            QueryValue::UInt(u)
        } else if let Some(i) = n.as_i64() {
            QueryValue::Int(i)
        } else {
            QueryValue::Float(n.as_f64().unwrap_or_default())
        }),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match scalar(key, item)? {
                    Some(part) => parts.push(part.to_string()),
                    None => continue,
                }
            }
            if parts.is_empty() {
                None
            } else {
                Some(QueryValue::Str(parts.join(",")))
            }
        }
        Value::Object(_) => {
            return Err(Error::Configuration(format!(
                "Query option `{}` must be a scalar or a list",
                key
            )))
        }
    })
}
