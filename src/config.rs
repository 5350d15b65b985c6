//! Client configuration.
//!
//! [`ClientConfig`] holds the handful of settings a deployment usually wants
//! to change without touching code. It can be deserialized from any serde
//! format or read from the environment, then turned into a client with
//! [`Client::from_config`](crate::Client::from_config).

use crate::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// The public API root.
pub const BASE_URL: &str = "https://api.coingecko.com/api/v3/";

/// Attempts made per request unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_BASE_URL: &str = "COINGECKO_BASE_URL";
/// Environment variable overriding [`ClientConfig::max_attempts`].
pub const ENV_MAX_ATTEMPTS: &str = "COINGECKO_MAX_ATTEMPTS";
/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "COINGECKO_TIMEOUT_SECS";

/// Deployment settings for a [`Client`](crate::Client).
///
/// # Examples
///
/// ```
/// use coingecko_client::ClientConfig;
///
/// let config: ClientConfig = serde_json::from_str(r#"{ "timeout_secs": 10 }"#).unwrap();
/// assert_eq!(config.base_url, coingecko_client::BASE_URL);
/// assert_eq!(config.max_attempts, 5);
/// assert_eq!(config.timeout().unwrap().as_secs(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root that endpoint paths are appended to.
    pub base_url: String,
    /// Maximum attempts per request, including the first.
    pub max_attempts: usize,
    /// Per-request timeout in seconds. `None` leaves the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from `COINGECKO_*` environment variables,
    /// using defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_attempts = parse_var(ENV_MAX_ATTEMPTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = Some(parse_var(ENV_TIMEOUT_SECS, &raw)?);
        }

        Ok(config)
    }

    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Configuration(format!("Invalid {}={:?}: {}", name, raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:8080/"),
            (ENV_MAX_ATTEMPTS, "2"),
            (ENV_TIMEOUT_SECS, " 15 "),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_malformed_variable_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_MAX_ATTEMPTS, "lots")])).unwrap_err();
        match err {
            Error::Configuration(msg) => assert!(msg.contains(ENV_MAX_ATTEMPTS)),
            other => panic!("Expected Configuration, got {:?}", other),
        }
    }
}
