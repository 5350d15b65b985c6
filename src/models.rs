//! Typed views of documented response shapes.
//!
//! The API's payloads evolve independently of this crate, so catalog methods
//! return plain JSON. These models cover the stable parts of a few shapes and
//! keep every field they do not name in `extra`. Use them with
//! [`Response::decode`](crate::Response::decode).

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Result of `simple/price`: coin id → currency → price.
pub type SimplePrice = HashMap<String, HashMap<String, f64>>;

/// A coin as returned by `coins/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Coin {
    /// API id, e.g. `bitcoin`.
    pub id: String,
    /// Ticker symbol, e.g. `btc`.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Present when the request asked for market data.
    #[serde(default)]
    pub market_data: Option<MarketData>,
    /// Every other field of the payload.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Market figures of a coin, keyed by quote currency where applicable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketData {
    /// Current price per quote currency.
    #[serde(default)]
    pub current_price: BTreeMap<String, f64>,
    /// Market capitalisation per quote currency.
    #[serde(default)]
    pub market_cap: BTreeMap<String, f64>,
    /// 24h trading volume per quote currency.
    #[serde(default)]
    pub total_volume: BTreeMap<String, f64>,
    /// All-time high per quote currency.
    #[serde(default)]
    pub ath: BTreeMap<String, f64>,
    /// All-time low per quote currency.
    #[serde(default)]
    pub atl: BTreeMap<String, f64>,
    /// Total supply, if known.
    pub total_supply: Option<f64>,
    /// Return on investment since ICO, `null` for most coins.
    pub roi: Option<Value>,
    /// Every other market figure.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Coin {
    /// Current price in `currency`, if market data was requested and lists it.
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.market_data.as_ref()?.current_price.get(currency).copied()
    }
}
