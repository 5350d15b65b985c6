//! Spot exchanges.

use super::Pagination;
use crate::{Client, Request, Response, Result};
use serde::Serialize;
use serde_json::Value;

/// Options for [`Client::exchange_tickers`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExchangeTickersOptions {
    /// Only tickers for these coin ids.
    pub coin_ids: Vec<String>,
    /// Include the exchange logo.
    pub include_exchange_logo: Option<bool>,
    /// Page of results.
    pub page: Option<u32>,
    /// `trust_score_desc`, `trust_score_asc` or `volume_desc`.
    pub order: Option<String>,
    /// Include 2% orderbook depth.
    pub depth: Option<bool>,
}

impl Client {
    /// All exchanges with their volume and trust data (`exchanges`).
    pub async fn exchanges(&self, pagination: &Pagination) -> Result<Response<Value>> {
        self.fetch(Request::new(["exchanges"]).with_options(pagination)?)
            .await
    }

    /// Details of one exchange (`exchanges/{id}`).
    pub async fn exchange(&self, id: &str) -> Result<Response<Value>> {
        self.fetch(Request::new(["exchanges", id])).await
    }

    /// Id and name of every exchange (`exchanges/list`).
    pub async fn exchanges_list(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["exchanges", "list"])).await
    }

    /// Tickers listed on one exchange (`exchanges/{id}/tickers`).
    pub async fn exchange_tickers(
        &self,
        id: &str,
        options: &ExchangeTickersOptions,
    ) -> Result<Response<Value>> {
        self.fetch(Request::new(["exchanges", id, "tickers"]).with_options(options)?)
            .await
    }

    /// News and announcements posted by one exchange (`exchanges/{id}/status_updates`).
    pub async fn exchange_status_updates(
        &self,
        id: &str,
        pagination: &Pagination,
    ) -> Result<Response<Value>> {
        self.fetch(Request::new(["exchanges", id, "status_updates"]).with_options(pagination)?)
            .await
    }

    /// Trade volume in BTC over the last `days` days (`exchanges/{id}/volume_chart`).
    pub async fn exchange_volume_chart(&self, id: &str, days: u32) -> Result<Response<Value>> {
        self.fetch(Request::new(["exchanges", id, "volume_chart"]).param("days", days))
            .await
    }
}
