//! Derivative tickers and derivative exchanges.

use crate::{Client, Request, Response, Result};
use serde::Serialize;
use serde_json::Value;

/// Which derivative tickers to include.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DerivativesOptions {
    /// `all` or `unexpired`.
    pub include_tickers: Option<String>,
}

/// Options for [`Client::derivative_exchanges`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct DerivativeExchangesOptions {
    /// Sort order, e.g. `name_asc`, `open_interest_btc_desc`, `trade_volume_24h_btc_desc`.
    pub order: Option<String>,
    /// Results per page.
    pub per_page: Option<u32>,
    /// Page of results.
    pub page: Option<u32>,
}

impl Client {
    /// Every derivative ticker (`derivatives`).
    pub async fn derivatives(&self, options: &DerivativesOptions) -> Result<Response<Value>> {
        self.fetch(Request::new(["derivatives"]).with_options(options)?)
            .await
    }

    /// Derivative exchanges with open interest and volume (`derivatives/exchanges`).
    pub async fn derivative_exchanges(
        &self,
        options: &DerivativeExchangesOptions,
    ) -> Result<Response<Value>> {
        self.fetch(Request::new(["derivatives", "exchanges"]).with_options(options)?)
            .await
    }

    /// Details of one derivative exchange (`derivatives/exchanges/{id}`).
    ///
    /// No tickers are returned unless `include_tickers` is set.
    pub async fn derivative_exchange(
        &self,
        id: &str,
        options: &DerivativesOptions,
    ) -> Result<Response<Value>> {
        self.fetch(Request::new(["derivatives", "exchanges", id]).with_options(options)?)
            .await
    }

    /// Id and name of every derivative exchange (`derivatives/exchanges/list`).
    pub async fn derivative_exchanges_list(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["derivatives", "exchanges", "list"]))
            .await
    }
}
