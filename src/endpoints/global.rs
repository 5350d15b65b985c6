//! Market-wide figures, trending searches and project status updates.

use crate::{Client, Request, Response, Result};
use serde::Serialize;
use serde_json::Value;

/// Options for [`Client::status_updates`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusUpdatesOptions {
    /// `general`, `milestone`, `partnership`, `exchange_listing`,
    /// `software_release`, `fund_movement`, `new_listings` or `event`.
    pub category: Option<String>,
    /// `coin` or `market`. Both when unset.
    pub project_type: Option<String>,
    /// Results per page.
    pub per_page: Option<u32>,
    /// Page of results.
    pub page: Option<u32>,
}

impl Client {
    /// Total market cap, volume and dominance across all coins (`global`).
    pub async fn global(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["global"])).await
    }

    /// DeFi market cap, volume and dominance (`global/decentralized_finance_defi`).
    pub async fn global_defi(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["global", "decentralized_finance_defi"]))
            .await
    }

    /// The most searched coins of the last 24 hours (`search/trending`).
    pub async fn trending(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["search", "trending"])).await
    }

    /// Status updates posted by coin and market projects (`status_updates`).
    pub async fn status_updates(&self, options: &StatusUpdatesOptions) -> Result<Response<Value>> {
        self.fetch(Request::new(["status_updates"]).with_options(options)?)
            .await
    }
}
