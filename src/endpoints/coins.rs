//! Coin listings, details, tickers and market tables.

use crate::{Client, Request, Response, Result};
use serde::Serialize;
use serde_json::Value;

/// Options for [`Client::coins_list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoinsListOptions {
    /// Include each coin's platform contract addresses.
    pub include_platform: Option<bool>,
}

/// Options for [`Client::coin`]. Unset sections use the API defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoinOptions {
    /// Include localized names and descriptions.
    pub localization: Option<bool>,
    /// Include ticker data.
    pub tickers: Option<bool>,
    /// Include market data.
    pub market_data: Option<bool>,
    /// Include community data (social accounts, forums).
    pub community_data: Option<bool>,
    /// Include developer data (repository stats).
    pub developer_data: Option<bool>,
    /// Include 7-day sparkline data.
    pub sparkline: Option<bool>,
}

/// Options for [`Client::tickers`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickersOptions {
    /// Only tickers from these exchange ids.
    pub exchange_ids: Vec<String>,
    /// Include exchange logos.
    pub include_exchange_logo: Option<bool>,
    /// Page of results.
    pub page: Option<u32>,
    /// `trust_score_desc`, `trust_score_asc` or `volume_desc`.
    pub order: Option<String>,
    /// Include 2% orderbook depth.
    pub depth: Option<bool>,
}

/// Options for [`Client::markets`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketsOptions {
    /// Only coins in this category.
    pub category: Option<String>,
    /// Sort order, e.g. `market_cap_desc`, `volume_asc`, `id_desc`.
    pub order: Option<String>,
    /// Results per page.
    pub per_page: Option<u32>,
    /// Page of results.
    pub page: Option<u32>,
    /// Include 7-day sparkline data.
    pub sparkline: Option<bool>,
    /// Price change windows to include: `1h`, `24h`, `7d`, `14d`, `30d`, `200d`, `1y`.
    pub price_change_percentage: Vec<String>,
}

impl Client {
    /// Every supported coin's id, symbol and name (`coins/list`).
    pub async fn coins_list(&self, options: &CoinsListOptions) -> Result<Response<Value>> {
        self.fetch(Request::new(["coins", "list"]).with_options(options)?)
            .await
    }

    /// Current data for one coin (`coins/{id}`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coingecko_client::{endpoints::CoinOptions, models::Coin, Client};
    ///
    /// # async fn example() -> Result<(), coingecko_client::Error> {
    /// let client = Client::new()?;
    /// let options = CoinOptions {
    ///     tickers: Some(false),
    ///     community_data: Some(false),
    ///     developer_data: Some(false),
    ///     ..Default::default()
    /// };
    ///
    /// let coin = client.coin("bitcoin", &options).await?.decode::<Coin>()?;
    /// println!("{} trades at {:?} USD", coin.data.name, coin.data.price_in("usd"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn coin(&self, id: &str, options: &CoinOptions) -> Result<Response<Value>> {
        self.fetch(Request::new(["coins", id]).with_options(options)?)
            .await
    }

    /// Tickers for one coin across exchanges (`coins/{id}/tickers`).
    pub async fn tickers(&self, id: &str, options: &TickersOptions) -> Result<Response<Value>> {
        self.fetch(Request::new(["coins", id, "tickers"]).with_options(options)?)
            .await
    }

    /// Market table rows for `ids` priced in `vs_currency` (`coins/markets`).
    ///
    /// `ids` takes a comma-separated list.
    pub async fn markets(
        &self,
        ids: &str,
        vs_currency: &str,
        options: &MarketsOptions,
    ) -> Result<Response<Value>> {
        let request = Request::new(["coins", "markets"])
            .param("ids", ids)
            .param("vs_currency", vs_currency)
            .with_options(options)?;
        self.fetch(request).await
    }
}
