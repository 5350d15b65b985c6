//! Simple prices and coin price history.

use crate::{Client, Request, Response, Result};
use serde_json::Value;

/// Quote currency the API docs use when none is specified.
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Longest range, in days, the API serves at hourly granularity.
pub const HOURLY_HISTORY_MAX_DAYS: u32 = 90;

fn market_chart(id: &str) -> Request {
    Request::new(["coins", id, "market_chart"])
}

impl Client {
    /// Current price of one or more coins in one or more currencies (`simple/price`).
    ///
    /// Both arguments take comma-separated lists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), coingecko_client::Error> {
    /// let client = coingecko_client::Client::new()?;
    /// let prices = client.get_prices("bitcoin,litecoin", "usd,myr").await?;
    /// println!("{}", prices.data["litecoin"]["myr"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_prices(&self, ids: &str, currencies: &str) -> Result<Response<Value>> {
        self.fetch(
            Request::new(["simple", "price"])
                .param("ids", ids)
                .param("vs_currencies", currencies),
        )
        .await
    }

    /// Price of `from` expressed in `to`. Same request as [`get_prices`](Self::get_prices).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coingecko_client::{Client, DEFAULT_VS_CURRENCY};
    ///
    /// # async fn example() -> Result<(), coingecko_client::Error> {
    /// let client = Client::new()?;
    /// let rate = client.get_exchange_rate("ethereum", DEFAULT_VS_CURRENCY).await?;
    /// println!("ETH/USD: {}", rate.data["ethereum"][DEFAULT_VS_CURRENCY]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Response<Value>> {
        self.get_prices(from, to).await
    }

    /// Currencies prices can be quoted in (`simple/supported_vs_currencies`).
    pub async fn supported_currencies(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["simple", "supported_vs_currencies"]))
            .await
    }

    /// A coin's price, market cap and volume on a past date (`coins/{id}/history`).
    ///
    /// `date` is formatted `dd-mm-yyyy`, e.g. `30-12-2017`.
    pub async fn get_historical_price_on_date(
        &self,
        id: &str,
        date: &str,
    ) -> Result<Response<Value>> {
        self.fetch(Request::new(["coins", id, "history"]).param("date", date))
            .await
    }

    /// Prices over the last 24 hours at 5-minute granularity.
    pub async fn get_minutely_historical_prices(
        &self,
        id: &str,
        currency: &str,
    ) -> Result<Response<Value>> {
        self.fetch(
            market_chart(id)
                .param("vs_currency", currency)
                .param("days", 1u32),
        )
        .await
    }

    /// Hourly prices over the last `days` days.
    ///
    /// The API only has hourly data for the last
    /// [`HOURLY_HISTORY_MAX_DAYS`] days; longer ranges are served by
    /// [`get_daily_historical_prices`](Self::get_daily_historical_prices)
    /// instead.
    pub async fn get_hourly_historical_prices(
        &self,
        id: &str,
        days: u32,
        currency: &str,
    ) -> Result<Response<Value>> {
        if days > HOURLY_HISTORY_MAX_DAYS {
            return self.get_daily_historical_prices(id, days, currency).await;
        }

        self.fetch(
            market_chart(id)
                .param("vs_currency", currency)
                .param("days", days),
        )
        .await
    }

    /// Daily prices over the last `days` days.
    pub async fn get_daily_historical_prices(
        &self,
        id: &str,
        days: u32,
        currency: &str,
    ) -> Result<Response<Value>> {
        self.fetch(
            market_chart(id)
                .param("vs_currency", currency)
                .param("days", days)
                .param("interval", "daily"),
        )
        .await
    }

    /// Open/high/low/close candles over the last `days` days (`coins/{id}/ohlc`).
    pub async fn get_ohlc(&self, id: &str, days: u32, currency: &str) -> Result<Response<Value>> {
        self.fetch(
            Request::new(["coins", id, "ohlc"])
                .param("vs_currency", currency)
                .param("days", days),
        )
        .await
    }
}
