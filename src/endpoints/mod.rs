//! The endpoint catalog.
//!
//! One method on [`Client`](crate::Client) per remote endpoint, grouped by
//! resource. Each builds a [`Request`](crate::Request) from its path and
//! parameters and hands it to the dispatcher; payloads come back as
//! [`Response<Value>`](crate::Response) without any client-side validation or
//! reshaping. Invalid identifiers or option values surface as
//! [`Error::Http`](crate::Error::Http) from the API.
//!
//! Optional query parameters are given as per-endpoint option structs. Every
//! field is optional and unset fields are not sent, so `&Default::default()`
//! means "API defaults".

mod categories;
mod coins;
mod derivatives;
mod events;
mod exchanges;
mod finance;
mod global;
mod indexes;
mod prices;
mod status;

use serde::Serialize;

pub use coins::{CoinOptions, CoinsListOptions, MarketsOptions, TickersOptions};
pub use derivatives::{DerivativeExchangesOptions, DerivativesOptions};
pub use events::EventsOptions;
pub use exchanges::ExchangeTickersOptions;
pub use finance::FinanceProductsOptions;
pub use global::StatusUpdatesOptions;
pub use prices::{DEFAULT_VS_CURRENCY, HOURLY_HISTORY_MAX_DAYS};

/// Page selection shared by the list endpoints.
///
/// # Examples
///
/// ```
/// use coingecko_client::endpoints::Pagination;
///
/// let first_ten = Pagination::new(10, 1);
/// assert_eq!(first_ten.per_page, Some(10));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Results per page.
    pub per_page: Option<u32>,
    /// Page number, starting at 1.
    pub page: Option<u32>,
}

impl Pagination {
    /// Selects page `page` with `per_page` results.
    pub fn new(per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
        }
    }
}
