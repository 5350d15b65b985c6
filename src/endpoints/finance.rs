//! Lending and staking platforms and their products.

use crate::{Client, Request, Response, Result};
use serde::Serialize;
use serde_json::Value;

/// Options for [`Client::finance_products`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct FinanceProductsOptions {
    /// Results per page.
    pub per_page: Option<u32>,
    /// Page of results.
    pub page: Option<u32>,
    /// Only products launched after this UNIX timestamp.
    pub start_at: Option<i64>,
    /// Only products ending before this UNIX timestamp.
    pub end_at: Option<i64>,
}

impl Client {
    /// Finance platforms such as lending desks and staking services (`finance_platforms`).
    pub async fn finance_platforms(&self, pagination: &super::Pagination) -> Result<Response<Value>> {
        self.fetch(Request::new(["finance_platforms"]).with_options(pagination)?)
            .await
    }

    /// Products offered by finance platforms, with supply and borrow rates (`finance_products`).
    pub async fn finance_products(
        &self,
        options: &FinanceProductsOptions,
    ) -> Result<Response<Value>> {
        self.fetch(Request::new(["finance_products"]).with_options(options)?)
            .await
    }
}
