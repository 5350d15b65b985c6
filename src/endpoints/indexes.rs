use super::Pagination;
use crate::{Client, Request, Response, Result};
use serde_json::Value;

impl Client {
    /// Market indexes (`indexes`).
    pub async fn indexes(&self, pagination: &Pagination) -> Result<Response<Value>> {
        self.fetch(Request::new(["indexes"]).with_options(pagination)?)
            .await
    }

    /// Id and name of every market index (`indexes/list`).
    pub async fn indexes_list(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["indexes", "list"])).await
    }

    /// One index on one market, e.g. `("cme_futures", "btc")` (`indexes/{market_id}/{index_id}`).
    pub async fn index(
        &self,
        market_id: &str,
        index_id: &str,
        pagination: &Pagination,
    ) -> Result<Response<Value>> {
        self.fetch(Request::new(["indexes", market_id, index_id]).with_options(pagination)?)
            .await
    }
}
