use crate::{Client, Request, Response, Result};
use serde_json::Value;

impl Client {
    /// Id and name of every coin category (`coins/categories/list`).
    pub async fn categories_list(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["coins", "categories", "list"]))
            .await
    }

    /// Every coin category with market cap and volume (`coins/categories`).
    pub async fn categories(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["coins", "categories"])).await
    }
}
