use crate::{Client, Request, Response, Result};
use serde_json::Value;

impl Client {
    /// Checks the API server status (`ping`).
    pub async fn ping(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["ping"])).await
    }
}
