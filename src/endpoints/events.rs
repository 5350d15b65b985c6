//! Crypto events (conferences, meetups).

use crate::{Client, Request, Response, Result};
use serde::Serialize;
use serde_json::Value;

/// Options for [`Client::events`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventsOptions {
    /// Country code from [`Client::event_countries`].
    pub country_code: Option<String>,
    /// Event type from [`Client::event_types`].
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Page of results.
    pub page: Option<u32>,
    /// Only upcoming events. The API defaults to `true`.
    pub upcoming_events_only: Option<bool>,
    /// Only events after this date, `yyyy-mm-dd`.
    pub from_date: Option<String>,
    /// Only events before this date, `yyyy-mm-dd`.
    pub to_date: Option<String>,
}

impl Client {
    /// Listed events (`events`).
    pub async fn events(&self, options: &EventsOptions) -> Result<Response<Value>> {
        self.fetch(Request::new(["events"]).with_options(options)?)
            .await
    }

    /// Countries events can be filtered by (`events/countries`).
    pub async fn event_countries(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["events", "countries"])).await
    }

    /// Event types events can be filtered by (`events/types`).
    pub async fn event_types(&self) -> Result<Response<Value>> {
        self.fetch(Request::new(["events", "types"])).await
    }
}
