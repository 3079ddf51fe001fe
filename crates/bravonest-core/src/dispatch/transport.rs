//! HTTP seam for the relay providers.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::Value;

use crate::error::DispatchResult;

/// Request body shapes the relays use
#[derive(Debug, Clone, PartialEq)]
pub enum RelayBody {
    /// `application/x-www-form-urlencoded` pairs
    Form(Vec<(String, String)>),
    Json(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    pub url: String,
    pub body: RelayBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one POST and returns whatever the relay answered.
///
/// Futures are `!Send` so the browser `fetch` backend fits.
pub trait RelayTransport {
    fn post<'a>(&'a self, request: RelayRequest) -> LocalBoxFuture<'a, DispatchResult<RelayResponse>>;
}

/// `reqwest` transport (uses `fetch` on wasm32)
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RelayTransport for HttpTransport {
    fn post<'a>(&'a self, request: RelayRequest) -> LocalBoxFuture<'a, DispatchResult<RelayResponse>> {
        async move {
            let builder = self
                .client
                .post(&request.url)
                .header(reqwest::header::ACCEPT, "application/json");
            let builder = match &request.body {
                RelayBody::Form(pairs) => builder.form(pairs),
                RelayBody::Json(value) => builder.json(value),
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(RelayResponse { status, body })
        }
        .boxed_local()
    }
}
