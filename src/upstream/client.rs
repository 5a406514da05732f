//! Upstream market-data client with per-call deadlines.
//!
//! # Responsibilities
//! - Build `/products/{product_id}/...` URLs against the configured base
//! - Issue exactly one GET per call, no retries
//! - Enforce the per-operation deadline over the whole exchange (send + body)
//! - Classify failures into timeout, upstream status, or internal

use reqwest::header::CACHE_CONTROL;
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::error::{UpstreamError, UpstreamResult};
use crate::upstream::query::{CandleQuery, CandleWindow, TickerQuery};

/// Successful candles payload. Records are passed through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CandlesResponse {
    pub candles: Vec<serde_json::Value>,
}

/// Shared, pooled client for the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: Url,
    client: Client,
    candles_timeout: Duration,
    ticker_timeout: Duration,
}

impl UpstreamClient {
    /// Create a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| UpstreamError::BaseUrl(format!("'{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::BaseUrl(format!(
                "'{}' cannot be used as a base",
                config.base_url
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            // 3xx is an upstream status like any other non-2xx and is passed through.
            .redirect(Policy::none())
            .build()
            .map_err(UpstreamError::Client)?;

        tracing::info!(
            base_url = %base_url,
            candles_timeout_secs = config.candles_timeout_secs,
            ticker_timeout_secs = config.ticker_timeout_secs,
            "Upstream client initialized"
        );

        Ok(Self {
            base_url,
            client,
            candles_timeout: config.candles_timeout(),
            ticker_timeout: config.ticker_timeout(),
        })
    }

    /// `{base}/products/{product_id}/{resource}`, with `product_id` encoded as one segment.
    pub fn product_url(&self, product_id: &str, resource: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["products", product_id, resource]);
        }
        url
    }

    /// Fetch candles for `query` over `window`.
    pub async fn candles(
        &self,
        query: &CandleQuery,
        window: CandleWindow,
    ) -> UpstreamResult<CandlesResponse> {
        let url = self.product_url(&query.product_id, "candles");
        let request = self.client.get(url).query(&query.upstream_params(window));
        self.fetch(request, self.candles_timeout).await
    }

    /// Fetch the ticker snapshot for `query`.
    pub async fn ticker(&self, query: &TickerQuery) -> UpstreamResult<serde_json::Value> {
        let url = self.product_url(&query.product_id, "ticker");
        self.fetch(self.client.get(url), self.ticker_timeout).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        deadline: Duration,
    ) -> UpstreamResult<T> {
        let deadline_secs = deadline.as_secs();
        match timeout(deadline, exchange(request, deadline_secs)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(deadline_secs)),
        }
    }
}

/// Send one request and decode a 2xx JSON body.
async fn exchange<T: DeserializeOwned>(
    request: RequestBuilder,
    deadline_secs: u64,
) -> UpstreamResult<T> {
    let response = request
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|e| UpstreamError::from_reqwest(e, deadline_secs))?;

    let status = response.status();
    if !status.is_success() {
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamError::status(status, url, &body));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| UpstreamError::from_reqwest(e, deadline_secs))?;
    Ok(serde_json::from_slice(&bytes)?)
}
