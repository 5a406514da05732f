//! Gateway handlers.
//!
//! Each handler makes one upstream call and converts every failure into an
//! `ApiError` before returning; nothing escapes to axum unconverted.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::time::Instant;

use crate::http::error::ApiError;
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::{CandleQuery, CandlesResponse, TickerQuery, UpstreamError};

const OP_CANDLES: &str = "candles";
const OP_TICKER: &str = "ticker";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /candles`
pub async fn get_candles(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<CandleQuery>, QueryRejection>,
) -> Result<Json<CandlesResponse>, ApiError> {
    let started = Instant::now();
    let request_id = request_id(&headers);
    let Query(query) = query.map_err(|e| reject_query(OP_CANDLES, request_id, e, started))?;

    let window = query.window(Utc::now());
    tracing::debug!(
        request_id = %request_id,
        product_id = %query.product_id,
        granularity = %query.granularity,
        start = window.start,
        end = window.end,
        "Fetching candles"
    );

    match state.upstream.candles(&query, window).await {
        Ok(body) => {
            metrics::record_request(OP_CANDLES, StatusCode::OK.as_u16(), started);
            Ok(Json(body))
        }
        Err(err) => Err(fail(OP_CANDLES, &query.product_id, request_id, &err, started)),
    }
}

/// `GET /ticker`
pub async fn get_ticker(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TickerQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let started = Instant::now();
    let request_id = request_id(&headers);
    let Query(query) = query.map_err(|e| reject_query(OP_TICKER, request_id, e, started))?;

    tracing::debug!(request_id = %request_id, product_id = %query.product_id, "Fetching ticker");

    match state.upstream.ticker(&query).await {
        Ok(body) => {
            metrics::record_request(OP_TICKER, StatusCode::OK.as_u16(), started);
            Ok(Json(body))
        }
        Err(err) => Err(fail(OP_TICKER, &query.product_id, request_id, &err, started)),
    }
}

/// `GET /health`
pub async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Unmatched paths get the same JSON error shape as everything else.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Log an upstream failure and convert it for the caller.
fn fail(
    operation: &'static str,
    product_id: &str,
    request_id: &str,
    err: &UpstreamError,
    started: Instant,
) -> ApiError {
    match err {
        UpstreamError::Timeout(secs) => tracing::error!(
            operation,
            product_id = %product_id,
            request_id = %request_id,
            timeout_secs = *secs,
            "Timeout fetching {} for {}", operation, product_id
        ),
        UpstreamError::Status { status, .. } => tracing::error!(
            operation,
            product_id = %product_id,
            request_id = %request_id,
            status = status.as_u16(),
            error = %err,
            "HTTP error fetching {}: {}", operation, status.as_u16()
        ),
        _ => tracing::error!(
            operation,
            product_id = %product_id,
            request_id = %request_id,
            error = %err,
            "Unexpected error fetching {}", operation
        ),
    }

    let api = ApiError::from(err);
    metrics::record_request(operation, api.status().as_u16(), started);
    api
}

fn reject_query(
    operation: &'static str,
    request_id: &str,
    rejection: QueryRejection,
    started: Instant,
) -> ApiError {
    tracing::warn!(
        operation,
        request_id = %request_id,
        error = %rejection.body_text(),
        "Rejected query string"
    );
    let api = ApiError::InvalidQuery(rejection.body_text());
    metrics::record_request(operation, api.status().as_u16(), started);
    api
}
