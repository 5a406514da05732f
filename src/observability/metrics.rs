//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by operation, status
//! - `gateway_request_duration_seconds` (histogram): latency by operation
//!
//! Recording is a no-op until a recorder is installed, so handlers record
//! unconditionally and `init_metrics` decides whether anything is exported.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed gateway request.
pub fn record_request(operation: &'static str, status: u16, started: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!("gateway_request_duration_seconds", "operation" => operation)
        .record(started.elapsed().as_secs_f64());
}
