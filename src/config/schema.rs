//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public market endpoints of the Coinbase Advanced Trade API.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://api.coinbase.com/api/v3/brokerage/market";

/// Root configuration for the market data gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream market-data API settings.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Upstream API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL that `/products/{product_id}/...` paths are appended to.
    pub base_url: String,

    /// Deadline for a candles call in seconds.
    pub candles_timeout_secs: u64,

    /// Deadline for a ticker call in seconds.
    pub ticker_timeout_secs: u64,

    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Idle pooled connections kept per upstream host.
    pub pool_max_idle_per_host: usize,
}

impl UpstreamConfig {
    pub fn candles_timeout(&self) -> Duration {
        Duration::from_secs(self.candles_timeout_secs)
    }

    pub fn ticker_timeout(&self) -> Duration {
        Duration::from_secs(self.ticker_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE.to_string(),
            candles_timeout_secs: 15,
            ticker_timeout_secs: 10,
            connect_timeout_secs: 5,
            pool_max_idle_per_host: 16,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log line format.
    pub log_format: LogFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Address for the Prometheus scrape endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_filter: "market_gateway=info,tower_http=info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_upstream_deadlines() {
        let config = GatewayConfig::default();
        assert_eq!(config.upstream.candles_timeout(), Duration::from_secs(15));
        assert_eq!(config.upstream.ticker_timeout(), Duration::from_secs(10));
        assert_eq!(config.upstream.base_url, DEFAULT_UPSTREAM_BASE);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            ticker_timeout_secs = 3

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.ticker_timeout_secs, 3);
        assert_eq!(config.upstream.candles_timeout_secs, 15);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.upstream.base_url, DEFAULT_UPSTREAM_BASE);
    }
}
