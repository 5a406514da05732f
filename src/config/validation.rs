//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All problems are
//! collected and returned together rather than stopping at the first one.

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("upstream.base_url: {0}")]
    InvalidBaseUrl(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Check a configuration before it is accepted.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::InvalidBaseUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        Ok(url) if url.cannot_be_a_base() => {
            errors.push(ValidationError::InvalidBaseUrl(
                "URL cannot be used as a base".to_string(),
            ));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(e.to_string())),
    }

    let timeouts = [
        ("upstream.candles_timeout_secs", config.upstream.candles_timeout_secs),
        ("upstream.ticker_timeout_secs", config.upstream.ticker_timeout_secs),
        ("upstream.connect_timeout_secs", config.upstream.connect_timeout_secs),
    ];
    for (field, secs) in timeouts {
        if secs == 0 {
            errors.push(ValidationError::ZeroTimeout(field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
