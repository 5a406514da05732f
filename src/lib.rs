//! Market data gateway library.
//!
//! Forwards candle and ticker requests to the Coinbase public market API and
//! normalizes upstream failures into JSON error responses.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
