//! Upstream market-data API subsystem.
//!
//! # Data Flow
//! ```text
//! CandleQuery / TickerQuery (query.rs)
//!     → derived upstream params (window, limit)
//!     → client.rs (single GET, deadline, cache-control: no-cache)
//!     → decoded JSON, or UpstreamError (error.rs)
//! ```
//!
//! # Design Decisions
//! - One attempt per call; no retries, no caching
//! - One pooled `reqwest::Client` shared by all requests
//! - Dropping the call future abandons the outbound request

pub mod client;
pub mod error;
pub mod query;

pub use client::{CandlesResponse, UpstreamClient};
pub use error::{UpstreamError, UpstreamResult};
pub use query::{CandleQuery, CandleWindow, TickerQuery, CANDLE_LIMIT};
