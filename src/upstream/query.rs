//! Client-facing query parameters and the upstream parameters derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed cap on the number of candles requested upstream.
pub const CANDLE_LIMIT: u32 = 350;

pub const DEFAULT_PRODUCT_ID: &str = "ETH-USD";
pub const DEFAULT_GRANULARITY: &str = "ONE_MINUTE";
pub const DEFAULT_LOOKBACK_MINUTES: u32 = 300;

/// Parameters of `GET /candles`.
///
/// `granularity` is forwarded verbatim; the upstream owns its enumeration
/// (`ONE_MINUTE`, `FIVE_MINUTE`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CandleQuery {
    pub product_id: String,
    pub granularity: String,
    pub lookback_minutes: u32,
}

impl Default for CandleQuery {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            granularity: DEFAULT_GRANULARITY.to_string(),
            lookback_minutes: DEFAULT_LOOKBACK_MINUTES,
        }
    }
}

impl CandleQuery {
    /// Window ending at `now` and reaching back `lookback_minutes`.
    pub fn window(&self, now: DateTime<Utc>) -> CandleWindow {
        CandleWindow::ending_at(now, self.lookback_minutes)
    }

    /// Query string sent upstream for the given window.
    pub fn upstream_params(&self, window: CandleWindow) -> Vec<(&'static str, String)> {
        vec![
            ("start", window.start.to_string()),
            ("end", window.end.to_string()),
            ("granularity", self.granularity.clone()),
            ("limit", CANDLE_LIMIT.to_string()),
        ]
    }
}

/// Parameters of `GET /ticker`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TickerQuery {
    pub product_id: String,
}

impl Default for TickerQuery {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
        }
    }
}

/// Candle time window as Unix seconds.
///
/// `start == end - lookback_minutes * 60` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleWindow {
    pub start: i64,
    pub end: i64,
}

impl CandleWindow {
    pub fn ending_at(now: DateTime<Utc>, lookback_minutes: u32) -> Self {
        let end = now.timestamp();
        Self {
            start: end - i64::from(lookback_minutes) * 60,
            end,
        }
    }

    pub fn span_secs(&self) -> i64 {
        self.end - self.start
    }
}
