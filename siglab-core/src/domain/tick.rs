//! Tick — the fundamental market data unit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLCV price bar for a single market at a single timestamp.
///
/// Ticks are produced externally and read-only here: every computation in
/// this crate is a pure function of a tick slice. Insertion order is
/// chronological order, and every result series is index-aligned with the
/// tick slice it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    /// Volume denominated in the base asset. Optional in most feeds.
    #[serde(default)]
    pub base_volume: Decimal,
}

impl Tick {
    /// Basic OHLC sanity check: high is the top of the range, low the bottom.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}

/// Which price field of a tick an indicator reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    Open,
    High,
    Low,
    #[default]
    Close,
    /// (high + low + close) / 3.
    Typical,
}

impl PriceField {
    pub fn extract(&self, tick: &Tick) -> Decimal {
        match self {
            PriceField::Open => tick.open,
            PriceField::High => tick.high,
            PriceField::Low => tick.low,
            PriceField::Close => tick.close,
            PriceField::Typical => {
                crate::math::round((tick.high + tick.low + tick.close) / Decimal::from(3))
            }
        }
    }
}
