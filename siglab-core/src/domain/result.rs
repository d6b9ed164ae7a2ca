//! Per-bar result tuples emitted by indicators and analyzers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::signal::{Signal, SignalStrength};

/// One bar of indicator output: the primary line plus whatever secondary
/// lines the indicator produces (signal line, bands).
///
/// `None` means "not yet computable" (warm-up) or "undefined due to a
/// degenerate division". Serializes with `null` for undefined fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub time: DateTime<Utc>,
    pub value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_line: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_band: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_band: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_band: Option<Decimal>,
}

impl IndicatorResult {
    /// A result carrying only the primary value (possibly undefined).
    pub fn value_only(time: DateTime<Utc>, value: Option<Decimal>) -> Self {
        Self {
            time,
            value,
            signal_line: None,
            upper_band: None,
            middle_band: None,
            lower_band: None,
        }
    }

    /// A warm-up result: everything undefined.
    pub fn empty(time: DateTime<Utc>) -> Self {
        Self::value_only(time, None)
    }

    /// A result carrying three bands. The primary value mirrors the middle band.
    pub fn with_bands(
        time: DateTime<Utc>,
        middle: Option<Decimal>,
        upper: Option<Decimal>,
        lower: Option<Decimal>,
    ) -> Self {
        Self {
            time,
            value: middle,
            signal_line: None,
            upper_band: upper,
            middle_band: middle,
            lower_band: lower,
        }
    }
}

/// Extract the primary value series from indicator results, index-aligned.
pub fn value_series(results: &[IndicatorResult]) -> Vec<Option<Decimal>> {
    results.iter().map(|r| r.value).collect()
}

/// Per-bar analyzer verdict. The shape depends on the analyzer family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Plain directional signal.
    Signal { signal: Signal },
    /// Directional signal with qualitative strength.
    SignalStrength { signal: SignalStrength },
    /// Which bands the bar's trading range contained.
    BandCross {
        upper: bool,
        middle: bool,
        lower: bool,
    },
}

/// One bar of analyzer output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerResult {
    pub time: DateTime<Utc>,
    pub verdict: Verdict,
}

impl AnalyzerResult {
    pub fn new(time: DateTime<Utc>, verdict: Verdict) -> Self {
        Self { time, verdict }
    }
}
