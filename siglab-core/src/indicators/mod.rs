//! Concrete indicator implementations.
//!
//! Every indicator is a pure function: tick history in, index-aligned result
//! series out. Two computation shapes recur: windowed aggregation (Sma, Ema,
//! Wma, Bollinger) and recursive/stateful smoothing (Atr, Rsi, Obv). The
//! first `lookback()` entries of every output are undefined (warm-up).

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod obv;
pub mod registry;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod wma;

pub use atr::Atr;
pub use bollinger::Bollinger;
pub use ema::Ema;
pub use obv::{Obv, TiePolicy};
pub use registry::{build_indicator, IndicatorConfig};
pub use roc::Roc;
pub use rsi::Rsi;
pub use sma::Sma;
pub use wma::Wma;

use crate::domain::{IndicatorResult, Tick};
use crate::error::IndicatorError;

/// Trait for indicators.
///
/// `compute` returns one [`IndicatorResult`] per input tick, in input order.
/// The first `lookback()` results carry an undefined primary value. No value
/// at bar t may depend on tick data from bar t+1 or later.
pub trait Indicator: Send + Sync {
    /// Parameterized identifier (e.g., "sma_20", "atr_14"). Used in error
    /// messages and result labeling.
    fn name(&self) -> &str;

    /// Number of bars consumed before the indicator produces defined output.
    fn lookback(&self) -> usize;

    /// Compute the indicator over the entire tick series.
    fn compute(&self, ticks: &[Tick]) -> Result<Vec<IndicatorResult>, IndicatorError>;
}

/// Shared precondition check for period-based indicators: non-empty history,
/// a positive period, and enough bars to seed the warm-up.
pub(crate) fn validate_period(
    name: &str,
    period: usize,
    ticks: &[Tick],
) -> Result<(), IndicatorError> {
    validate_ticks(name, ticks)?;
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod {
            indicator: name.to_string(),
            period,
        });
    }
    if period >= ticks.len() {
        return Err(IndicatorError::PeriodExceedsHistory {
            indicator: name.to_string(),
            period,
            size: ticks.len(),
        });
    }
    Ok(())
}

/// Precondition check for indicators without a period parameter.
pub(crate) fn validate_ticks(name: &str, ticks: &[Tick]) -> Result<(), IndicatorError> {
    if ticks.is_empty() {
        return Err(IndicatorError::EmptyTicks {
            indicator: name.to_string(),
        });
    }
    Ok(())
}

/// Create synthetic ticks from close prices for testing.
///
/// Generates plausible OHLCV: open = prev close (or close for the first
/// bar), high = max(open, close) + 1, low = min(open, close) - 1,
/// volume = 1000, one bar per hour.
#[cfg(test)]
pub fn make_ticks(closes: &[rust_decimal::Decimal]) -> Vec<Tick> {
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + Decimal::ONE;
            let low = open.min(close) - Decimal::ONE;
            Tick {
                time: base + Duration::hours(i as i64),
                open,
                high,
                low,
                close,
                volume: dec!(1000),
                base_volume: dec!(10),
            }
        })
        .collect()
}

/// Create ticks from explicit `(open, high, low, close)` tuples.
#[cfg(test)]
pub fn make_ohlc_ticks(data: &[(rust_decimal::Decimal, rust_decimal::Decimal, rust_decimal::Decimal, rust_decimal::Decimal)]) -> Vec<Tick> {
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    data.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| Tick {
            time: base + Duration::hours(i as i64),
            open,
            high,
            low,
            close,
            volume: dec!(1000),
            base_volume: dec!(10),
        })
        .collect()
}
