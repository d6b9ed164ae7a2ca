//! Average True Range (ATR).
//!
//! True range: max(high - low, |high - prev close|, |low - prev close|),
//! with TR[0] = high[0] - low[0] (no previous close). The average uses
//! Wilder smoothing: seed = plain mean of the first period-1 raw increments
//! (landing at index period-2), then
//! V[i] = (V[i-1] * (period-1) + TR[i]) / period.

use rust_decimal::Decimal;

use crate::domain::{IndicatorResult, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::{validate_period, Indicator};

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    name: String,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("atr_{period}"),
        }
    }
}

/// Compute the true range series from ticks, index-aligned.
pub fn true_range(ticks: &[Tick]) -> Vec<Option<Decimal>> {
    ticks
        .iter()
        .enumerate()
        .map(|(i, tick)| {
            let range = math::sub(Some(tick.high), Some(tick.low));
            if i == 0 {
                return range;
            }
            let prev_close = Some(ticks[i - 1].close);
            let high_gap = math::sub(Some(tick.high), prev_close).map(|d| d.abs());
            let low_gap = math::sub(Some(tick.low), prev_close).map(|d| d.abs());
            math::max(&[range, high_gap, low_gap])
        })
        .collect()
}

/// Apply Wilder smoothing to a raw increment series.
///
/// The seed is the plain mean of `increments[0..period-1]` and sits at index
/// period-2; from index period-1 on,
/// V[i] = (V[i-1] * (period-1) + increments[i]) / period.
/// Any `None` increment, or a `None` running value, propagates forward.
pub fn wilder_series(increments: &[Option<Decimal>], period: usize) -> Vec<Option<Decimal>> {
    let n = increments.len();
    let mut result = vec![None; n];
    if period < 2 || n < period {
        return result;
    }

    let seed_index = period - 2;
    let mut prev = math::average(&increments[..period - 1]);
    result[seed_index] = prev;

    let weight = Some(Decimal::from(period as u64 - 1));
    let divisor = Some(Decimal::from(period as u64));
    for i in seed_index + 1..n {
        prev = math::div(
            math::add(math::mul(prev, weight), increments[i]),
            divisor,
        );
        result[i] = prev;
    }
    result
}

impl Indicator for Atr {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(2)
    }

    fn compute(&self, ticks: &[Tick]) -> Result<Vec<IndicatorResult>, IndicatorError> {
        validate_period(&self.name, self.period, ticks)?;
        // Wilder smoothing averages period-1 increments for its seed; a
        // period of 1 leaves nothing to seed from.
        if self.period < 2 {
            return Err(IndicatorError::InvalidPeriod {
                indicator: self.name.clone(),
                period: self.period,
            });
        }

        let tr = true_range(ticks);
        let values = wilder_series(&tr, self.period);

        Ok(ticks
            .iter()
            .zip(values)
            .map(|(tick, value)| IndicatorResult::value_only(tick.time, value))
            .collect())
    }
}
