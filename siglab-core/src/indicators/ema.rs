//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = EMA[t-1] + alpha * (price[t] - EMA[t-1]),
//! alpha = 2 / (period + 1). Seed: SMA of the first `period` prices.
//! Lookback: period - 1.

use rust_decimal::Decimal;

use crate::domain::{IndicatorResult, PriceField, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::{validate_period, Indicator};

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    price: PriceField,
    name: String,
}

impl Ema {
    pub fn new(period: usize, price: PriceField) -> Self {
        Self {
            period,
            price,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, ticks: &[Tick]) -> Result<Vec<IndicatorResult>, IndicatorError> {
        validate_period(&self.name, self.period, ticks)?;

        let prices: Vec<_> = ticks
            .iter()
            .map(|t| Some(self.price.extract(t)))
            .collect();
        let values = ema_series(&prices, self.period);

        Ok(ticks
            .iter()
            .zip(values)
            .map(|(tick, value)| IndicatorResult::value_only(tick.time, value))
            .collect())
    }
}

/// EMA over an already-extracted series. Used by composed indicators that
/// need the smoothing applied to something other than a raw price field.
pub fn ema_series(values: &[Option<Decimal>], period: usize) -> Vec<Option<Decimal>> {
    let n = values.len();
    let mut result = vec![None; n];
    if period == 0 || n < period {
        return result;
    }

    let alpha = math::div(
        Some(Decimal::TWO),
        Some(Decimal::from(period as u64 + 1)),
    );

    let mut prev = math::average(&values[..period]);
    result[period - 1] = prev;

    for i in period..n {
        // prev + alpha * (value - prev); None propagates from any operand.
        let delta = math::mul(alpha, math::sub(values[i], prev));
        prev = math::add(prev, delta);
        result[i] = prev;
    }
    result
}
