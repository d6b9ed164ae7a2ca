//! Simple Moving Average (SMA).
//!
//! Rolling mean of the selected price field over a fixed window.
//! Lookback: period - 1 (first defined value at index period-1).

use crate::domain::{IndicatorResult, PriceField, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::{validate_period, Indicator};

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    price: PriceField,
    name: String,
}

impl Sma {
    pub fn new(period: usize, price: PriceField) -> Self {
        Self {
            period,
            price,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
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

        let results = ticks
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let value = if i + 1 < self.period {
                    None
                } else {
                    math::average(&prices[i + 1 - self.period..=i])
                };
                IndicatorResult::value_only(tick.time, value)
            })
            .collect();
        Ok(results)
    }
}
