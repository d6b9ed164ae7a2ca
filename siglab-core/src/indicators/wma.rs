//! Weighted Moving Average (WMA).
//!
//! Linearly weighted mean: the newest price in the window carries weight
//! `period`, the oldest weight 1. Lookback: period - 1.

use rust_decimal::Decimal;

use crate::domain::{IndicatorResult, PriceField, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::{validate_period, Indicator};

#[derive(Debug, Clone)]
pub struct Wma {
    period: usize,
    price: PriceField,
    name: String,
}

impl Wma {
    pub fn new(period: usize, price: PriceField) -> Self {
        Self {
            period,
            price,
            name: format!("wma_{period}"),
        }
    }

    fn window_value(&self, window: &[Option<Decimal>]) -> Option<Decimal> {
        let mut weighted = Some(Decimal::ZERO);
        for (offset, value) in window.iter().enumerate() {
            let weight = Decimal::from(offset as u64 + 1);
            weighted = math::add(weighted, math::mul(*value, Some(weight)));
        }
        let denominator = Decimal::from((self.period * (self.period + 1) / 2) as u64);
        math::div(weighted, Some(denominator))
    }
}

impl Indicator for Wma {
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

        Ok(ticks
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let value = if i + 1 < self.period {
                    None
                } else {
                    self.window_value(&prices[i + 1 - self.period..=i])
                };
                IndicatorResult::value_only(tick.time, value)
            })
            .collect())
    }
}
