//! Bollinger Bands.
//!
//! Middle band: SMA of the selected price field.
//! Upper/lower: middle ± multiplier * population standard deviation over the
//! same window. Lookback: period - 1.

use rust_decimal::{Decimal, MathematicalOps};

use crate::domain::{IndicatorResult, PriceField, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::{validate_period, Indicator};

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: Decimal,
    price: PriceField,
    name: String,
}

impl Bollinger {
    pub fn new(period: usize, multiplier: Decimal, price: PriceField) -> Self {
        Self {
            period,
            multiplier,
            price,
            name: format!("bollinger_{period}"),
        }
    }
}

/// Population standard deviation of a window. `None` on any `None` element.
fn std_dev(window: &[Option<Decimal>]) -> Option<Decimal> {
    let mean = math::average(window)?;
    let mut sum_sq = Some(Decimal::ZERO);
    for value in window {
        let d = math::sub(*value, Some(mean));
        sum_sq = math::add(sum_sq, math::mul(d, d));
    }
    let variance = math::div(sum_sq, Some(Decimal::from(window.len() as u64)))?;
    variance.sqrt().map(math::round)
}

impl Indicator for Bollinger {
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
                if i + 1 < self.period {
                    return IndicatorResult::empty(tick.time);
                }
                let window = &prices[i + 1 - self.period..=i];
                let middle = math::average(window);
                let width = math::mul(std_dev(window), Some(self.multiplier));
                let upper = math::add(middle, width);
                let lower = math::sub(middle, width);
                IndicatorResult::with_bands(tick.time, middle, upper, lower)
            })
            .collect())
    }
}
