//! Rate of Change (ROC).
//!
//! Percentage change of the selected price field against the value `period`
//! bars earlier: 100 * (price[i] - price[i-period]) / price[i-period].
//! A zero reference price makes the value undefined. Lookback: period.

use rust_decimal_macros::dec;

use crate::domain::{IndicatorResult, PriceField, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::{validate_period, Indicator};

#[derive(Debug, Clone)]
pub struct Roc {
    period: usize,
    price: PriceField,
    name: String,
}

impl Roc {
    pub fn new(period: usize, price: PriceField) -> Self {
        Self {
            period,
            price,
            name: format!("roc_{period}"),
        }
    }
}

impl Indicator for Roc {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, ticks: &[Tick]) -> Result<Vec<IndicatorResult>, IndicatorError> {
        validate_period(&self.name, self.period, ticks)?;

        Ok(ticks
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let value = if i < self.period {
                    None
                } else {
                    let current = Some(self.price.extract(tick));
                    let reference = Some(self.price.extract(&ticks[i - self.period]));
                    math::mul(
                        math::div(math::sub(current, reference), reference),
                        Some(dec!(100)),
                    )
                };
                IndicatorResult::value_only(tick.time, value)
            })
            .collect())
    }
}
