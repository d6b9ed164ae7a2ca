//! Relative Strength Index (RSI).
//!
//! Per-bar gains and losses from close-to-close changes (bar 0 contributes
//! zero change), each Wilder-smoothed with the same seed discipline as ATR.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss). A zero average loss makes
//! the division degenerate, so the value is undefined rather than clamped
//! to 100.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{IndicatorResult, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::atr::wilder_series;
use super::{validate_period, Indicator};

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(2)
    }

    fn compute(&self, ticks: &[Tick]) -> Result<Vec<IndicatorResult>, IndicatorError> {
        validate_period(&self.name, self.period, ticks)?;
        if self.period < 2 {
            return Err(IndicatorError::InvalidPeriod {
                indicator: self.name.clone(),
                period: self.period,
            });
        }

        let mut gains = vec![Some(Decimal::ZERO); ticks.len()];
        let mut losses = vec![Some(Decimal::ZERO); ticks.len()];
        for i in 1..ticks.len() {
            let change = math::sub(Some(ticks[i].close), Some(ticks[i - 1].close));
            match change {
                Some(c) if c > Decimal::ZERO => gains[i] = Some(c),
                Some(c) if c < Decimal::ZERO => losses[i] = Some(-c),
                _ => {}
            }
        }

        let avg_gains = wilder_series(&gains, self.period);
        let avg_losses = wilder_series(&losses, self.period);

        Ok(ticks
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let rs = math::div(avg_gains[i], avg_losses[i]);
                let value = math::sub(
                    Some(dec!(100)),
                    math::div(Some(dec!(100)), math::add(Some(Decimal::ONE), rs)),
                );
                IndicatorResult::value_only(tick.time, value)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_ticks;

    #[test]
    fn rsi_warm_up_prefix() {
        let ticks = make_ticks(&[
            dec!(10),
            dec!(11),
            dec!(10.5),
            dec!(11.5),
            dec!(11),
            dec!(12),
        ]);
        let rsi = Rsi::new(4);
        let result = rsi.compute(&ticks).unwrap();
        // First defined value at index period-2 = 2.
        assert_eq!(result[0].value, None);
        assert_eq!(result[1].value, None);
        assert!(result[2].value.is_some());
    }

    #[test]
    fn rsi_known_values() {
        // Changes: [0, +1, -1, 0]; period 3.
        // Seed (index 1): avg_gain = mean(0, 1) = 0.5, avg_loss = mean(0, 0) = 0
        //   → degenerate division → None.
        // Index 2: avg_gain = (0.5*2 + 0)/3, avg_loss = (0*2 + 1)/3 — equal,
        //   so RS = 1 and RSI = 50. Index 3 smooths both sides equally: 50 again.
        let ticks = make_ticks(&[dec!(10), dec!(11), dec!(10), dec!(10)]);
        let rsi = Rsi::new(3);
        let result = rsi.compute(&ticks).unwrap();

        assert_eq!(result[1].value, None);
        assert_eq!(result[2].value, Some(dec!(50)));
        assert_eq!(result[3].value, Some(dec!(50)));
    }

    #[test]
    fn rsi_all_gains_is_undefined_not_hundred() {
        // Monotonic rise: average loss stays zero, RS division degenerates.
        let ticks = make_ticks(&[dec!(10), dec!(11), dec!(12), dec!(13), dec!(14)]);
        let rsi = Rsi::new(3);
        let result = rsi.compute(&ticks).unwrap();
        for r in &result {
            assert_eq!(r.value, None);
        }
    }

    #[test]
    fn rsi_bounded_between_0_and_100() {
        let ticks = make_ticks(&[
            dec!(44),
            dec!(44.34),
            dec!(44.09),
            dec!(44.15),
            dec!(43.61),
            dec!(44.33),
            dec!(44.83),
            dec!(45.10),
            dec!(45.42),
            dec!(45.84),
        ]);
        let rsi = Rsi::new(5);
        let result = rsi.compute(&ticks).unwrap();
        for r in result.iter().filter_map(|r| r.value) {
            assert!(r >= dec!(0) && r <= dec!(100), "rsi out of bounds: {r}");
        }
    }

    #[test]
    fn rsi_rejects_period_one() {
        let ticks = make_ticks(&[dec!(1), dec!(2), dec!(3)]);
        assert!(matches!(
            Rsi::new(1).compute(&ticks),
            Err(IndicatorError::InvalidPeriod { .. })
        ));
    }
}
