//! On-Balance Volume (OBV).
//!
//! Cumulative volume-sign indicator: seeds from bar 0's volume, then adds
//! the bar's volume on a close rise, subtracts it on a fall, and applies the
//! configured tie policy when the close is unchanged. No warm-up: every bar
//! has a defined value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::{IndicatorResult, Tick};
use crate::error::IndicatorError;
use crate::math;

use super::{validate_ticks, Indicator};

/// What to do when close[i] == close[i-1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Carry the running value unchanged.
    #[default]
    Hold,
    /// Decrement the running value by one unit.
    DecrementOne,
}

#[derive(Debug, Clone)]
pub struct Obv {
    tie: TiePolicy,
    name: String,
}

impl Obv {
    pub fn new(tie: TiePolicy) -> Self {
        Self {
            tie,
            name: "obv".to_string(),
        }
    }
}

impl Default for Obv {
    fn default() -> Self {
        Self::new(TiePolicy::default())
    }
}

impl Indicator for Obv {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, ticks: &[Tick]) -> Result<Vec<IndicatorResult>, IndicatorError> {
        validate_ticks(&self.name, ticks)?;

        let mut results = Vec::with_capacity(ticks.len());
        let mut running = Some(ticks[0].volume);
        results.push(IndicatorResult::value_only(ticks[0].time, running));

        for i in 1..ticks.len() {
            let tick = &ticks[i];
            running = match tick.close.cmp(&ticks[i - 1].close) {
                Ordering::Greater => math::add(running, Some(tick.volume)),
                Ordering::Less => math::sub(running, Some(tick.volume)),
                Ordering::Equal => match self.tie {
                    TiePolicy::Hold => running,
                    TiePolicy::DecrementOne => math::sub(running, Some(Decimal::ONE)),
                },
            };
            results.push(IndicatorResult::value_only(tick.time, running));
        }
        Ok(results)
    }
}
