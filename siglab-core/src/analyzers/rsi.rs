//! RSI analyzer: oversold/overbought threshold crossings.
//!
//! Buy when the oscillator climbs up through the oversold level; sell when
//! it falls down through the overbought level. The opposite edge of each
//! threshold is discarded before merging, so re-entering the oversold zone
//! never emits a sell.

use rust_decimal::Decimal;

use crate::domain::{value_series, AnalyzerResult, IndicatorResult, Signal, Tick, Verdict};
use crate::error::IndicatorError;

use super::detect::threshold_cross;
use super::merge::merge2;
use super::{validate_alignment, Analyzer};

#[derive(Debug, Clone)]
pub struct RsiAnalyzer {
    oversold: Decimal,
    overbought: Decimal,
    name: String,
}

impl RsiAnalyzer {
    pub fn new(oversold: Decimal, overbought: Decimal) -> Self {
        Self {
            oversold,
            overbought,
            name: "rsi_analyzer".to_string(),
        }
    }
}

fn keep(signal: Signal, wanted: Signal) -> Signal {
    if signal == wanted {
        signal
    } else {
        Signal::Neutral
    }
}

impl Analyzer for RsiAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(
        &self,
        ticks: &[Tick],
        results: &[IndicatorResult],
    ) -> Result<Vec<AnalyzerResult>, IndicatorError> {
        validate_alignment(&self.name, ticks, results)?;

        let series = value_series(results);
        let oversold_crosses = threshold_cross(&series, self.oversold);
        let overbought_crosses = threshold_cross(&series, self.overbought);

        Ok(ticks
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let buy = keep(oversold_crosses[i], Signal::Buy);
                let sell = keep(overbought_crosses[i], Signal::Sell);
                let merged = merge2(Some(buy), Some(sell));
                AnalyzerResult::new(tick.time, Verdict::Signal { signal: merged })
            })
            .collect())
    }
}
