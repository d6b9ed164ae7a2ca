//! SMA-cross analyzer: price crossing its moving average.
//!
//! Two-line cross of the close price against the indicator's primary line.
//! Price closing up through the average fires Buy, down through fires Sell.

use crate::domain::{value_series, AnalyzerResult, IndicatorResult, Tick, Verdict};
use crate::error::IndicatorError;

use super::detect::line_cross;
use super::{validate_alignment, Analyzer};

#[derive(Debug, Clone)]
pub struct SmaCrossAnalyzer {
    name: String,
}

impl SmaCrossAnalyzer {
    pub fn new() -> Self {
        Self {
            name: "sma_cross_analyzer".to_string(),
        }
    }
}

impl Default for SmaCrossAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SmaCrossAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(
        &self,
        ticks: &[Tick],
        results: &[IndicatorResult],
    ) -> Result<Vec<AnalyzerResult>, IndicatorError> {
        validate_alignment(&self.name, ticks, results)?;

        let closes: Vec<_> = ticks.iter().map(|t| Some(t.close)).collect();
        let averages = value_series(results);
        let crosses = line_cross(&closes, &averages);

        Ok(ticks
            .iter()
            .zip(crosses)
            .map(|(tick, signal)| AnalyzerResult::new(tick.time, Verdict::Signal { signal }))
            .collect())
    }
}
