//! OBV analyzer: volume/price divergence.
//!
//! OBV is a leading indicator; its only detector here is divergence against
//! price extrema over a trailing window.

use crate::domain::{value_series, AnalyzerResult, IndicatorResult, Tick, Verdict};
use crate::error::IndicatorError;

use super::detect::divergence;
use super::{validate_alignment, Analyzer};

#[derive(Debug, Clone)]
pub struct ObvAnalyzer {
    lookback: usize,
    name: String,
}

impl ObvAnalyzer {
    pub fn new(lookback: usize) -> Self {
        Self {
            lookback,
            name: "obv_analyzer".to_string(),
        }
    }
}

impl Analyzer for ObvAnalyzer {
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
        let signals = divergence(ticks, &series, self.lookback);

        Ok(ticks
            .iter()
            .zip(signals)
            .map(|(tick, signal)| AnalyzerResult::new(tick.time, Verdict::Signal { signal }))
            .collect())
    }
}
