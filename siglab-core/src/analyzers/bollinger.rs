//! Bollinger analyzer: which bands the bar's range contained.
//!
//! Each of the three bands is evaluated independently against the bar's
//! low..high range; a single bar may cross several bands at once (common
//! near the middle band in ranging markets).

use crate::domain::{AnalyzerResult, IndicatorResult, Tick, Verdict};
use crate::error::IndicatorError;

use super::detect::band_crossed;
use super::{validate_alignment, Analyzer};

#[derive(Debug, Clone)]
pub struct BollingerAnalyzer {
    name: String,
}

impl BollingerAnalyzer {
    pub fn new() -> Self {
        Self {
            name: "bollinger_analyzer".to_string(),
        }
    }
}

impl Default for BollingerAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for BollingerAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(
        &self,
        ticks: &[Tick],
        results: &[IndicatorResult],
    ) -> Result<Vec<AnalyzerResult>, IndicatorError> {
        validate_alignment(&self.name, ticks, results)?;

        Ok(ticks
            .iter()
            .zip(results)
            .map(|(tick, result)| {
                let verdict = Verdict::BandCross {
                    upper: band_crossed(tick.low, tick.high, result.upper_band),
                    middle: band_crossed(tick.low, tick.high, result.middle_band),
                    lower: band_crossed(tick.low, tick.high, result.lower_band),
                };
                AnalyzerResult::new(tick.time, verdict)
            })
            .collect())
    }
}
