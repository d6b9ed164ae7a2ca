//! ROC analyzer: zero-line cross confirmed by divergence.
//!
//! The zero-line cross is the confirmed signal (Strong); divergence against
//! price contributes a leading opinion at Weak strength. The two partial
//! signals merge per bar into one strength-tagged verdict.

use rust_decimal::Decimal;

use crate::domain::{value_series, AnalyzerResult, IndicatorResult, Strength, Tick, Verdict};
use crate::error::IndicatorError;

use super::detect::{divergence, threshold_cross};
use super::merge::merge_strength;
use super::{validate_alignment, Analyzer};

#[derive(Debug, Clone)]
pub struct RocAnalyzer {
    lookback: usize,
    name: String,
}

impl RocAnalyzer {
    pub fn new(lookback: usize) -> Self {
        Self {
            lookback,
            name: "roc_analyzer".to_string(),
        }
    }
}

impl Analyzer for RocAnalyzer {
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
        let crosses = threshold_cross(&series, Decimal::ZERO);
        let divergences = divergence(ticks, &series, self.lookback);

        Ok(ticks
            .iter()
            .enumerate()
            .map(|(i, tick)| {
                let merged = merge_strength(&[
                    (Some(crosses[i]), Strength::Strong),
                    (Some(divergences[i]), Strength::Weak),
                ]);
                AnalyzerResult::new(tick.time, Verdict::SignalStrength { signal: merged })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Signal, SignalStrength};
    use crate::indicators::make_ticks;
    use rust_decimal_macros::dec;

    fn results_from(ticks: &[Tick], values: &[Option<Decimal>]) -> Vec<IndicatorResult> {
        ticks
            .iter()
            .zip(values)
            .map(|(t, &v)| IndicatorResult::value_only(t.time, v))
            .collect()
    }

    #[test]
    fn zero_cross_up_is_strong_buy() {
        let ticks = make_ticks(&[dec!(10), dec!(11), dec!(12)]);
        let results = results_from(&ticks, &[Some(dec!(-1)), Some(dec!(-2)), Some(dec!(3))]);
        let out = RocAnalyzer::new(5).analyze(&ticks, &results).unwrap();

        assert_eq!(
            out[2].verdict,
            Verdict::SignalStrength {
                signal: SignalStrength::new(Signal::Buy, Strength::Strong)
            }
        );
    }

    #[test]
    fn no_cross_no_divergence_is_neutral_undefined() {
        let ticks = make_ticks(&[dec!(10), dec!(11)]);
        let results = results_from(&ticks, &[Some(dec!(1)), Some(dec!(2))]);
        let out = RocAnalyzer::new(5).analyze(&ticks, &results).unwrap();

        assert_eq!(
            out[1].verdict,
            Verdict::SignalStrength {
                signal: SignalStrength::neutral()
            }
        );
    }

    #[test]
    fn output_aligned_with_ticks() {
        let ticks = make_ticks(&[dec!(10), dec!(11), dec!(12), dec!(13)]);
        let results = results_from(&ticks, &[None, None, Some(dec!(1)), Some(dec!(2))]);
        let out = RocAnalyzer::new(2).analyze(&ticks, &results).unwrap();
        assert_eq!(out.len(), ticks.len());
        for (r, t) in out.iter().zip(&ticks) {
            assert_eq!(r.time, t.time);
        }
    }

    #[test]
    fn rejects_misaligned_results() {
        let ticks = make_ticks(&[dec!(10), dec!(11)]);
        let results = results_from(&ticks[..1], &[Some(dec!(1))]);
        assert!(matches!(
            RocAnalyzer::new(5).analyze(&ticks, &results),
            Err(IndicatorError::LengthMismatch { .. })
        ));
    }
}
