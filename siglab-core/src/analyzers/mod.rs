//! Analyzers: detectors plus merge, orchestrated per indicator family.
//!
//! An analyzer extracts the relevant series from an indicator's results,
//! runs one or more detectors over it, merges their partial signals, and
//! assembles one [`AnalyzerResult`] per bar. Data flows one way:
//! ticks → indicator results → detectors → merge → analyzer results.

pub mod bollinger;
pub mod detect;
pub mod merge;
pub mod obv;
pub mod registry;
pub mod roc;
pub mod rsi;
pub mod sma_cross;

pub use bollinger::BollingerAnalyzer;
pub use obv::ObvAnalyzer;
pub use registry::{build_analyzer, evaluate, indicator_for, AnalyzerConfig};
pub use roc::RocAnalyzer;
pub use rsi::RsiAnalyzer;
pub use sma_cross::SmaCrossAnalyzer;

use crate::domain::{AnalyzerResult, IndicatorResult, Tick};
use crate::error::IndicatorError;

/// Trait for analyzers.
///
/// `analyze` consumes the tick series and the paired indicator's results
/// (index-aligned, one per tick) and returns one verdict per bar.
pub trait Analyzer: Send + Sync + std::fmt::Debug {
    /// Identifier used in error messages and output labeling.
    fn name(&self) -> &str;

    fn analyze(
        &self,
        ticks: &[Tick],
        results: &[IndicatorResult],
    ) -> Result<Vec<AnalyzerResult>, IndicatorError>;
}

/// Shared precondition check: non-empty ticks, results aligned one-per-tick.
pub(crate) fn validate_alignment(
    name: &str,
    ticks: &[Tick],
    results: &[IndicatorResult],
) -> Result<(), IndicatorError> {
    if ticks.is_empty() {
        return Err(IndicatorError::EmptyTicks {
            indicator: name.to_string(),
        });
    }
    if ticks.len() != results.len() {
        return Err(IndicatorError::LengthMismatch {
            analyzer: name.to_string(),
            ticks: ticks.len(),
            results: results.len(),
        });
    }
    Ok(())
}
