//! Errors that can occur while validating a computation request.
//!
//! All validation is synchronous and runs before any computation begins: a
//! violated precondition fails the whole call, there is no per-bar skip or
//! retry. Every variant carries the indicator/analyzer identifier and the
//! offending value(s) so a misconfigured request is diagnosable from the
//! message alone.

/// Invalid-configuration error for indicator and analyzer calls.
#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    #[error("Tick data should not be empty {{indicator: {indicator}}}")]
    EmptyTicks { indicator: String },

    #[error("Period should be greater than zero {{indicator: {indicator}, period: {period}}}")]
    InvalidPeriod { indicator: String, period: usize },

    #[error(
        "Period should be less than tick data size {{indicator: {indicator}, period: {period}, size: {size}}}"
    )]
    PeriodExceedsHistory {
        indicator: String,
        period: usize,
        size: usize,
    },

    #[error("Required parameter is missing {{indicator: {indicator}, parameter: {parameter}}}")]
    MissingParameter {
        indicator: String,
        parameter: &'static str,
    },

    #[error(
        "Indicator results should be aligned with tick data {{analyzer: {analyzer}, ticks: {ticks}, results: {results}}}"
    )]
    LengthMismatch {
        analyzer: String,
        ticks: usize,
        results: usize,
    },
}
