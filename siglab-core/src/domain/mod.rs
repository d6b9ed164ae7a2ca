//! Domain types: ticks, signals, per-bar result tuples.

pub mod result;
pub mod signal;
pub mod tick;

pub use result::{value_series, AnalyzerResult, IndicatorResult, Verdict};
pub use signal::{Signal, SignalStrength, Strength};
pub use tick::{PriceField, Tick};
