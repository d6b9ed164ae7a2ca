//! Siglab Core — tick domain types, decimal math, indicators, analyzers.
//!
//! This crate is the computational heart of the signal service:
//! - Domain types (ticks, signals, per-bar result tuples)
//! - Null-propagating fixed-scale decimal arithmetic
//! - Indicator engine (windowed aggregation and recursive smoothing)
//! - Generic signal detectors (threshold cross, two-line cross, band cross,
//!   divergence) and the signal merger
//! - Analyzer orchestration with typed, data-driven configuration
//!
//! Everything is a pure, synchronous function of its inputs: no I/O, no
//! shared state, no persistence. Separate invocations may run on separate
//! threads with zero coordination.

pub mod analyzers;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod math;

pub use error::IndicatorError;
