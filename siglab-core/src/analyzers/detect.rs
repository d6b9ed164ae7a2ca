//! Generic, indicator-agnostic signal detectors.
//!
//! Each detector turns one or two numeric series into a per-bar [`Signal`]
//! or boolean. Bar 0 and any bar adjacent to an undefined value never fire:
//! warm-up boundaries degrade to `Neutral`, not errors.

use rust_decimal::Decimal;

use crate::domain::{Signal, Tick};
use crate::math;

/// Static-threshold line cross (the "zero-line cross" primitive).
///
/// For each bar i >= 1 with both neighbours defined:
/// below → at-or-above the threshold fires `Buy`,
/// above → at-or-below fires `Sell`. Everything else is `Neutral`.
pub fn threshold_cross(series: &[Option<Decimal>], threshold: Decimal) -> Vec<Signal> {
    let mut signals = vec![Signal::Neutral; series.len()];
    for i in 1..series.len() {
        let (Some(prev), Some(cur)) = (series[i - 1], series[i]) else {
            continue;
        };
        if prev < threshold && cur >= threshold {
            signals[i] = Signal::Buy;
        } else if prev > threshold && cur <= threshold {
            signals[i] = Signal::Sell;
        }
    }
    signals
}

/// Dynamic two-line cross: sign change of `a - b` between consecutive bars.
///
/// Crossing upward (negative → non-negative) fires `Buy`, crossing downward
/// (positive → non-positive) fires `Sell`. Either operand undefined on
/// either bar → `Neutral`.
pub fn line_cross(a: &[Option<Decimal>], b: &[Option<Decimal>]) -> Vec<Signal> {
    let diff: Vec<Option<Decimal>> = a
        .iter()
        .enumerate()
        .map(|(i, &av)| math::sub(av, b.get(i).copied().flatten()))
        .collect();
    threshold_cross(&diff, Decimal::ZERO)
}

/// Band cross: true when the band level lies within the bar's trading range.
///
/// An undefined band level yields `false`, never an error.
pub fn band_crossed(low: Decimal, high: Decimal, band: Option<Decimal>) -> bool {
    match band {
        Some(level) => low <= level && level <= high,
        None => false,
    }
}

/// Divergence between price extrema and indicator extrema.
///
/// At bar i (i >= lookback) the trailing window is `[i-lookback, i-1]`.
/// Bearish: the bar makes a strict new high while the indicator stays
/// strictly below its window high → `Sell`. Bullish: strict new low while
/// the indicator stays strictly above its window low → `Buy`. Equality is
/// never a divergence; any undefined indicator value in the window or at i,
/// or both directions qualifying at once, yields `Neutral`.
pub fn divergence(ticks: &[Tick], series: &[Option<Decimal>], lookback: usize) -> Vec<Signal> {
    let n = ticks.len().min(series.len());
    let mut signals = vec![Signal::Neutral; ticks.len()];
    if lookback == 0 {
        return signals;
    }

    for i in lookback..n {
        let Some(current) = series[i] else {
            continue;
        };
        let window = &series[i - lookback..i];
        let (Some(ind_high), Some(ind_low)) = (math::max(window), math::min(window)) else {
            continue;
        };

        let window_ticks = &ticks[i - lookback..i];
        let (Some(price_high), Some(price_low)) = (
            window_ticks.iter().map(|t| t.high).max(),
            window_ticks.iter().map(|t| t.low).min(),
        ) else {
            continue;
        };

        let bearish = ticks[i].high > price_high && current < ind_high;
        let bullish = ticks[i].low < price_low && current > ind_low;
        signals[i] = match (bearish, bullish) {
            (true, false) => Signal::Sell,
            (false, true) => Signal::Buy,
            _ => Signal::Neutral,
        };
    }
    signals
}
