//! Property tests for core invariants.
//!
//! Uses proptest to verify:
//! 1. Length/alignment — every valid computation yields one result per tick
//! 2. Warm-up — the undefined prefix is contiguous and period-determined
//! 3. Merge symmetry — the vote-set rule ignores argument order
//! 4. Idempotence — detectors and indicators are pure (re-run == first run)
//! 5. Rounding determinism — repeated decimal computation is byte-identical

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use siglab_core::analyzers::detect::threshold_cross;
use siglab_core::analyzers::merge::{merge2, merge3};
use siglab_core::domain::{PriceField, Signal, Tick};
use siglab_core::indicators::{Atr, Indicator, Sma};

// ── Strategies (proptest) ────────────────────────────────────────────

/// Prices as integer cents, so every Decimal is exact.
fn arb_closes() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(100_i64..100_000, 3..60)
        .prop_map(|cents| cents.into_iter().map(|c| Decimal::new(c, 2)).collect())
}

fn arb_signal_slot() -> impl Strategy<Value = Option<Signal>> {
    prop_oneof![
        Just(Some(Signal::Buy)),
        Just(Some(Signal::Sell)),
        Just(Some(Signal::Neutral)),
        Just(None),
    ]
}

fn make_ticks(closes: &[Decimal]) -> Vec<Tick> {
    let base = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Tick {
                time: base + Duration::hours(i as i64),
                open,
                high: open.max(close) + Decimal::ONE,
                low: open.min(close) - Decimal::ONE,
                close,
                volume: dec!(1000),
                base_volume: dec!(10),
            }
        })
        .collect()
}

// ── 1. Length / alignment ────────────────────────────────────────────

proptest! {
    #[test]
    fn sma_output_aligns_with_ticks(closes in arb_closes(), period in 1_usize..10) {
        prop_assume!(period < closes.len());
        let ticks = make_ticks(&closes);
        let result = Sma::new(period, PriceField::Close).compute(&ticks).unwrap();

        prop_assert_eq!(result.len(), ticks.len());
        for (r, t) in result.iter().zip(&ticks) {
            prop_assert_eq!(r.time, t.time);
        }
    }

    // ── 2. Warm-up invariants ────────────────────────────────────────

    /// SMA: undefined for i < period-1, defined everywhere after.
    #[test]
    fn sma_warm_up_prefix_is_contiguous(closes in arb_closes(), period in 1_usize..10) {
        prop_assume!(period < closes.len());
        let ticks = make_ticks(&closes);
        let result = Sma::new(period, PriceField::Close).compute(&ticks).unwrap();

        for (i, r) in result.iter().enumerate() {
            prop_assert_eq!(r.value.is_some(), i + 1 >= period, "index {}", i);
        }
    }

    /// ATR: undefined for i < period-2, defined everywhere after (prices
    /// are fully defined, so nothing degenerates mid-series).
    #[test]
    fn atr_warm_up_prefix_is_contiguous(closes in arb_closes(), period in 2_usize..10) {
        prop_assume!(period < closes.len());
        let ticks = make_ticks(&closes);
        let result = Atr::new(period).compute(&ticks).unwrap();

        for (i, r) in result.iter().enumerate() {
            prop_assert_eq!(r.value.is_some(), i + 2 >= period, "index {}", i);
        }
    }

    // ── 3. Merge symmetry ────────────────────────────────────────────

    #[test]
    fn merge2_is_symmetric(a in arb_signal_slot(), b in arb_signal_slot()) {
        prop_assert_eq!(merge2(a, b), merge2(b, a));
    }

    #[test]
    fn merge3_ignores_argument_order(
        a in arb_signal_slot(),
        b in arb_signal_slot(),
        c in arb_signal_slot(),
    ) {
        let expected = merge3(a, b, c);
        prop_assert_eq!(merge3(a, c, b), expected);
        prop_assert_eq!(merge3(b, a, c), expected);
        prop_assert_eq!(merge3(c, b, a), expected);
    }

    /// None and Neutral are interchangeable non-votes.
    #[test]
    fn merge_treats_none_as_neutral(a in arb_signal_slot()) {
        prop_assert_eq!(merge2(None, a), merge2(Some(Signal::Neutral), a));
    }

    // ── 4. Idempotence ───────────────────────────────────────────────

    #[test]
    fn threshold_cross_rerun_is_identical(closes in arb_closes()) {
        let series: Vec<Option<Decimal>> = closes.iter().map(|&c| Some(c)).collect();
        let threshold = dec!(500);
        prop_assert_eq!(
            threshold_cross(&series, threshold),
            threshold_cross(&series, threshold)
        );
    }

    // ── 5. Rounding determinism ──────────────────────────────────────

    /// The same indicator on the same input produces byte-identical decimal
    /// output: no platform-dependent floating rounding anywhere.
    #[test]
    fn atr_recompute_is_byte_identical(closes in arb_closes(), period in 2_usize..10) {
        prop_assume!(period < closes.len());
        let ticks = make_ticks(&closes);
        let atr = Atr::new(period);
        let first = atr.compute(&ticks).unwrap();
        let second = atr.compute(&ticks).unwrap();

        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(
                a.value.map(|v| v.to_string()),
                b.value.map(|v| v.to_string())
            );
        }
    }
}
