//! Null-propagating fixed-scale decimal arithmetic.
//!
//! Every indicator computation goes through these helpers. The contract:
//! any `None` operand makes the result `None` (never a panic), a zero
//! denominator makes the result `None`, and every produced value is rounded
//! to [`SCALE`] fractional digits half-up, so repeated computation is
//! bit-reproducible across runs and platforms.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits every surfaced value is rounded to.
pub const SCALE: u32 = 10;

/// Round to [`SCALE`] digits, half-up.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `a + b`, absorbing `None` and overflow.
pub fn add(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    a?.checked_add(b?).map(round)
}

/// `a - b`, absorbing `None` and overflow.
pub fn sub(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    a?.checked_sub(b?).map(round)
}

/// `a * b`, absorbing `None` and overflow.
pub fn mul(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    a?.checked_mul(b?).map(round)
}

/// `a / b`. A zero denominator yields `None`, never an error.
pub fn div(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
    a?.checked_div(b?).map(round)
}

/// Mean of a window. `None` if the window is empty or contains any `None` —
/// warm-up propagates conservatively through aggregates.
pub fn average(window: &[Option<Decimal>]) -> Option<Decimal> {
    if window.is_empty() {
        return None;
    }
    let mut sum = Decimal::ZERO;
    for value in window {
        sum = sum.checked_add((*value)?)?;
    }
    sum.checked_div(Decimal::from(window.len() as u64)).map(round)
}

/// Minimum of a window. `None` if the window is empty or contains any `None`.
pub fn min(window: &[Option<Decimal>]) -> Option<Decimal> {
    fold_extreme(window, |best, v| v < best)
}

/// Maximum of a window. `None` if the window is empty or contains any `None`.
pub fn max(window: &[Option<Decimal>]) -> Option<Decimal> {
    fold_extreme(window, |best, v| v > best)
}

fn fold_extreme(
    window: &[Option<Decimal>],
    replace: impl Fn(Decimal, Decimal) -> bool,
) -> Option<Decimal> {
    let mut best: Option<Decimal> = None;
    for value in window {
        let v = (*value)?;
        best = match best {
            None => Some(v),
            Some(b) if replace(b, v) => Some(v),
            Some(b) => Some(b),
        };
    }
    best
}
