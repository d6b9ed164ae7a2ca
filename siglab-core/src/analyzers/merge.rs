//! Combining partial signals from multiple detectors into one.
//!
//! The vote-set rule: inputs that are absent or `Neutral` do not vote; an
//! empty vote set or a Buy/Sell conflict resolves to `Neutral`; otherwise
//! the single distinct vote wins. The rule is symmetric in its arguments
//! and identical for 2-ary and 3-ary merges.

use crate::domain::{Signal, SignalStrength, Strength};

fn merge(inputs: &[Option<Signal>]) -> Signal {
    let mut verdict = Signal::Neutral;
    for vote in inputs.iter().flatten().filter(|s| s.is_vote()) {
        if verdict == Signal::Neutral {
            verdict = *vote;
        } else if verdict != *vote {
            return Signal::Neutral;
        }
    }
    verdict
}

/// Merge two partial signals.
pub fn merge2(a: Option<Signal>, b: Option<Signal>) -> Signal {
    merge(&[a, b])
}

/// Merge three partial signals.
pub fn merge3(a: Option<Signal>, b: Option<Signal>, c: Option<Signal>) -> Signal {
    merge(&[a, b, c])
}

/// Merge strength-tagged partial signals, listed in precedence order
/// (strongest detector first).
///
/// The final signal follows the vote-set rule; the final strength is taken
/// from the first input that voted for the winning signal, so on agreement
/// the earlier (stronger) detector supplies the strength. A `Neutral`
/// outcome carries `Strength::Undefined`.
pub fn merge_strength(inputs: &[(Option<Signal>, Strength)]) -> SignalStrength {
    let signals: Vec<Option<Signal>> = inputs.iter().map(|(s, _)| *s).collect();
    let verdict = merge(&signals);
    if verdict == Signal::Neutral {
        return SignalStrength::neutral();
    }
    let strength = inputs
        .iter()
        .find(|(signal, _)| *signal == Some(verdict))
        .map(|(_, strength)| *strength)
        .unwrap_or(Strength::Undefined);
    SignalStrength::new(verdict, strength)
}
