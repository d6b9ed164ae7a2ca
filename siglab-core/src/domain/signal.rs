//! Directional signals and their qualitative strength.

use serde::{Deserialize, Serialize};

/// Directional opinion of a detector for one bar.
///
/// `Neutral` means "no opinion". A detector slot may also be absent entirely
/// (`Option::None`); the merge rule treats both identically as a non-vote,
/// and the two must stay interchangeable there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl Signal {
    /// True for `Buy` and `Sell`; false for `Neutral`.
    pub fn is_vote(&self) -> bool {
        !matches!(self, Signal::Neutral)
    }
}

/// Qualitative confidence tag attached to a directional signal.
///
/// Reflects which detector produced the signal: a confirmed line cross is
/// stronger evidence than a divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strength {
    Weak,
    Normal,
    Strong,
    Undefined,
}

/// A directional signal together with its strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStrength {
    pub signal: Signal,
    pub strength: Strength,
}

impl SignalStrength {
    pub fn new(signal: Signal, strength: Strength) -> Self {
        Self { signal, strength }
    }

    /// The no-opinion value: `Neutral` at `Undefined` strength.
    pub fn neutral() -> Self {
        Self::new(Signal::Neutral, Strength::Undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_is_not_a_vote() {
        assert!(Signal::Buy.is_vote());
        assert!(Signal::Sell.is_vote());
        assert!(!Signal::Neutral.is_vote());
    }

    #[test]
    fn signal_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::to_string(&Strength::Undefined).unwrap(),
            "\"UNDEFINED\""
        );
    }

    #[test]
    fn neutral_constructor() {
        let s = SignalStrength::neutral();
        assert_eq!(s.signal, Signal::Neutral);
        assert_eq!(s.strength, Strength::Undefined);
    }
}
