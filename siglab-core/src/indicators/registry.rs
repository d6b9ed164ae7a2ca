//! Typed indicator configuration and construction.
//!
//! A data-driven request (JSON/TOML) deserializes into [`IndicatorConfig`]
//! and maps onto a concrete indicator through one match — no reflection, no
//! string-keyed parameter bags.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::PriceField;

use super::{Atr, Bollinger, Ema, Indicator, Obv, Roc, Rsi, Sma, TiePolicy, Wma};

fn default_multiplier() -> Decimal {
    Decimal::TWO
}

/// One configuration variant per indicator type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "indicator", rename_all = "snake_case")]
pub enum IndicatorConfig {
    Sma {
        period: usize,
        #[serde(default)]
        price: PriceField,
    },
    Ema {
        period: usize,
        #[serde(default)]
        price: PriceField,
    },
    Wma {
        period: usize,
        #[serde(default)]
        price: PriceField,
    },
    Bollinger {
        period: usize,
        #[serde(default = "default_multiplier")]
        multiplier: Decimal,
        #[serde(default)]
        price: PriceField,
    },
    Atr {
        period: usize,
    },
    Rsi {
        period: usize,
    },
    Obv {
        #[serde(default)]
        tie: TiePolicy,
    },
    Roc {
        period: usize,
        #[serde(default)]
        price: PriceField,
    },
}

/// Build the indicator a configuration describes. Parameter validation
/// happens at compute time, where the tick history is known.
pub fn build_indicator(config: &IndicatorConfig) -> Box<dyn Indicator> {
    match *config {
        IndicatorConfig::Sma { period, price } => Box::new(Sma::new(period, price)),
        IndicatorConfig::Ema { period, price } => Box::new(Ema::new(period, price)),
        IndicatorConfig::Wma { period, price } => Box::new(Wma::new(period, price)),
        IndicatorConfig::Bollinger {
            period,
            multiplier,
            price,
        } => Box::new(Bollinger::new(period, multiplier, price)),
        IndicatorConfig::Atr { period } => Box::new(Atr::new(period)),
        IndicatorConfig::Rsi { period } => Box::new(Rsi::new(period)),
        IndicatorConfig::Obv { tie } => Box::new(Obv::new(tie)),
        IndicatorConfig::Roc { period, price } => Box::new(Roc::new(period, price)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn config_deserializes_from_tagged_json() {
        let config: IndicatorConfig =
            serde_json::from_str(r#"{"indicator": "sma", "period": 20}"#).unwrap();
        assert_eq!(
            config,
            IndicatorConfig::Sma {
                period: 20,
                price: PriceField::Close
            }
        );
        assert_eq!(build_indicator(&config).name(), "sma_20");
    }

    #[test]
    fn bollinger_defaults_multiplier_to_two() {
        let config: IndicatorConfig =
            serde_json::from_str(r#"{"indicator": "bollinger", "period": 20}"#).unwrap();
        assert_eq!(
            config,
            IndicatorConfig::Bollinger {
                period: 20,
                multiplier: dec!(2),
                price: PriceField::Close
            }
        );
    }

    #[test]
    fn every_variant_builds() {
        let configs = [
            IndicatorConfig::Sma {
                period: 5,
                price: PriceField::Close,
            },
            IndicatorConfig::Ema {
                period: 5,
                price: PriceField::Close,
            },
            IndicatorConfig::Wma {
                period: 5,
                price: PriceField::Close,
            },
            IndicatorConfig::Bollinger {
                period: 5,
                multiplier: dec!(2),
                price: PriceField::Close,
            },
            IndicatorConfig::Atr { period: 5 },
            IndicatorConfig::Rsi { period: 5 },
            IndicatorConfig::Obv {
                tie: TiePolicy::Hold,
            },
            IndicatorConfig::Roc {
                period: 5,
                price: PriceField::Close,
            },
        ];
        let names: Vec<_> = configs
            .iter()
            .map(|c| build_indicator(c).name().to_string())
            .collect();
        assert_eq!(
            names,
            ["sma_5", "ema_5", "wma_5", "bollinger_5", "atr_5", "rsi_5", "obv", "roc_5"]
        );
    }
}
