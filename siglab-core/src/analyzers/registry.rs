//! Typed analyzer configuration, construction, and pipeline glue.
//!
//! An [`AnalyzerConfig`] names both halves of a pipeline: which indicator to
//! compute and which analyzer to run over its results. [`evaluate`] wires
//! them together for callers that just want verdicts from ticks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AnalyzerResult, PriceField, Tick};
use crate::error::IndicatorError;
use crate::indicators::{build_indicator, IndicatorConfig, TiePolicy};

use super::{
    Analyzer, BollingerAnalyzer, ObvAnalyzer, RocAnalyzer, RsiAnalyzer, SmaCrossAnalyzer,
};

fn default_lookback() -> usize {
    5
}

fn default_multiplier() -> Decimal {
    Decimal::TWO
}

/// One configuration variant per analyzer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "analyzer", rename_all = "snake_case")]
pub enum AnalyzerConfig {
    Roc {
        period: usize,
        #[serde(default = "default_lookback")]
        lookback: usize,
    },
    Rsi {
        period: usize,
        /// Required: level the oscillator must climb through for a buy.
        #[serde(default)]
        oversold: Option<Decimal>,
        /// Required: level the oscillator must fall through for a sell.
        #[serde(default)]
        overbought: Option<Decimal>,
    },
    SmaCross {
        period: usize,
        #[serde(default)]
        price: PriceField,
    },
    Obv {
        #[serde(default = "default_lookback")]
        lookback: usize,
        #[serde(default)]
        tie: TiePolicy,
    },
    Bollinger {
        period: usize,
        #[serde(default = "default_multiplier")]
        multiplier: Decimal,
        #[serde(default)]
        price: PriceField,
    },
}

impl AnalyzerConfig {
    fn name(&self) -> &'static str {
        match self {
            AnalyzerConfig::Roc { .. } => "roc_analyzer",
            AnalyzerConfig::Rsi { .. } => "rsi_analyzer",
            AnalyzerConfig::SmaCross { .. } => "sma_cross_analyzer",
            AnalyzerConfig::Obv { .. } => "obv_analyzer",
            AnalyzerConfig::Bollinger { .. } => "bollinger_analyzer",
        }
    }
}

/// The indicator configuration an analyzer pairs with.
pub fn indicator_for(config: &AnalyzerConfig) -> IndicatorConfig {
    match *config {
        AnalyzerConfig::Roc { period, .. } => IndicatorConfig::Roc {
            period,
            price: PriceField::Close,
        },
        AnalyzerConfig::Rsi { period, .. } => IndicatorConfig::Rsi { period },
        AnalyzerConfig::SmaCross { period, price } => IndicatorConfig::Sma { period, price },
        AnalyzerConfig::Obv { tie, .. } => IndicatorConfig::Obv { tie },
        AnalyzerConfig::Bollinger {
            period,
            multiplier,
            price,
        } => IndicatorConfig::Bollinger {
            period,
            multiplier,
            price,
        },
    }
}

/// Build the analyzer a configuration describes. Scalar parameters the
/// analyzer cannot default are validated here, before any computation.
pub fn build_analyzer(config: &AnalyzerConfig) -> Result<Box<dyn Analyzer>, IndicatorError> {
    let missing = |parameter| IndicatorError::MissingParameter {
        indicator: config.name().to_string(),
        parameter,
    };
    match *config {
        AnalyzerConfig::Roc { lookback, .. } => Ok(Box::new(RocAnalyzer::new(lookback))),
        AnalyzerConfig::Rsi {
            oversold,
            overbought,
            ..
        } => {
            let oversold = oversold.ok_or_else(|| missing("oversold"))?;
            let overbought = overbought.ok_or_else(|| missing("overbought"))?;
            Ok(Box::new(RsiAnalyzer::new(oversold, overbought)))
        }
        AnalyzerConfig::SmaCross { .. } => Ok(Box::new(SmaCrossAnalyzer::new())),
        AnalyzerConfig::Obv { lookback, .. } => Ok(Box::new(ObvAnalyzer::new(lookback))),
        AnalyzerConfig::Bollinger { .. } => Ok(Box::new(BollingerAnalyzer::new())),
    }
}

/// Full pipeline for one configuration: compute the paired indicator, then
/// run the analyzer over its results.
pub fn evaluate(
    config: &AnalyzerConfig,
    ticks: &[Tick],
) -> Result<Vec<AnalyzerResult>, IndicatorError> {
    let analyzer = build_analyzer(config)?;
    let indicator = build_indicator(&indicator_for(config));
    let results = indicator.compute(ticks)?;
    analyzer.analyze(ticks, &results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_ticks;
    use rust_decimal_macros::dec;

    #[test]
    fn config_deserializes_from_tagged_json() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"analyzer": "sma_cross", "period": 20}"#).unwrap();
        assert_eq!(
            config,
            AnalyzerConfig::SmaCross {
                period: 20,
                price: PriceField::Close
            }
        );
    }

    #[test]
    fn rsi_analyzer_requires_thresholds() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"analyzer": "rsi", "period": 14}"#).unwrap();
        let err = build_analyzer(&config).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::MissingParameter {
                parameter: "oversold",
                ..
            }
        ));
    }

    #[test]
    fn rsi_analyzer_reports_second_missing_threshold() {
        let config = AnalyzerConfig::Rsi {
            period: 14,
            oversold: Some(dec!(30)),
            overbought: None,
        };
        let err = build_analyzer(&config).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::MissingParameter {
                parameter: "overbought",
                ..
            }
        ));
    }

    #[test]
    fn evaluate_runs_full_pipeline() {
        let ticks = make_ticks(&[
            dec!(10),
            dec!(11),
            dec!(12),
            dec!(11),
            dec!(13),
            dec!(12),
            dec!(14),
        ]);
        let config = AnalyzerConfig::SmaCross { period: 3, price: PriceField::Close };
        let out = evaluate(&config, &ticks).unwrap();
        assert_eq!(out.len(), ticks.len());
    }

    #[test]
    fn evaluate_propagates_indicator_validation() {
        let ticks = make_ticks(&[dec!(10), dec!(11)]);
        let config = AnalyzerConfig::Roc {
            period: 10,
            lookback: 5,
        };
        assert!(matches!(
            evaluate(&config, &ticks),
            Err(IndicatorError::PeriodExceedsHistory { .. })
        ));
    }

    #[test]
    fn indicator_pairing() {
        let config = AnalyzerConfig::Bollinger {
            period: 20,
            multiplier: dec!(2),
            price: PriceField::Close,
        };
        assert_eq!(
            indicator_for(&config),
            IndicatorConfig::Bollinger {
                period: 20,
                multiplier: dec!(2),
                price: PriceField::Close
            }
        );
    }
}
