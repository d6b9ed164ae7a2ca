//! Siglab CLI — compute and analyze commands.
//!
//! Commands:
//! - `compute` — run configured indicators over a CSV tick file, print one
//!   JSON line per indicator
//! - `analyze` — run configured analyzer pipelines over a CSV tick file,
//!   print one JSON line per analyzer (pipelines fan out across rayon)
//!
//! The tick CSV carries a header row with the `Tick` field names; `time` is
//! RFC 3339. The config file is TOML with `[[indicators]]` and
//! `[[analyzers]]` tables matching the typed configs in siglab-core.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use siglab_core::analyzers::{evaluate, AnalyzerConfig};
use siglab_core::domain::{AnalyzerResult, IndicatorResult, Tick};
use siglab_core::indicators::{build_indicator, IndicatorConfig};

#[derive(Parser)]
#[command(name = "siglab", about = "Siglab CLI — technical indicator and signal engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute configured indicators over a tick CSV file.
    Compute {
        /// Path to the tick CSV file.
        #[arg(long)]
        ticks: PathBuf,

        /// Path to a TOML config file with [[indicators]] tables.
        #[arg(long)]
        config: PathBuf,
    },
    /// Run configured analyzer pipelines over a tick CSV file.
    Analyze {
        /// Path to the tick CSV file.
        #[arg(long)]
        ticks: PathBuf,

        /// Path to a TOML config file with [[analyzers]] tables.
        #[arg(long)]
        config: PathBuf,

        /// Worker threads for running analyzers (0 = one per core).
        #[arg(long, default_value_t = 0)]
        jobs: usize,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    indicators: Vec<IndicatorConfig>,
    #[serde(default)]
    analyzers: Vec<AnalyzerConfig>,
}

#[derive(Debug, Serialize)]
struct IndicatorReport<'a> {
    indicator: &'a str,
    results: Vec<IndicatorResult>,
}

#[derive(Debug, Serialize)]
struct AnalyzerReport {
    analyzer: String,
    results: Vec<AnalyzerResult>,
}

fn load_ticks(path: &Path) -> Result<Vec<Tick>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening tick file {}", path.display()))?;
    let mut ticks = Vec::new();
    for record in reader.deserialize() {
        let tick: Tick = record.context("parsing tick row")?;
        ticks.push(tick);
    }
    Ok(ticks)
}

fn load_config(path: &Path) -> Result<ConfigFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
}

fn run_compute(ticks_path: &Path, config_path: &Path) -> Result<()> {
    let ticks = load_ticks(ticks_path)?;
    let config = load_config(config_path)?;
    if config.indicators.is_empty() {
        bail!("config has no [[indicators]] tables");
    }

    for indicator_config in &config.indicators {
        let indicator = build_indicator(indicator_config);
        let results = indicator
            .compute(&ticks)
            .with_context(|| format!("computing {}", indicator.name()))?;
        let report = IndicatorReport {
            indicator: indicator.name(),
            results,
        };
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn run_analyze(ticks_path: &Path, config_path: &Path, jobs: usize) -> Result<()> {
    if jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("configuring thread pool")?;
    }
    let ticks = load_ticks(ticks_path)?;
    let config = load_config(config_path)?;
    if config.analyzers.is_empty() {
        bail!("config has no [[analyzers]] tables");
    }

    // Pipelines are pure and share nothing: fan out across the thread pool.
    let reports: Vec<Result<AnalyzerReport>> = config
        .analyzers
        .par_iter()
        .map(|analyzer_config| {
            let results = evaluate(analyzer_config, &ticks)
                .with_context(|| format!("running {analyzer_config:?}"))?;
            Ok(AnalyzerReport {
                analyzer: analyzer_label(analyzer_config),
                results,
            })
        })
        .collect();

    for report in reports {
        let report = report?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn analyzer_label(config: &AnalyzerConfig) -> String {
    match config {
        AnalyzerConfig::Roc { period, .. } => format!("roc_{period}"),
        AnalyzerConfig::Rsi { period, .. } => format!("rsi_{period}"),
        AnalyzerConfig::SmaCross { period, .. } => format!("sma_cross_{period}"),
        AnalyzerConfig::Obv { .. } => "obv".to_string(),
        AnalyzerConfig::Bollinger { period, .. } => format!("bollinger_{period}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Compute { ticks, config } => run_compute(&ticks, &config),
        Commands::Analyze {
            ticks,
            config,
            jobs,
        } => run_analyze(&ticks, &config, jobs),
    }
}
