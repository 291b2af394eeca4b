//! buyer-match: command-line entrypoint.
//!
//! Reads a raw asset profile (JSON) and, optionally, collected model responses
//! (JSON array), and prints the full report as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pharma_buyer_match::{
    config::ENV_CONFIG_PATH, normalize, telemetry, Dimension, Engine, EngineConfig,
    ModelResponse, RawAssetProfile,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "buyer-match", version)]
#[command(about = "Rank potential acquirers for a drug asset and reconcile model recommendations")]
struct Cli {
    /// Debug-level logs for this crate
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize, score and reconcile one asset
    Recommend {
        /// Raw asset profile (JSON)
        #[arg(long, value_name = "FILE")]
        asset: PathBuf,

        /// Collected model responses (JSON array)
        #[arg(long, value_name = "FILE")]
        responses: Option<PathBuf>,

        /// Engine config (TOML or JSON)
        #[arg(long, value_name = "FILE", env = ENV_CONFIG_PATH)]
        config: Option<PathBuf>,

        /// Override the number of ranked candidates reported
        #[arg(long)]
        top: Option<usize>,
    },
    /// Normalize a single attribute value
    Normalize {
        #[arg(long, value_enum)]
        dimension: DimensionArg,

        value: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DimensionArg {
    TherapeuticArea,
    Indication,
    Target,
    Modality,
    Stage,
}

impl From<DimensionArg> for Dimension {
    fn from(d: DimensionArg) -> Self {
        match d {
            DimensionArg::TherapeuticArea => Dimension::TherapeuticArea,
            DimensionArg::Indication => Dimension::Indication,
            DimensionArg::Target => Dimension::Target,
            DimensionArg::Modality => Dimension::Modality,
            DimensionArg::Stage => Dimension::AssetStage,
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {what} from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {what} from {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    // Load .env if present; silently ignored otherwise.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);
    telemetry::describe_metrics();

    match cli.command {
        Command::Recommend {
            asset,
            responses,
            config,
            top,
        } => {
            let mut cfg = match &config {
                Some(p) => EngineConfig::load_from_file(p)
                    .with_context(|| format!("loading engine config {}", p.display()))?,
                None => EngineConfig::load_default().context("loading engine config")?,
            };
            if let Some(n) = top.filter(|n| *n > 0) {
                cfg.top_n = n;
            }
            let engine = Engine::new(cfg).context("building engine")?;

            let raw: RawAssetProfile = read_json(&asset, "asset")?;
            let responses: Vec<ModelResponse> = match &responses {
                Some(p) => read_json(p, "model responses")?,
                None => Vec::new(),
            };

            let report = engine.evaluate(&raw, responses)?;
            print_json(&report, cli.pretty)
        }
        Command::Normalize { dimension, value } => {
            let result = normalize(dimension.into(), &value);
            print_json(&result, cli.pretty)
        }
    }
}
