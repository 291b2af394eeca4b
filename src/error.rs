// src/error.rs
//! Typed errors for the library surface. The binary wraps these in `anyhow`.

use crate::vocab::Dimension;
use std::path::PathBuf;
use thiserror::Error;

/// Consensus resolution failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnsembleError {
    #[error("cannot resolve consensus over zero model responses")]
    NoResponses,
}

/// Rejected scoring weight overrides.
#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("unknown scoring weight key `{0}`")]
    UnknownKey(String),
    #[error("scoring weight `{key}` must be a finite, non-negative number (got {value})")]
    InvalidValue { key: String, value: f64 },
    #[error("scoring weights sum to zero")]
    ZeroSum,
}

/// Raised when an enriched asset is too uncertain to score.
#[derive(Debug, Error, PartialEq)]
pub enum QualityGateError {
    #[error("asset enrichment confidence {confidence:.2} is below the {threshold:.2} threshold (unrecognized: {unrecognized:?})")]
    LowConfidence {
        confidence: f64,
        threshold: f64,
        unrecognized: Vec<Dimension>,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing JSON from {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("parsing TOML from {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{0} points to a non-existent path")]
    MissingEnvPath(&'static str),
}

/// Errors surfaced by the end-to-end `Engine`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    QualityGate(#[from] QualityGateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Weights(#[from] WeightError),
    #[error(transparent)]
    Ensemble(#[from] EnsembleError),
}
