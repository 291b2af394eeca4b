// src/config.rs
//! Engine configuration: gate thresholds, weight overrides and optional data files.
//!
//! Lookup order for `EngineConfig::load_default()`:
//! 1) `$BUYER_MATCH_CONFIG` (must exist),
//! 2) `config/engine.toml`,
//! 3) `config/engine.json`,
//! 4) built-in defaults.
//!
//! Relative `roster_path` / `model_weights_path` are resolved against the config
//! file's directory.

use crate::ensemble::ModelWeightsConfig;
use crate::error::{ConfigError, WeightError};
use crate::normalize::DEFAULT_MIN_ENRICHMENT_CONFIDENCE;
use crate::recommend::DEFAULT_MIN_ENSEMBLE_CONFIDENCE;
use crate::roster::Roster;
use crate::scoring::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ENV_CONFIG_PATH: &str = "BUYER_MATCH_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/engine.toml";
const DEFAULT_CONFIG_PATH_JSON: &str = "config/engine.json";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Quality gate on the enrichment mean confidence.
    pub min_enrichment_confidence: f64,
    /// Ensemble results below this defer to the deterministic pick.
    pub min_ensemble_confidence: f64,
    /// How many ranked candidates to report.
    pub top_n: usize,
    /// Scoring weight overrides by key; validated on use.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_weights_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_enrichment_confidence: DEFAULT_MIN_ENRICHMENT_CONFIDENCE,
            min_ensemble_confidence: DEFAULT_MIN_ENSEMBLE_CONFIDENCE,
            top_n: DEFAULT_TOP_N,
            weights: BTreeMap::new(),
            roster_path: None,
            model_weights_path: None,
        }
    }
}

fn in_unit_range(x: f64) -> bool {
    x.is_finite() && (0.0..=1.0).contains(&x)
}

impl EngineConfig {
    /// Parse a TOML or JSON file (by extension; anything but `.json` is TOML).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let cfg: Self = if is_json {
            serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&raw).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };
        debug!(target: "config", path = %path.display(), "loaded engine config");
        Ok(cfg.sanitized().resolved_against(path.parent()))
    }

    /// Env var, then default locations, then built-in defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from_file(&pb);
            }
            return Err(ConfigError::MissingEnvPath(ENV_CONFIG_PATH));
        }
        for candidate in [DEFAULT_CONFIG_PATH, DEFAULT_CONFIG_PATH_JSON] {
            let pb = PathBuf::from(candidate);
            if pb.exists() {
                return Self::load_from_file(&pb);
            }
        }
        Ok(Self::default())
    }

    /// Reset out-of-range values to defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !in_unit_range(self.min_enrichment_confidence) {
            warn!(target: "config", value = self.min_enrichment_confidence, "min_enrichment_confidence out of range; using default");
            self.min_enrichment_confidence = defaults.min_enrichment_confidence;
        }
        if !in_unit_range(self.min_ensemble_confidence) {
            warn!(target: "config", value = self.min_ensemble_confidence, "min_ensemble_confidence out of range; using default");
            self.min_ensemble_confidence = defaults.min_ensemble_confidence;
        }
        if self.top_n == 0 {
            self.top_n = defaults.top_n;
        }
        self
    }

    fn resolved_against(mut self, base: Option<&Path>) -> Self {
        let Some(base) = base else {
            return self;
        };
        let fix = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.roster_path = self.roster_path.take().map(fix);
        self.model_weights_path = self.model_weights_path.take().map(fix);
        self
    }

    /// Defaults merged with the override map, validated.
    pub fn scoring_weights(&self) -> Result<ScoringWeights, WeightError> {
        ScoringWeights::with_overrides(&self.weights)
    }

    /// Configured roster, or the seed when unset or unreadable.
    pub fn roster(&self) -> Roster {
        match &self.roster_path {
            Some(p) => Roster::load_or_seed(p),
            None => Roster::seed(),
        }
    }

    pub fn model_weights(&self) -> ModelWeightsConfig {
        match &self.model_weights_path {
            Some(p) => ModelWeightsConfig::load_or_seed(p),
            None => ModelWeightsConfig::default_seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.min_enrichment_confidence, 0.6);
        assert_eq!(c.min_ensemble_confidence, 0.5);
        assert_eq!(c.top_n, 5);
        assert_eq!(c.scoring_weights().unwrap(), ScoringWeights::default());
    }

    #[test]
    fn partial_toml_fills_defaults_and_sanitizes() {
        let c: EngineConfig = toml::from_str("min_ensemble_confidence = 1.7\ntop_n = 0").unwrap();
        let c = c.sanitized();
        assert_eq!(c.min_ensemble_confidence, 0.5);
        assert_eq!(c.top_n, 5);
        assert_eq!(c.min_enrichment_confidence, 0.6);
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let c = EngineConfig {
            roster_path: Some(PathBuf::from("roster.toml")),
            model_weights_path: Some(PathBuf::from("/abs/models.json")),
            ..EngineConfig::default()
        }
        .resolved_against(Some(Path::new("/etc/buyer-match")));
        assert_eq!(c.roster_path, Some(PathBuf::from("/etc/buyer-match/roster.toml")));
        assert_eq!(c.model_weights_path, Some(PathBuf::from("/abs/models.json")));
    }
}
