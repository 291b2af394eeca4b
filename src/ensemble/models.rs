// src/ensemble/models.rs
//! # Model Weights
//!
//! Static blending weight per model identifier, in `[0.0, 1.0]`.
//!
//! - Loads from JSON (`default_weight`, `weights`, `aliases`).
//! - Lookup normalizes case, dashes and punctuation.
//! - Fallback order: alias → exact → longest contained key → default (0.1).
//! - `default_seed()` covers the models the host application fans out to.

use crate::error::ConfigError;
use crate::normalize::normalize_key;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};
use tracing::warn;

pub const DEFAULT_MODEL_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelWeightsConfig {
    /// Weight for identifiers that match nothing.
    #[serde(default = "default_model_weight")]
    pub default_weight: f64,
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    /// Alternative identifier → canonical identifier.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_model_weight() -> f64 {
    DEFAULT_MODEL_WEIGHT
}

impl Default for ModelWeightsConfig {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl ModelWeightsConfig {
    /// Read a JSON file. Keys are normalized on load.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(cfg.normalized())
    }

    /// Like `load_from_file`, falling back to `default_seed()` on error.
    pub fn load_or_seed<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            warn!(target: "ensemble", error = %e, "model weights load failed; using built-in seed");
            Self::default_seed()
        })
    }

    fn normalized(self) -> Self {
        Self {
            default_weight: self.default_weight,
            weights: self
                .weights
                .into_iter()
                .map(|(k, v)| (normalize_key(&k), v))
                .collect(),
            aliases: self
                .aliases
                .into_iter()
                .map(|(k, v)| (normalize_key(&k), normalize_key(&v)))
                .collect(),
        }
    }

    /// Weight for a model identifier.
    pub fn weight_for(&self, model: &str) -> f64 {
        let m = normalize_key(model);

        // 1) Alias → canonical.
        if let Some(&w) = self.aliases.get(&m).and_then(|c| self.weights.get(c)) {
            return w.clamp(0.0, 1.0);
        }

        // 2) Exact.
        if let Some(&w) = self.weights.get(&m) {
            return w.clamp(0.0, 1.0);
        }

        // 3) Versioned/prefixed ids: longest contained key wins.
        if let Some((_, &w)) = self
            .weights
            .iter()
            .filter(|(k, _)| !k.is_empty() && m.contains(k.as_str()))
            .max_by_key(|(k, _)| k.len())
        {
            return w.clamp(0.0, 1.0);
        }

        self.default_weight.clamp(0.0, 1.0)
    }

    pub fn default_seed() -> Self {
        let weights = [
            ("gpt-4o", 0.35),
            ("claude-3-5-sonnet", 0.35),
            ("gemini-1.5-pro", 0.20),
            ("llama-3.1-70b", 0.15),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let aliases = [
            ("openai", "gpt-4o"),
            ("gpt4o", "gpt-4o"),
            ("claude", "claude-3-5-sonnet"),
            ("anthropic", "claude-3-5-sonnet"),
            ("claude-3.5-sonnet", "claude-3-5-sonnet"),
            ("gemini", "gemini-1.5-pro"),
            ("google", "gemini-1.5-pro"),
            ("llama", "llama-3.1-70b"),
            ("meta-llama", "llama-3.1-70b"),
        ]
        .into_iter()
        .map(|(a, c)| (a.to_string(), c.to_string()))
        .collect();

        Self {
            default_weight: DEFAULT_MODEL_WEIGHT,
            weights,
            aliases,
        }
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ModelWeightsConfig {
        ModelWeightsConfig::default_seed()
    }

    #[test]
    fn exact_and_case_insensitive() {
        let c = cfg();
        assert_eq!(c.weight_for("gpt-4o"), 0.35);
        assert_eq!(c.weight_for("GPT-4o"), 0.35);
        assert_eq!(c.weight_for("Gemini 1.5 Pro"), 0.20);
    }

    #[test]
    fn alias_match() {
        let c = cfg();
        assert_eq!(c.weight_for("anthropic"), 0.35);
        assert_eq!(c.weight_for("Claude-3.5-Sonnet"), 0.35);
        assert_eq!(c.weight_for("llama"), 0.15);
    }

    #[test]
    fn versioned_ids_fall_back_to_contained_key() {
        let c = cfg();
        assert_eq!(c.weight_for("gpt-4o-2024-08-06"), 0.35);
        assert_eq!(c.weight_for("meta/llama-3.1-70b-instruct"), 0.15);
    }

    #[test]
    fn unknown_model_gets_default() {
        assert_eq!(cfg().weight_for("mistral-large"), DEFAULT_MODEL_WEIGHT);
        assert_eq!(cfg().weight_for(""), DEFAULT_MODEL_WEIGHT);
    }
}
