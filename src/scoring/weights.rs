// src/scoring/weights.rs
//! Composite weight vector for the eleven factors.
//!
//! Overrides arrive as a key → value map. Validation rules:
//! - unknown keys, negative or non-finite values are rejected,
//! - an all-zero vector is rejected,
//! - a sum more than 0.01 away from 1.0 is renormalized (with a warning).

use crate::error::WeightError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

const SUM_TOLERANCE: f64 = 0.01;

/// Share of the therapeutic/pipeline factor kept before blending in expertise.
pub const PRIMARY_BLEND: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub therapeutic_alignment: f64,
    pub pipeline_gap: f64,
    pub modality_expertise: f64,
    pub indication_expertise: f64,
    pub cash_position: f64,
    pub deal_size_tolerance: f64,
    pub regulatory_expertise: f64,
    pub commercial_infrastructure: f64,
    pub geographic_reach: f64,
    pub asset_complexity: f64,
    pub recent_deal_activity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            therapeutic_alignment: 0.25,
            pipeline_gap: 0.20,
            modality_expertise: 0.15,
            indication_expertise: 0.10,
            cash_position: 0.10,
            deal_size_tolerance: 0.08,
            regulatory_expertise: 0.05,
            commercial_infrastructure: 0.05,
            geographic_reach: 0.05,
            asset_complexity: 0.05,
            recent_deal_activity: 0.02,
        }
    }
}

impl ScoringWeights {
    /// Override keys, in field order.
    pub const KEYS: [&'static str; 11] = [
        "therapeutic_alignment",
        "pipeline_gap",
        "modality_expertise",
        "indication_expertise",
        "cash_position",
        "deal_size_tolerance",
        "regulatory_expertise",
        "commercial_infrastructure",
        "geographic_reach",
        "asset_complexity",
        "recent_deal_activity",
    ];

    fn slot_mut(&mut self, key: &str) -> Option<&mut f64> {
        Some(match key {
            "therapeutic_alignment" => &mut self.therapeutic_alignment,
            "pipeline_gap" => &mut self.pipeline_gap,
            "modality_expertise" => &mut self.modality_expertise,
            "indication_expertise" => &mut self.indication_expertise,
            "cash_position" => &mut self.cash_position,
            "deal_size_tolerance" => &mut self.deal_size_tolerance,
            "regulatory_expertise" => &mut self.regulatory_expertise,
            "commercial_infrastructure" => &mut self.commercial_infrastructure,
            "geographic_reach" => &mut self.geographic_reach,
            "asset_complexity" => &mut self.asset_complexity,
            "recent_deal_activity" => &mut self.recent_deal_activity,
            _ => return None,
        })
    }

    pub fn as_array(&self) -> [f64; 11] {
        [
            self.therapeutic_alignment,
            self.pipeline_gap,
            self.modality_expertise,
            self.indication_expertise,
            self.cash_position,
            self.deal_size_tolerance,
            self.regulatory_expertise,
            self.commercial_infrastructure,
            self.geographic_reach,
            self.asset_complexity,
            self.recent_deal_activity,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Defaults with the given keys replaced, then validated.
    pub fn with_overrides(overrides: &BTreeMap<String, f64>) -> Result<Self, WeightError> {
        let mut w = Self::default();
        for (key, &value) in overrides {
            let slot = w
                .slot_mut(key.trim())
                .ok_or_else(|| WeightError::UnknownKey(key.clone()))?;
            *slot = value;
        }
        w.validated()
    }

    /// Reject invalid vectors; renormalize when the sum drifts past the tolerance.
    pub fn validated(self) -> Result<Self, WeightError> {
        for (key, value) in Self::KEYS.iter().zip(self.as_array()) {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightError::InvalidValue {
                    key: key.to_string(),
                    value,
                });
            }
        }
        let sum = self.sum();
        if sum <= 0.0 {
            return Err(WeightError::ZeroSum);
        }
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            warn!(target: "scoring", sum, "scoring weights do not sum to 1.0; renormalizing");
            return Ok(self.scaled(1.0 / sum));
        }
        Ok(self)
    }

    fn scaled(mut self, k: f64) -> Self {
        for key in Self::KEYS {
            if let Some(slot) = self.slot_mut(key) {
                *slot *= k;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn defaults_sum_to_one() {
        assert!((ScoringWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn small_drift_is_kept_as_is() {
        let w = ScoringWeights::with_overrides(&map(&[("recent_deal_activity", 0.025)])).unwrap();
        assert_eq!(w.recent_deal_activity, 0.025);
    }

    #[test]
    fn large_drift_is_renormalized() {
        let w = ScoringWeights::with_overrides(&map(&[("therapeutic_alignment", 0.75)])).unwrap();
        assert!((w.sum() - 1.0).abs() < 1e-9);
        assert!((w.therapeutic_alignment - 0.5).abs() < 1e-9);
    }

    #[test]
    fn bad_overrides_are_rejected() {
        assert_eq!(
            ScoringWeights::with_overrides(&map(&[("vibes", 0.1)])),
            Err(WeightError::UnknownKey("vibes".into()))
        );
        assert!(matches!(
            ScoringWeights::with_overrides(&map(&[("cash_position", -0.1)])),
            Err(WeightError::InvalidValue { .. })
        ));
        assert!(matches!(
            ScoringWeights::with_overrides(&map(&[("cash_position", f64::NAN)])),
            Err(WeightError::InvalidValue { .. })
        ));
        let zeros: BTreeMap<String, f64> =
            ScoringWeights::KEYS.iter().map(|k| (k.to_string(), 0.0)).collect();
        assert_eq!(ScoringWeights::with_overrides(&zeros), Err(WeightError::ZeroSum));
    }
}
