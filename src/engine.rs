// src/engine.rs
//! # Recommendation Engine
//! Wires the components together:
//! raw asset → normalize → quality gate → score → (resolve) → reconcile.
//!
//! Everything but `evaluate_with_models` is synchronous and free of I/O once
//! constructed.

use crate::asset::{AssetProfile, RawAssetProfile};
use crate::config::EngineConfig;
use crate::ensemble::fanout::{gather_responses, DynModelClient};
use crate::ensemble::{EnsembleResolver, EnsembleResult, ModelResponse, ModelWeightsConfig};
use crate::error::EngineError;
use crate::normalize::{enrich, EnrichmentResult};
use crate::recommend::{reconcile, Recommendation};
use crate::roster::Roster;
use crate::scoring::{
    assess_complexity, top_of, BuyerScore, ComplexityAssessment, ScoringEngine, ScoringWeights,
    TopBuyer,
};
use crate::telemetry::anon_hash;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Everything computed for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub enrichment: EnrichmentResult,
    pub asset: AssetProfile,
    pub complexity: ComplexityAssessment,
    /// Best `top_n` candidates, ranked.
    pub ranked: Vec<BuyerScore>,
    pub top_buyer: TopBuyer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensemble: Option<EnsembleResult>,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    scorer: ScoringEngine,
    resolver: EnsembleResolver,
}

impl Engine {
    /// Build from config: validates weight overrides, loads roster and model weights.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let weights = config.scoring_weights()?;
        let roster = config.roster();
        let model_weights = config.model_weights();
        Ok(Self::from_parts(config, roster, weights, model_weights))
    }

    pub fn from_parts(
        config: EngineConfig,
        roster: Roster,
        weights: ScoringWeights,
        model_weights: ModelWeightsConfig,
    ) -> Self {
        Self {
            config,
            scorer: ScoringEngine::new(roster, weights),
            resolver: EnsembleResolver::new(model_weights),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scorer(&self) -> &ScoringEngine {
        &self.scorer
    }

    pub fn resolver(&self) -> &EnsembleResolver {
        &self.resolver
    }

    /// Normalize and gate. `Err` when mean confidence is below the configured minimum.
    pub fn prepare(&self, raw: &RawAssetProfile) -> Result<(EnrichmentResult, AssetProfile), EngineError> {
        let enrichment = enrich(raw);
        let asset = enrichment.accept(self.config.min_enrichment_confidence)?;
        Ok((enrichment, asset))
    }

    /// Full pass over already-collected model responses (possibly none).
    pub fn evaluate(
        &self,
        raw: &RawAssetProfile,
        responses: Vec<ModelResponse>,
    ) -> Result<Report, EngineError> {
        let (enrichment, asset) = self.prepare(raw)?;
        self.finish(enrichment, asset, responses)
    }

    /// Query model clients concurrently, then evaluate with whatever answered in time.
    pub async fn evaluate_with_models(
        &self,
        raw: &RawAssetProfile,
        clients: &[DynModelClient],
        per_call_timeout: Duration,
    ) -> Result<Report, EngineError> {
        let (enrichment, asset) = self.prepare(raw)?;
        let responses = gather_responses(clients, &asset, per_call_timeout).await;
        self.finish(enrichment, asset, responses)
    }

    fn finish(
        &self,
        enrichment: EnrichmentResult,
        asset: AssetProfile,
        responses: Vec<ModelResponse>,
    ) -> Result<Report, EngineError> {
        let complexity = assess_complexity(&asset);
        let mut ranked = self.scorer.score(&asset);
        let top_buyer = top_of(&ranked);
        ranked.truncate(self.config.top_n);

        let ensemble = if responses.is_empty() {
            None
        } else {
            Some(self.resolver.resolve(responses)?)
        };
        let recommendation = reconcile(
            ensemble.as_ref(),
            &top_buyer,
            self.config.min_ensemble_confidence,
        );

        info!(
            target: "engine",
            id = %anon_hash(&asset.fingerprint_text()),
            enrichment = enrichment.overall_confidence,
            ranked = ranked.len(),
            source = ?recommendation.source,
            buyer = recommendation.display_name(),
            "recommendation ready"
        );

        Ok(Report {
            enrichment,
            asset,
            complexity,
            ranked,
            top_buyer,
            ensemble,
            recommendation,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_parts(
            EngineConfig::default(),
            Roster::seed(),
            ScoringWeights::default(),
            ModelWeightsConfig::default_seed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::ModelAnswer;
    use crate::error::QualityGateError;
    use crate::recommend::RecommendationSource;
    use crate::vocab::Dimension;

    fn her2_adc() -> RawAssetProfile {
        RawAssetProfile::new("Oncology", "Breast Cancer", "HER2", "ADC", "Phase II")
    }

    #[test]
    fn deterministic_path_without_models() {
        let report = Engine::default().evaluate(&her2_adc(), vec![]).unwrap();
        assert_eq!(report.asset.target, "ERBB2");
        assert_eq!(report.asset.modality, "antibody-drug conjugate");
        assert!(report.ensemble.is_none());
        assert!(report.ranked.len() <= 5);
        assert_eq!(report.recommendation.source, RecommendationSource::Deterministic);
        assert_eq!(report.recommendation.buyer.as_deref(), Some(report.top_buyer.name()));
    }

    #[test]
    fn gate_rejects_unrecognizable_assets() {
        let raw = RawAssetProfile::new("zzz", "qqq", "xxyyzz", "blorp", "someday");
        let err = Engine::default().evaluate(&raw, vec![]).unwrap_err();
        match err {
            EngineError::QualityGate(QualityGateError::LowConfidence { unrecognized, .. }) => {
                assert_eq!(unrecognized, Dimension::ALL.to_vec());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn models_feed_the_reconciler() {
        let responses = vec![
            ModelResponse::new("gpt-4o", ModelAnswer::for_buyer("Pfizer").with_rationale("ADC leader"), 0.9),
            ModelResponse::new("claude", ModelAnswer::for_buyer("Pfizer").with_rationale("ADC leader"), 0.9),
        ];
        let report = Engine::default().evaluate(&her2_adc(), responses).unwrap();
        let ens = report.ensemble.as_ref().unwrap();
        assert_eq!(ens.agreement, 1.0);
        assert_eq!(report.recommendation.source, RecommendationSource::Ensemble);
        assert_eq!(report.recommendation.buyer.as_deref(), Some("Pfizer"));
    }
}
