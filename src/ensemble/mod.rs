// src/ensemble/mod.rs
//! # Ensemble Consensus Resolver
//!
//! Reconciles already-collected model answers into one recommendation.
//!
//! 1. Plurality vote on the named buyer → `agreement`, consensus confidence.
//! 2. Quality metrics over all responses (consistency, completeness, specificity).
//! 3. Merge: model-weighted numeric fields, best single rationale, weighted
//!    alternative buyers.
//! 4. Overall confidence = mean(consensus confidence, mean response confidence,
//!    consistency).
//!
//! Synchronous and single-pass. Gathering responses concurrently is the job of
//! `fanout`; a model that timed out is simply absent here.

pub mod fanout;
pub mod models;
pub mod text;

pub use fanout::{gather_responses, DisabledModelClient, MockModelClient, ModelClient};
pub use models::{ModelWeightsConfig, DEFAULT_MODEL_WEIGHT};

use crate::error::EnsembleError;
use crate::normalize::normalize_key;
use metrics::{counter, gauge};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Below this agreement, runner-up buyers are recorded as disagreement.
pub const DISAGREEMENT_THRESHOLD: f64 = 2.0 / 3.0;
pub const MAX_ALTERNATIVES: usize = 3;
const PRIMARY_VOTE: f64 = 1.0;
const ALTERNATIVE_VOTE: f64 = 0.5;

/// What one model recommended. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelAnswer {
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub strategic_fit_score: Option<f64>,
    #[serde(default)]
    pub alternative_buyers: Vec<String>,
}

impl ModelAnswer {
    pub fn for_buyer(buyer: impl Into<String>) -> Self {
        Self {
            buyer: Some(buyer.into()),
            ..Self::default()
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn with_confidence_score(mut self, score: f64) -> Self {
        self.confidence_score = Some(score);
        self
    }

    pub fn with_strategic_fit(mut self, score: f64) -> Self {
        self.strategic_fit_score = Some(score);
        self
    }

    pub fn with_alternatives<I, S>(mut self, alts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternative_buyers = alts.into_iter().map(Into::into).collect();
        self
    }

    fn buyer_name(&self) -> Option<&str> {
        self.buyer.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }

    fn rationale_text(&self) -> Option<&str> {
        self.rationale.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }

    /// Fraction of buyer / rationale / confidence_score / strategic_fit_score present.
    fn completeness(&self) -> f64 {
        let present = [
            self.buyer_name().is_some(),
            self.rationale_text().is_some(),
            self.confidence_score.is_some(),
            self.strategic_fit_score.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();
        present as f64 / 4.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

/// One model's answer plus how much it trusts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub model: String,
    pub response: ModelAnswer,
    pub confidence: f64,
    #[serde(default)]
    pub metadata: ResponseMetadata,
}

impl ModelResponse {
    pub fn new(model: impl Into<String>, response: ModelAnswer, confidence: f64) -> Self {
        Self {
            model: model.into(),
            response,
            confidence,
            metadata: ResponseMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: ResponseMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    fn clamped_confidence(&self) -> f64 {
        clamp01(self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consensus {
    pub buyer: Option<String>,
    pub confidence: f64,
    #[serde(default)]
    pub disagreement: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub consistency: f64,
    pub completeness: f64,
    pub specificity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleResult {
    pub final_response: ModelAnswer,
    pub confidence: f64,
    pub agreement: f64,
    pub model_responses: Vec<ModelResponse>,
    pub consensus: Consensus,
    pub quality_metrics: QualityMetrics,
}

fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

fn mean(xs: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = xs.into_iter().fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Case-insensitive tally keeping the first-seen spelling.
struct Tally {
    display: String,
    key: String,
    votes: usize,
    confidences: Vec<f64>,
}

/// Plurality winner: most votes, then higher mean confidence, then first seen.
fn tally_votes(responses: &[ModelResponse]) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = Vec::new();
    for r in responses {
        let Some(name) = r.response.buyer_name() else {
            continue;
        };
        let key = normalize_key(name);
        match tallies.iter_mut().find(|t| t.key == key) {
            Some(t) => {
                t.votes += 1;
                t.confidences.push(r.clamped_confidence());
            }
            None => tallies.push(Tally {
                display: name.to_string(),
                key,
                votes: 1,
                confidences: vec![r.clamped_confidence()],
            }),
        }
    }
    let mean_conf = |t: &Tally| mean(t.confidences.iter().copied()).unwrap_or(0.0);
    // Stable sort keeps first-seen order among full ties.
    tallies.sort_by(|a, b| {
        b.votes
            .cmp(&a.votes)
            .then(mean_conf(b).total_cmp(&mean_conf(a)))
    });
    tallies
}

/// Resolver bound to a model weight table.
#[derive(Debug, Clone, Default)]
pub struct EnsembleResolver {
    weights: ModelWeightsConfig,
}

impl EnsembleResolver {
    pub fn new(weights: ModelWeightsConfig) -> Self {
        Self { weights }
    }

    pub fn model_weights(&self) -> &ModelWeightsConfig {
        &self.weights
    }

    pub fn resolve(&self, responses: Vec<ModelResponse>) -> Result<EnsembleResult, EnsembleError> {
        if responses.is_empty() {
            return Err(EnsembleError::NoResponses);
        }
        let total = responses.len() as f64;

        // 1) Consensus.
        let tallies = tally_votes(&responses);
        let winner = tallies.first();
        let agreement = winner.map_or(0.0, |w| clamp01(w.votes as f64 / total));
        let consensus_confidence = winner
            .and_then(|w| mean(w.confidences.iter().copied()))
            .map_or(0.0, |m| clamp01(m * agreement));

        let mut disagreement = Vec::new();
        if winner.is_none() {
            disagreement.push("no model named a buyer".to_string());
        } else if agreement < DISAGREEMENT_THRESHOLD {
            for t in tallies.iter().skip(1) {
                let plural = if t.votes == 1 { "" } else { "s" };
                disagreement.push(format!("{} ({} vote{plural})", t.display, t.votes));
            }
        }

        let consensus = Consensus {
            buyer: winner.map(|w| w.display.clone()),
            confidence: consensus_confidence,
            disagreement,
        };

        // 2) Quality metrics.
        let rationales: Vec<&str> = responses
            .iter()
            .filter_map(|r| r.response.rationale_text())
            .collect();
        let similarity = text::mean_pairwise_similarity(&rationales);
        let quality_metrics = QualityMetrics {
            consistency: clamp01((consensus_confidence + similarity) / 2.0),
            completeness: clamp01(mean(responses.iter().map(|r| r.response.completeness())).unwrap_or(0.0)),
            specificity: clamp01(
                mean(
                    responses
                        .iter()
                        .map(|r| r.response.rationale_text().map_or(0.0, text::specificity)),
                )
                .unwrap_or(0.0),
            ),
        };

        // 3) Merge.
        let winner_key = winner.map(|w| w.key.as_str());
        let final_response = ModelAnswer {
            buyer: consensus.buyer.clone(),
            rationale: self.best_rationale(&responses),
            confidence_score: self.weighted_field(&responses, |a| a.confidence_score),
            strategic_fit_score: self.weighted_field(&responses, |a| a.strategic_fit_score),
            alternative_buyers: alternative_buyers(&responses, winner_key),
        };

        // 4) Overall confidence.
        let mean_response_conf =
            mean(responses.iter().map(ModelResponse::clamped_confidence)).unwrap_or(0.0);
        let confidence = clamp01(
            (consensus_confidence + mean_response_conf + quality_metrics.consistency) / 3.0,
        );

        counter!("ensemble_resolutions_total").increment(1);
        gauge!("ensemble_agreement").set(agreement);
        info!(
            target: "ensemble",
            responses = responses.len(),
            buyer = consensus.buyer.as_deref().unwrap_or("-"),
            agreement,
            confidence,
            "consensus resolved"
        );

        Ok(EnsembleResult {
            final_response,
            confidence,
            agreement,
            model_responses: responses,
            consensus,
            quality_metrics,
        })
    }

    /// Model-weighted mean of a numeric answer field over the responses that have it.
    fn weighted_field<F>(&self, responses: &[ModelResponse], field: F) -> Option<f64>
    where
        F: Fn(&ModelAnswer) -> Option<f64>,
    {
        let (sum, wsum) = responses
            .iter()
            .filter_map(|r| {
                field(&r.response)
                    .filter(|v| v.is_finite())
                    .map(|v| (clamp01(v), self.weights.weight_for(&r.model)))
            })
            .fold((0.0, 0.0), |(s, ws), (v, w)| (s + v * w, ws + w));
        (wsum > 0.0).then(|| clamp01(sum / wsum))
    }

    /// Highest confidence × model weight + specificity over every response, whichever
    /// buyer it named. Ties keep the earliest response.
    fn best_rationale(&self, responses: &[ModelResponse]) -> Option<String> {
        let mut best: Option<(f64, &str)> = None;
        for r in responses {
            let Some(text) = r.response.rationale_text() else {
                continue;
            };
            let score =
                r.clamped_confidence() * self.weights.weight_for(&r.model) + text::specificity(text);
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, text));
            }
        }
        best.map(|(_, t)| t.to_string())
    }
}

/// Non-winning buyers by weighted votes: primary pick 1.0, listed alternative 0.5.
fn alternative_buyers(responses: &[ModelResponse], winner_key: Option<&str>) -> Vec<String> {
    let mut tally: Vec<(String, String, f64)> = Vec::new();
    let mut add = |name: &str, w: f64| {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let key = normalize_key(name);
        if Some(key.as_str()) == winner_key {
            return;
        }
        match tally.iter_mut().find(|(k, _, _)| *k == key) {
            Some(entry) => entry.2 += w,
            None => tally.push((key, name.to_string(), w)),
        }
    };

    for r in responses {
        let primary = r.response.buyer_name();
        if let Some(p) = primary {
            add(p, PRIMARY_VOTE);
        }
        let primary_key = primary.map(normalize_key);
        let mut seen: Vec<String> = Vec::new();
        for alt in &r.response.alternative_buyers {
            let key = normalize_key(alt);
            if Some(&key) == primary_key.as_ref() || seen.contains(&key) {
                continue;
            }
            seen.push(key);
            add(alt, ALTERNATIVE_VOTE);
        }
    }

    tally.sort_by(|a, b| b.2.total_cmp(&a.2));
    tally
        .into_iter()
        .take(MAX_ALTERNATIVES)
        .map(|(_, name, _)| name)
        .collect()
}

/// Resolve with the built-in model weight table.
pub fn resolve(responses: Vec<ModelResponse>) -> Result<EnsembleResult, EnsembleError> {
    EnsembleResolver::default().resolve(responses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(model: &str, buyer: &str, conf: f64) -> ModelResponse {
        ModelResponse::new(model, ModelAnswer::for_buyer(buyer), conf)
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(resolve(vec![]), Err(EnsembleError::NoResponses));
    }

    #[test]
    fn unanimous_vote_has_full_agreement() {
        let r = resolve(vec![resp("gpt-4o", "Pfizer", 0.8), resp("claude", "pfizer", 0.6)]).unwrap();
        assert_eq!(r.agreement, 1.0);
        assert_eq!(r.consensus.buyer.as_deref(), Some("Pfizer"));
        assert!((r.consensus.confidence - 0.7).abs() < 1e-12);
        assert!(r.consensus.disagreement.is_empty());
    }

    #[test]
    fn split_vote_records_runners_up() {
        let r = resolve(vec![
            resp("gpt-4o", "Pfizer", 0.9),
            resp("claude", "Roche", 0.9),
            resp("gemini", "Novartis", 0.9),
        ])
        .unwrap();
        assert!((r.agreement - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(r.consensus.buyer.as_deref(), Some("Pfizer"));
        assert_eq!(r.consensus.disagreement, vec!["Roche (1 vote)", "Novartis (1 vote)"]);
    }

    #[test]
    fn two_of_three_is_not_a_disagreement() {
        let r = resolve(vec![
            resp("gpt-4o", "Pfizer", 0.9),
            resp("claude", "Pfizer", 0.9),
            resp("gemini", "Roche", 0.9),
        ])
        .unwrap();
        assert!(r.consensus.disagreement.is_empty());
    }

    #[test]
    fn vote_ties_break_on_mean_confidence() {
        let r = resolve(vec![resp("a", "Roche", 0.4), resp("b", "Pfizer", 0.9)]).unwrap();
        assert_eq!(r.consensus.buyer.as_deref(), Some("Pfizer"));
    }

    #[test]
    fn null_buyers_dilute_agreement() {
        let none = ModelResponse::new("gpt-4o", ModelAnswer::default(), 0.5);
        let r = resolve(vec![resp("claude", "Pfizer", 1.0), none]).unwrap();
        assert_eq!(r.agreement, 0.5);
        assert_eq!(r.consensus.confidence, 0.5);
    }

    #[test]
    fn no_buyer_at_all_resolves_to_none() {
        let r = resolve(vec![ModelResponse::new("gpt-4o", ModelAnswer::default(), 0.5)]).unwrap();
        assert_eq!(r.consensus.buyer, None);
        assert_eq!(r.agreement, 0.0);
        assert_eq!(r.final_response.buyer, None);
    }

    #[test]
    fn numeric_fields_use_model_weights() {
        let a = ModelResponse::new(
            "gpt-4o",
            ModelAnswer::for_buyer("Pfizer").with_confidence_score(0.9),
            0.9,
        );
        let b = ModelResponse::new(
            "mistral",
            ModelAnswer::for_buyer("Pfizer").with_confidence_score(0.4),
            0.9,
        );
        let r = resolve(vec![a, b]).unwrap();
        // (0.9 * 0.35 + 0.4 * 0.1) / 0.45
        let expected = (0.9 * 0.35 + 0.4 * 0.1) / 0.45;
        assert!((r.final_response.confidence_score.unwrap() - expected).abs() < 1e-12);
        assert_eq!(r.final_response.strategic_fit_score, None);
    }

    #[test]
    fn alternatives_exclude_winner_and_weight_listed_half() {
        let r = resolve(vec![
            ModelResponse::new(
                "gpt-4o",
                ModelAnswer::for_buyer("Pfizer").with_alternatives(["Roche", "AbbVie", "Pfizer"]),
                0.8,
            ),
            ModelResponse::new(
                "claude",
                ModelAnswer::for_buyer("Pfizer").with_alternatives(["AbbVie", "Gilead"]),
                0.8,
            ),
            ModelResponse::new("gemini", ModelAnswer::for_buyer("Merck & Co"), 0.8),
        ])
        .unwrap();
        // AbbVie 1.0, Merck 1.0 (primary), Roche 0.5, Gilead 0.5
        assert_eq!(r.final_response.alternative_buyers, vec!["AbbVie", "Merck & Co", "Roche"]);
    }

    #[test]
    fn rationale_is_selected_not_concatenated() {
        let vague = "Good fit overall.";
        let specific = "Pfizer paid $43B for Seagen in 2023; ADC payload expertise and FDA track record.";
        let r = resolve(vec![
            ModelResponse::new("gpt-4o", ModelAnswer::for_buyer("Pfizer").with_rationale(vague), 0.9),
            ModelResponse::new("claude", ModelAnswer::for_buyer("Pfizer").with_rationale(specific), 0.7),
        ])
        .unwrap();
        assert_eq!(r.final_response.rationale.as_deref(), Some(specific));
    }

    #[test]
    fn completeness_averages_present_fields() {
        let full = ModelAnswer::for_buyer("Pfizer")
            .with_rationale("x")
            .with_confidence_score(0.5)
            .with_strategic_fit(0.5);
        let r = resolve(vec![
            ModelResponse::new("gpt-4o", full, 0.5),
            ModelResponse::new("claude", ModelAnswer::for_buyer("Pfizer"), 0.5),
        ])
        .unwrap();
        assert!((r.quality_metrics.completeness - 0.625).abs() < 1e-12);
    }

    #[test]
    fn overall_confidence_is_mean_of_three() {
        let r = resolve(vec![resp("gpt-4o", "Pfizer", 0.8)]).unwrap();
        // consensus 0.8, mean response 0.8, consistency (0.8 + 0.0) / 2 with no rationales
        let expected = (0.8 + 0.8 + 0.4) / 3.0;
        assert!((r.confidence - expected).abs() < 1e-12);
    }
}
