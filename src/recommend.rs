// src/recommend.rs
//! Final recommendation: the ensemble pick when it is confident enough, otherwise the
//! deterministic top buyer, otherwise nothing. Every outcome carries typed reasons.

use crate::ensemble::EnsembleResult;
use crate::normalize::normalize_key;
use crate::scoring::{TopBuyer, NO_SUITABLE_BUYER};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_ENSEMBLE_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Ensemble,
    Deterministic,
    None,
}

/// Coarse reason categories, for consistent rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    Consensus,
    Disagreement,
    QualityGate,
    Fallback,
    Other,
}

/// One explainability entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub message: String,
    /// Optional weight in [0,1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReasonKind>,
}

impl Reason {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            weight: None,
            kind: None,
        }
    }

    pub fn weighted(mut self, w: f64) -> Self {
        self.weight = Some(w.clamp(0.0, 1.0));
        self
    }

    pub fn kind(mut self, kind: ReasonKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub buyer: Option<String>,
    pub confidence: f64,
    pub source: RecommendationSource,
    /// Ensemble and deterministic picks both exist and name the same company.
    pub agrees: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<Reason>,
}

impl Recommendation {
    /// Buyer name, or the "no suitable buyer" sentinel.
    pub fn display_name(&self) -> &str {
        self.buyer.as_deref().unwrap_or(NO_SUITABLE_BUYER)
    }
}

fn same_company(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}

pub fn reconcile(
    ensemble: Option<&EnsembleResult>,
    deterministic: &TopBuyer,
    min_ensemble_confidence: f64,
) -> Recommendation {
    let det = deterministic.buyer();
    let ens_buyer = ensemble.and_then(|e| e.consensus.buyer.as_deref());
    let agrees = match (ens_buyer, det) {
        (Some(e), Some(d)) => same_company(e, &d.name),
        _ => false,
    };

    if let (Some(e), Some(buyer)) = (ensemble, ens_buyer) {
        if e.confidence >= min_ensemble_confidence {
            let votes = (e.agreement * e.model_responses.len() as f64).round() as usize;
            let mut reasons = vec![Reason::new(format!(
                "{votes} of {} models named {buyer} (agreement {:.2})",
                e.model_responses.len(),
                e.agreement
            ))
            .weighted(e.agreement)
            .kind(ReasonKind::Consensus)];
            for note in &e.consensus.disagreement {
                reasons.push(
                    Reason::new(format!("runner-up: {note}")).kind(ReasonKind::Disagreement),
                );
            }
            match det {
                Some(d) if !agrees => reasons.push(
                    Reason::new(format!(
                        "deterministic ranking prefers {} (quality {:.2})",
                        d.name, d.quality_score
                    ))
                    .weighted(d.quality_score)
                    .kind(ReasonKind::Disagreement),
                ),
                None => reasons.push(
                    Reason::new("no candidate cleared the deterministic quality gate")
                        .kind(ReasonKind::QualityGate),
                ),
                _ => {}
            }
            return Recommendation {
                buyer: Some(buyer.to_string()),
                confidence: e.confidence.clamp(0.0, 1.0),
                source: RecommendationSource::Ensemble,
                agrees,
                reasons,
            };
        }
    }

    let fallback = match ensemble {
        None => "no model responses available".to_string(),
        Some(e) if e.consensus.buyer.is_none() => "models did not name a buyer".to_string(),
        Some(e) => format!(
            "ensemble confidence {:.2} below {:.2}",
            e.confidence, min_ensemble_confidence
        ),
    };

    match det {
        Some(d) => Recommendation {
            buyer: Some(d.name.clone()),
            confidence: d.quality_score.clamp(0.0, 1.0),
            source: RecommendationSource::Deterministic,
            agrees,
            reasons: vec![
                Reason::new(fallback).kind(ReasonKind::Fallback),
                Reason::new(format!(
                    "top ranked candidate: quality {:.2}, total {:.2}",
                    d.quality_score, d.total_score
                ))
                .weighted(d.total_score)
                .kind(ReasonKind::Other),
            ],
        },
        None => Recommendation {
            buyer: None,
            confidence: 0.0,
            source: RecommendationSource::None,
            agrees: false,
            reasons: vec![
                Reason::new(fallback).kind(ReasonKind::Fallback),
                Reason::new(NO_SUITABLE_BUYER).kind(ReasonKind::QualityGate),
            ],
        },
    }
}
