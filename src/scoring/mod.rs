// src/scoring/mod.rs
//! # Scoring Engine
//!
//! Eleven factors per candidate, combined into a composite `total_score`, plus a
//! separate threshold-banded `quality_score` that filters and primarily ranks.
//!
//! Pipeline per call:
//! 1. compute the asset-only complexity factor once,
//! 2. score every roster entry (`score_candidate`),
//! 3. drop candidates with quality < `MIN_QUALITY`,
//! 4. order by quality, using total score inside the 0.1 tie band (`rank`).
//!
//! Pure and deterministic; roster and weights are only read.

pub mod complexity;
pub mod factors;
pub mod weights;

pub use complexity::{assess_complexity, ComplexityAssessment, ComplexityLevel, ResearchArea};
pub use weights::ScoringWeights;

use crate::asset::AssetProfile;
use crate::roster::{CandidateProfile, Roster};
use crate::telemetry::anon_hash;
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use weights::PRIMARY_BLEND;

/// Candidates below this quality are dropped from every ranked list.
pub const MIN_QUALITY: f64 = 0.3;
/// `top_buyer` only names a candidate at or above this quality.
pub const TOP_BUYER_MIN_QUALITY: f64 = 0.4;
/// Quality differences up to this are ranked by total score instead.
pub const QUALITY_TIE_BAND: f64 = 0.1;
pub const NO_SUITABLE_BUYER: &str = "no suitable buyer";

const EPS: f64 = 1e-9;

/// The eleven raw factor scores, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
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

impl ScoreBreakdown {
    /// Therapeutic alignment blended 60/40 with modality expertise.
    pub fn blended_therapeutic(&self) -> f64 {
        PRIMARY_BLEND * self.therapeutic_alignment + (1.0 - PRIMARY_BLEND) * self.modality_expertise
    }

    /// Pipeline gap blended 60/40 with indication expertise.
    pub fn blended_pipeline(&self) -> f64 {
        PRIMARY_BLEND * self.pipeline_gap + (1.0 - PRIMARY_BLEND) * self.indication_expertise
    }

    /// Two-level weighted composite, clamped to [0,1].
    pub fn composite(&self, w: &ScoringWeights) -> f64 {
        let total = w.therapeutic_alignment * self.blended_therapeutic()
            + w.pipeline_gap * self.blended_pipeline()
            + w.modality_expertise * self.modality_expertise
            + w.indication_expertise * self.indication_expertise
            + w.cash_position * self.cash_position
            + w.deal_size_tolerance * self.deal_size_tolerance
            + w.regulatory_expertise * self.regulatory_expertise
            + w.commercial_infrastructure * self.commercial_infrastructure
            + w.geographic_reach * self.geographic_reach
            + w.asset_complexity * self.asset_complexity
            + w.recent_deal_activity * self.recent_deal_activity;
        total.clamp(0.0, 1.0)
    }

    /// Banded quality: rewards candidates strong on fit, expertise and need at once.
    pub fn quality(&self) -> f64 {
        let band = |x: f64, hi: f64, mid: f64, lo: f64| {
            if x >= 0.8 {
                hi
            } else if x >= 0.6 {
                mid
            } else {
                lo
            }
        };
        let q = band(self.blended_therapeutic(), 0.4, 0.25, 0.1)
            + band(self.indication_expertise, 0.3, 0.2, 0.05)
            + band(self.pipeline_gap, 0.3, 0.2, 0.05);
        // Band sums are multiples of 0.05; drop float noise.
        ((q * 1e6).round() / 1e6).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn classify(quality: f64, total: f64) -> Self {
        if quality >= 0.8 && total >= 0.7 {
            ConfidenceLevel::High
        } else if quality >= 0.6 && total >= 0.5 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// One candidate's outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerScore {
    pub name: String,
    pub total_score: f64,
    pub quality_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub breakdown: ScoreBreakdown,
}

/// Single best answer, or the explicit sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopBuyer {
    Buyer(BuyerScore),
    NoSuitableBuyer,
}

impl TopBuyer {
    pub fn name(&self) -> &str {
        match self {
            TopBuyer::Buyer(b) => &b.name,
            TopBuyer::NoSuitableBuyer => NO_SUITABLE_BUYER,
        }
    }

    pub fn buyer(&self) -> Option<&BuyerScore> {
        match self {
            TopBuyer::Buyer(b) => Some(b),
            TopBuyer::NoSuitableBuyer => None,
        }
    }
}

impl fmt::Display for TopBuyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score one candidate against an asset. `complexity` is the asset-only factor.
pub fn score_candidate(
    asset: &AssetProfile,
    candidate: &CandidateProfile,
    weights: &ScoringWeights,
    complexity: f64,
) -> BuyerScore {
    let stage = asset.stage_bucket();
    let breakdown = ScoreBreakdown {
        therapeutic_alignment: factors::therapeutic_alignment(
            &asset.therapeutic_area,
            &candidate.therapeutic_focus,
        ),
        pipeline_gap: factors::pipeline_gap(
            &asset.indication,
            &candidate.pipeline_gaps,
            candidate.seeks_rare_diseases(),
        ),
        modality_expertise: factors::modality_expertise(&asset.modality, &candidate.expertise),
        indication_expertise: factors::indication_expertise(
            &asset.indication,
            &candidate.indication_expertise,
            candidate.expertise.rare_disease,
        ),
        cash_position: candidate.cash_position.score(),
        deal_size_tolerance: factors::deal_size_tolerance(candidate.deal_size_tolerance, stage),
        regulatory_expertise: candidate.regulatory_expertise.score(),
        commercial_infrastructure: candidate.commercial_infrastructure.score(),
        geographic_reach: candidate.geographic_reach.score(),
        asset_complexity: complexity.clamp(0.0, 1.0),
        recent_deal_activity: candidate.recent_deal_activity.score(),
    };

    let total_score = breakdown.composite(weights);
    let quality_score = breakdown.quality();
    BuyerScore {
        name: candidate.name.clone(),
        total_score,
        quality_score,
        confidence_level: ConfidenceLevel::classify(quality_score, total_score),
        breakdown,
    }
}

/// May `a` sit directly above `b`?
pub fn ranks_before(a: &BuyerScore, b: &BuyerScore) -> bool {
    let dq = a.quality_score - b.quality_score;
    dq > QUALITY_TIE_BAND + EPS
        || (dq.abs() <= QUALITY_TIE_BAND + EPS && a.total_score >= b.total_score)
}

/// Filter below `MIN_QUALITY` and order so every adjacent pair satisfies `ranks_before`.
///
/// The tie-band rule is not transitive, so a comparator sort cannot guarantee it.
/// Instead: pre-sort by (quality, total) descending, then insert each entry after the
/// last position that may precede it. Whenever `ranks_before(p, x)` fails,
/// `ranks_before(x, p)` holds, so the insertion point always fits both neighbours.
pub fn rank(scores: Vec<BuyerScore>) -> Vec<BuyerScore> {
    let mut kept: Vec<BuyerScore> = scores
        .into_iter()
        .filter(|s| s.quality_score >= MIN_QUALITY)
        .collect();
    kept.sort_by(|a, b| {
        b.quality_score
            .total_cmp(&a.quality_score)
            .then(b.total_score.total_cmp(&a.total_score))
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut out: Vec<BuyerScore> = Vec::with_capacity(kept.len());
    for x in kept {
        let at = match out.last() {
            None => 0,
            Some(last) if ranks_before(last, &x) => out.len(),
            Some(_) => out
                .iter()
                .rposition(|p| ranks_before(p, &x))
                .map_or(0, |j| j + 1),
        };
        out.insert(at, x);
    }
    out
}

/// Score and rank a whole roster.
pub fn score(
    asset: &AssetProfile,
    roster: &[CandidateProfile],
    weights: &ScoringWeights,
) -> Vec<BuyerScore> {
    let complexity = complexity::complexity_score(asset);
    let scored: Vec<BuyerScore> = roster
        .iter()
        .map(|c| score_candidate(asset, c, weights, complexity))
        .collect();
    let considered = scored.len();
    let ranked = rank(scored);
    let filtered = considered - ranked.len();

    counter!("buyer_scoring_runs_total").increment(1);
    counter!("buyer_candidates_filtered_total").increment(filtered as u64);
    histogram!("buyer_candidates_ranked").record(ranked.len() as f64);
    debug!(
        target: "scoring",
        id = %anon_hash(&asset.fingerprint_text()),
        considered,
        filtered,
        top = ranked.first().map(|b| b.name.as_str()).unwrap_or("-"),
        "scored roster"
    );
    ranked
}

/// First ranked candidate if its quality clears `TOP_BUYER_MIN_QUALITY`.
pub fn top_of(ranked: &[BuyerScore]) -> TopBuyer {
    match ranked.first() {
        Some(b) if b.quality_score >= TOP_BUYER_MIN_QUALITY => TopBuyer::Buyer(b.clone()),
        _ => TopBuyer::NoSuitableBuyer,
    }
}

/// A roster and weight vector bound together.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    roster: Roster,
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(roster: Roster, weights: ScoringWeights) -> Self {
        Self { roster, weights }
    }

    /// Built-in seed roster, default weights.
    pub fn with_default_roster() -> Self {
        Self::new(Roster::seed(), ScoringWeights::default())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, asset: &AssetProfile) -> Vec<BuyerScore> {
        score(asset, &self.roster.candidates, &self.weights)
    }

    pub fn top_buyer(&self, asset: &AssetProfile) -> TopBuyer {
        top_of(&self.score(asset))
    }
}
