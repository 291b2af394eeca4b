// src/scoring/complexity.rs
//! Asset-only complexity score plus research-area planning metadata.
//!
//! Same asset in, same assessment out. The `score` here is the `asset_complexity`
//! factor fed into every candidate's composite.

use super::factors::{is_rare_indication, ModalityFamily};
use crate::asset::{AssetProfile, StageBucket};
use crate::normalize::{contains_phrase, normalize_key};
use serde::{Deserialize, Serialize};

const BASE: f64 = 0.5;
const RARE_BONUS: f64 = 0.2;
const NOVEL_MODALITY_BONUS: f64 = 0.15;
const EARLY_STAGE_BONUS: f64 = 0.1;
const LATE_STAGE_DISCOUNT: f64 = 0.1;
const FIRST_IN_CLASS_BONUS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Low,
    Moderate,
    High,
}

impl ComplexityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            ComplexityLevel::High
        } else if score >= 0.45 {
            ComplexityLevel::Moderate
        } else {
            ComplexityLevel::Low
        }
    }
}

/// One area a diligence team would cover, with planned depth and coverage in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchArea {
    pub name: String,
    pub depth: f64,
    pub coverage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub score: f64,
    pub level: ComplexityLevel,
    /// Adjustments applied, in order.
    pub factors: Vec<String>,
    pub research_areas: Vec<ResearchArea>,
}

fn mentions_first_in_class(asset: &AssetProfile) -> bool {
    let mut text = asset.fingerprint_text();
    if let Some(notes) = &asset.notes {
        text.push(' ');
        text.push_str(notes);
    }
    let key = normalize_key(&text);
    contains_phrase(&key, "first in class") || contains_phrase(&key, "novel mechanism")
}

/// Score only; what the composite uses.
pub fn complexity_score(asset: &AssetProfile) -> f64 {
    assess_complexity(asset).score
}

pub fn assess_complexity(asset: &AssetProfile) -> ComplexityAssessment {
    let mut score = BASE;
    let mut factors = Vec::new();

    let rare = is_rare_indication(&asset.indication);
    if rare {
        score += RARE_BONUS;
        factors.push(format!("rare/orphan indication (+{RARE_BONUS})"));
    }

    let family = ModalityFamily::detect(&asset.modality);
    if family.is_novel() {
        score += NOVEL_MODALITY_BONUS;
        factors.push(format!("novel modality (+{NOVEL_MODALITY_BONUS})"));
    }

    let stage = asset.stage_bucket();
    if matches!(stage, StageBucket::Discovery | StageBucket::Preclinical) {
        score += EARLY_STAGE_BONUS;
        factors.push(format!("pre-clinical stage (+{EARLY_STAGE_BONUS})"));
    } else if stage.is_late() {
        score -= LATE_STAGE_DISCOUNT;
        factors.push(format!("late-stage asset (-{LATE_STAGE_DISCOUNT})"));
    }

    if mentions_first_in_class(asset) {
        score += FIRST_IN_CLASS_BONUS;
        factors.push(format!("first-in-class (+{FIRST_IN_CLASS_BONUS})"));
    }

    let score = score.clamp(0.1, 1.0);
    let needs_cmc = family.is_novel() || family == ModalityFamily::Adc;

    ComplexityAssessment {
        score,
        level: ComplexityLevel::from_score(score),
        factors,
        research_areas: research_areas(score, rare, needs_cmc),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Deeper but narrower diligence as complexity rises; later areas slightly lighter.
fn research_areas(score: f64, rare: bool, needs_cmc: bool) -> Vec<ResearchArea> {
    let mut names = vec![
        "clinical development",
        "regulatory pathway",
        "competitive landscape",
        "commercial potential",
    ];
    if rare {
        names.push("rare disease market access");
    }
    if needs_cmc {
        names.push("manufacturing and cmc");
    }

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let i = i as f64;
            ResearchArea {
                name: name.to_string(),
                depth: round2((0.35 + 0.55 * score - 0.04 * i).clamp(0.0, 1.0)),
                coverage: round2((0.95 - 0.35 * score - 0.03 * i).clamp(0.0, 1.0)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(indication: &str, modality: &str, stage: &str) -> AssetProfile {
        AssetProfile::new("oncology", indication, "ERBB2", modality, stage)
    }

    #[test]
    fn baseline_asset_is_moderate() {
        let a = assess_complexity(&asset("breast cancer", "monoclonal antibody", "phase 2"));
        assert_eq!(a.score, 0.5);
        assert_eq!(a.level, ComplexityLevel::Moderate);
        assert!(a.factors.is_empty());
        assert_eq!(a.research_areas.len(), 4);
    }

    #[test]
    fn rare_novel_preclinical_first_in_class_clamps_to_one() {
        let a = AssetProfile::new(
            "rare disease",
            "duchenne muscular dystrophy",
            "DMD",
            "gene therapy",
            "preclinical",
        )
        .with_notes("First-in-class AAV micro-dystrophin");
        let c = assess_complexity(&a);
        assert_eq!(c.score, 1.0);
        assert_eq!(c.level, ComplexityLevel::High);
        assert_eq!(c.factors.len(), 4);
        let names: Vec<_> = c.research_areas.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"rare disease market access"));
        assert!(names.contains(&"manufacturing and cmc"));
    }

    #[test]
    fn late_stage_small_molecule_is_low() {
        let c = assess_complexity(&asset("type 2 diabetes", "small molecule", "approved"));
        assert!((c.score - 0.4).abs() < 1e-12);
        assert_eq!(c.level, ComplexityLevel::Low);
    }

    #[test]
    fn assessment_is_deterministic() {
        let a = asset("glioblastoma", "cell therapy", "phase 1");
        assert_eq!(assess_complexity(&a), assess_complexity(&a));
        for area in assess_complexity(&a).research_areas {
            assert!((0.0..=1.0).contains(&area.depth));
            assert!((0.0..=1.0).contains(&area.coverage));
        }
    }
}
