// tests/scoring_ranking.rs
//! Ranking order, quality filtering and the top-buyer gate.

use pharma_buyer_match::scoring::{
    rank, ranks_before, score, score_candidate, top_of, ScoreBreakdown, MIN_QUALITY,
    TOP_BUYER_MIN_QUALITY,
};
use pharma_buyer_match::{
    enrich, AssetProfile, BuyerScore, CandidateProfile, ConfidenceLevel, ExpertiseFlags,
    RawAssetProfile, Roster, ScoringEngine, ScoringWeights, Strength, TopBuyer,
};
use std::collections::BTreeMap;

fn her2_adc() -> AssetProfile {
    AssetProfile::new(
        "oncology",
        "breast cancer",
        "ERBB2",
        "antibody-drug conjugate",
        "phase 2",
    )
}

fn oncology_candidate(name: &str, adc: bool) -> CandidateProfile {
    CandidateProfile::new(name)
        .with_focus(["oncology"])
        .with_gaps(["breast cancer"])
        .with_indications(["breast cancer"])
        .with_expertise(ExpertiseFlags {
            adc,
            ..ExpertiseFlags::default()
        })
        .with_strengths([Strength::Strong; 6])
}

fn assert_adjacent_order(list: &[BuyerScore]) {
    for pair in list.windows(2) {
        assert!(
            ranks_before(&pair[0], &pair[1]),
            "{} (q={}, t={}) placed above {} (q={}, t={})",
            pair[0].name,
            pair[0].quality_score,
            pair[0].total_score,
            pair[1].name,
            pair[1].quality_score,
            pair[1].total_score,
        );
    }
}

fn synthetic(name: &str, quality: f64, total: f64) -> BuyerScore {
    BuyerScore {
        name: name.to_string(),
        total_score: total,
        quality_score: quality,
        confidence_level: ConfidenceLevel::classify(quality, total),
        breakdown: ScoreBreakdown {
            therapeutic_alignment: 0.0,
            pipeline_gap: 0.0,
            modality_expertise: 0.0,
            indication_expertise: 0.0,
            cash_position: 0.0,
            deal_size_tolerance: 0.0,
            regulatory_expertise: 0.0,
            commercial_infrastructure: 0.0,
            geographic_reach: 0.0,
            asset_complexity: 0.0,
            recent_deal_activity: 0.0,
        },
    }
}

#[test]
fn adc_expertise_decides_between_otherwise_equal_candidates() {
    let roster = vec![
        oncology_candidate("Plain Oncology", false),
        oncology_candidate("Conjugate Oncology", true),
    ];
    let ranked = score(&her2_adc(), &roster, &ScoringWeights::default());
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "Conjugate Oncology");
    assert_eq!(ranked[0].quality_score, 1.0);
    assert_eq!(ranked[1].quality_score, 0.85);
    assert!(ranked[0].total_score > ranked[1].total_score);
    assert_eq!(ranked[0].confidence_level, ConfidenceLevel::High);
}

#[test]
fn seed_roster_puts_an_adc_specialist_on_top_for_her2_adc() {
    let engine = ScoringEngine::with_default_roster();
    let top = engine.top_buyer(&her2_adc());
    let best = top.buyer().expect("a buyer clears the gate");
    assert_eq!(best.name, "Pfizer");
    assert!(best.quality_score >= TOP_BUYER_MIN_QUALITY);
}

#[test]
fn scoring_is_deterministic() {
    let engine = ScoringEngine::with_default_roster();
    let asset = her2_adc();
    let a = serde_json::to_string(&engine.score(&asset)).unwrap();
    let b = serde_json::to_string(&engine.score(&asset)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn ranked_lists_respect_floor_and_adjacency_across_assets() {
    let engine = ScoringEngine::with_default_roster();
    let areas = ["oncology", "immunology", "neurology", "cardiovascular", "rare disease"];
    let indications = [
        "breast cancer",
        "non-small cell lung cancer",
        "psoriasis",
        "alzheimer's disease",
        "heart failure",
        "spinal muscular atrophy",
        "sickle cell disease",
    ];
    let modalities = [
        "antibody-drug conjugate",
        "small molecule",
        "gene therapy",
        "cell therapy",
        "monoclonal antibody",
    ];
    let stages = ["preclinical", "phase 2", "phase 3"];

    let mut nonempty = 0;
    for area in areas {
        for ind in indications {
            for modality in modalities {
                for stage in stages {
                    let asset = AssetProfile::new(area, ind, "EGFR", modality, stage);
                    let ranked = engine.score(&asset);
                    assert!(ranked.len() <= engine.roster().len());
                    assert!(ranked.iter().all(|b| b.quality_score >= MIN_QUALITY));
                    assert!(ranked
                        .iter()
                        .all(|b| (0.0..=1.0).contains(&b.total_score)));
                    assert_adjacent_order(&ranked);
                    if !ranked.is_empty() {
                        nonempty += 1;
                    }
                }
            }
        }
    }
    assert!(nonempty > 0);
}

#[test]
fn rank_handles_non_transitive_tie_bands() {
    let ranked = rank(vec![
        synthetic("A", 0.8, 0.1),
        synthetic("B", 0.75, 0.5),
        synthetic("C", 0.7, 0.9),
    ]);
    let names: Vec<&str> = ranked.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["C", "B", "A"]);
    assert_adjacent_order(&ranked);
}

#[test]
fn rank_keeps_the_invariant_on_a_pseudo_random_field() {
    let qualities = [0.3, 0.35, 0.45, 0.5, 0.6, 0.65, 0.7, 0.75, 0.85, 0.9, 1.0];
    let mut seed: u64 = 0x5eed;
    let mut next = || {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };
    for round in 0..50 {
        let items: Vec<BuyerScore> = (0..12)
            .map(|i| {
                let q = qualities[next() % qualities.len()];
                let t = (next() % 1000) as f64 / 1000.0;
                synthetic(&format!("c{round}-{i}"), q, t)
            })
            .collect();
        let ranked = rank(items);
        assert_eq!(ranked.len(), 12);
        assert_adjacent_order(&ranked);
    }
}

#[test]
fn rank_drops_low_quality_entries() {
    let ranked = rank(vec![
        synthetic("keep", 0.3, 0.2),
        synthetic("drop", 0.25, 0.99),
    ]);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].name, "keep");
}

#[test]
fn unrecognized_short_indication_does_not_match_by_letters() {
    // "AS" is unknown to the vocabulary and passes through as-is; the rest clears the gate.
    let raw = RawAssetProfile::new("Immunology", "AS", "TNF", "monoclonal antibody", "phase 2");
    let enrichment = enrich(&raw);
    assert!(!enrichment.indication.is_valid);
    let asset = enrichment.accept(0.6).unwrap();
    assert_eq!(asset.indication, "AS");

    let candidate = CandidateProfile::new("Unrelated Neuro")
        .with_focus(["immunology"])
        .with_gaps(["alzheimer's disease"])
        .with_indications(["breast cancer"]);
    let b = score_candidate(&asset, &candidate, &ScoringWeights::default(), 0.5);
    assert_eq!(b.breakdown.pipeline_gap, 0.2);
    assert_eq!(b.breakdown.indication_expertise, 0.3);
    assert_eq!(b.quality_score, 0.5);
    assert_ne!(b.confidence_level, ConfidenceLevel::High);
}

#[test]
fn plural_indications_still_match_gaps() {
    let asset = AssetProfile::new("oncology", "melanomas", "BRAF", "small molecule", "phase 2");
    let candidate = CandidateProfile::new("Skin Oncology")
        .with_focus(["oncology"])
        .with_gaps(["melanoma"])
        .with_indications(["melanoma"]);
    let b = score_candidate(&asset, &candidate, &ScoringWeights::default(), 0.5);
    assert_eq!(b.breakdown.pipeline_gap, 0.8);
    assert_eq!(b.breakdown.indication_expertise, 0.8);
}

#[test]
fn sub_threshold_leader_yields_the_sentinel() {
    // Focus matches but nothing else does: quality 0.25 + 0.05 + 0.05.
    let weak = CandidateProfile::new("Generalist")
        .with_focus(["oncology"])
        .with_gaps(["psoriasis"]);
    let ranked = score(&her2_adc(), &[weak], &ScoringWeights::default());
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].quality_score, 0.35);

    let top = top_of(&ranked);
    assert_eq!(top, TopBuyer::NoSuitableBuyer);
    assert_eq!(top.name(), "no suitable buyer");
    assert_eq!(top.to_string(), "no suitable buyer");
}

#[test]
fn empty_roster_scores_to_nothing() {
    let engine = ScoringEngine::new(Roster::default(), ScoringWeights::default());
    assert!(engine.score(&her2_adc()).is_empty());
    assert_eq!(engine.top_buyer(&her2_adc()), TopBuyer::NoSuitableBuyer);
}

#[test]
fn off_scale_weights_rank_like_the_defaults() {
    let doubled: BTreeMap<String, f64> = ScoringWeights::KEYS
        .iter()
        .zip(ScoringWeights::default().as_array())
        .map(|(k, v)| (k.to_string(), v * 2.0))
        .collect();
    let weights = ScoringWeights::with_overrides(&doubled).unwrap();
    assert!((weights.sum() - 1.0).abs() < 1e-9);

    let asset = her2_adc();
    let roster = Roster::seed();
    let a = score(&asset, &roster.candidates, &ScoringWeights::default());
    let b = score(&asset, &roster.candidates, &weights);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert!((x.total_score - y.total_score).abs() < 1e-9);
        assert_eq!(x.quality_score, y.quality_score);
    }
}

#[test]
fn scoring_does_not_touch_the_roster() {
    let roster = Roster::seed();
    let before = roster.clone();
    let _ = score(&her2_adc(), &roster.candidates, &ScoringWeights::default());
    assert_eq!(roster, before);
}
