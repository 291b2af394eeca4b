// tests/normalize_vocab.rs
//! Normalizer behaviour over the full vocabulary.

use pharma_buyer_match::normalize::{
    enrich, normalize, DIRECT_PARTIAL_CONFIDENCE, MAX_SUGGESTIONS, RELATED_PARTIAL_CONFIDENCE,
    TYPO_CONFIDENCE,
};
use pharma_buyer_match::{Dimension, QualityGateError, RawAssetProfile};

#[test]
fn every_alias_resolves_exactly_in_all_dimensions() {
    for dim in Dimension::ALL {
        for term in dim.table().terms {
            for alias in std::iter::once(&term.canonical).chain(term.aliases.iter()) {
                let r = normalize(dim, alias);
                assert!(r.is_valid, "{dim}: {alias:?}");
                assert_eq!(r.confidence, 1.0, "{dim}: {alias:?}");
                assert_eq!(r.normalized, term.canonical, "{dim}: {alias:?}");
            }
        }
    }
}

#[test]
fn her2_is_erbb2_through_the_single_target_path() {
    for input in ["HER2", "her-2", " Her2/neu ", "ERBB2"] {
        let r = normalize(Dimension::Target, input);
        assert_eq!(r.normalized, "ERBB2", "{input}");
        assert_eq!(r.confidence, 1.0, "{input}");
    }
}

#[test]
fn exact_match_ignores_case_whitespace_and_punctuation() {
    let r = normalize(Dimension::Modality, "  Antibody–Drug   Conjugate ");
    assert_eq!(r.normalized, "antibody-drug conjugate");
    assert_eq!(r.confidence, 1.0);
    let r = normalize(Dimension::Indication, "CROHNS DISEASE");
    assert_eq!(r.normalized, "crohn's disease");
}

#[test]
fn typo_table_corrects_and_warns() {
    let r = normalize(Dimension::Target, "EGRF");
    assert_eq!(r.normalized, "EGFR");
    assert_eq!(r.confidence, TYPO_CONFIDENCE);
    assert_eq!(r.warnings.len(), 1);
    assert!(r.is_valid);
}

#[test]
fn substring_matches_are_capped_and_ordered() {
    let r = normalize(Dimension::Indication, "cancer");
    assert_eq!(r.confidence, DIRECT_PARTIAL_CONFIDENCE);
    assert_eq!(r.suggestions.len(), MAX_SUGGESTIONS);
    assert_eq!(r.suggestions[0], "breast cancer");
    assert_eq!(r.normalized, "breast cancer");
}

#[test]
fn input_containing_an_alias_matches_too() {
    let r = normalize(Dimension::Indication, "HER2-positive metastatic breast cancer");
    assert_eq!(r.normalized, "breast cancer");
    assert_eq!(r.confidence, DIRECT_PARTIAL_CONFIDENCE);
}

#[test]
fn plural_input_matches_the_singular_term() {
    for (input, canonical) in [("Breast cancers", "breast cancer"), ("melanomas", "melanoma")] {
        let r = normalize(Dimension::Indication, input);
        assert!(r.is_valid, "{input}");
        assert_eq!(r.normalized, canonical, "{input}");
        assert_eq!(r.confidence, DIRECT_PARTIAL_CONFIDENCE, "{input}");
    }
    assert!(normalize(Dimension::Indication, "lymphomas").is_valid);
}

#[test]
fn two_letter_input_does_not_match_inside_words() {
    let r = normalize(Dimension::Indication, "AS");
    assert!(!r.is_valid);
    assert_eq!(r.confidence, 0.0);
}

#[test]
fn related_table_scores_lower() {
    let r = normalize(Dimension::TherapeuticArea, "Cardiology");
    assert_eq!(r.normalized, "cardiovascular");
    assert_eq!(r.confidence, RELATED_PARTIAL_CONFIDENCE);
}

#[test]
fn unknown_input_passes_through_unchanged() {
    let raw = "  Zorblaxian Syndrome ";
    let r = normalize(Dimension::Indication, raw);
    assert!(!r.is_valid);
    assert_eq!(r.normalized, raw);
    assert_eq!(r.confidence, 0.0);
    assert_eq!(r.warnings, vec!["unknown indication".to_string()]);
}

#[test]
fn empty_input_is_unknown_not_a_panic() {
    let r = normalize(Dimension::AssetStage, "   ");
    assert!(!r.is_valid);
    assert_eq!(r.confidence, 0.0);
}

#[test]
fn overall_confidence_is_the_exact_mean() {
    let cases = [
        RawAssetProfile::new("Oncology", "Breast Cancer", "HER2", "ADC", "Phase 2"),
        RawAssetProfile::new("Oncolgy", "lung", "hre2", "Quantum", "whenever"),
        RawAssetProfile::new("", "", "", "", ""),
        RawAssetProfile::new("heart", "dementia", "PD-L1", "siRNA", "pivotal"),
    ];
    for raw in cases {
        let e = enrich(&raw);
        let expected = (e.therapeutic_area.confidence
            + e.indication.confidence
            + e.target.confidence
            + e.modality.confidence
            + e.asset_stage.confidence)
            / 5.0;
        assert_eq!(e.overall_confidence, expected, "{raw:?}");
    }
}

#[test]
fn enrichment_leaves_the_raw_profile_untouched() {
    let raw = RawAssetProfile::new("Oncology", "TNBC", "HER2", "ADC", "Phase II")
        .with_notes("first-in-class payload");
    let before = raw.clone();
    let asset = enrich(&raw).accept(0.6).unwrap();
    assert_eq!(raw, before);
    assert_eq!(asset.indication, "breast cancer");
    assert_eq!(asset.asset_stage, "phase 2");
    assert_eq!(asset.notes.as_deref(), Some("first-in-class payload"));
}

#[test]
fn quality_gate_names_the_unrecognized_dimensions() {
    let raw = RawAssetProfile::new("Oncology", "Zorblax", "Glorp", "ADC", "Phase 2");
    let e = enrich(&raw);
    assert!((e.overall_confidence - 0.6).abs() < 1e-12);
    let err = e.accept(0.65).unwrap_err();
    let QualityGateError::LowConfidence { unrecognized, threshold, .. } = err;
    assert_eq!(threshold, 0.65);
    assert_eq!(unrecognized, vec![Dimension::Indication, Dimension::Target]);
}
