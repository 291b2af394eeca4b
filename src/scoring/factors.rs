// src/scoring/factors.rs
//! Per-factor scoring functions. Each returns a value in [0,1] and depends only
//! on its arguments.

use crate::asset::StageBucket;
use crate::normalize::{contains_phrase, normalize_key, phrase_overlap};
use crate::roster::{ExpertiseFlags, Strength};
use crate::vocab::{AREA_AFFINITY, INDICATION_FAMILIES, RARE_INDICATIONS};

pub const EXACT: f64 = 1.0;
pub const PARTIAL: f64 = 0.8;
pub const RELATED: f64 = 0.6;
pub const NO_MATCH: f64 = 0.2;
pub const RARE_GAP_FLOOR: f64 = 0.4;

/// Pairwise lookup in a (key → related[]) table, checked both ways.
fn related_in(table: &[(&str, &[&str])], a: &str, b: &str) -> bool {
    table.iter().any(|(k, rel)| {
        let k = normalize_key(k);
        (k == a && rel.iter().any(|r| normalize_key(r) == b))
            || (k == b && rel.iter().any(|r| normalize_key(r) == a))
    })
}

/// Asset area vs. the candidate's therapeutic focus: 1.0 / 0.8 / 0.6 / 0.2.
pub fn therapeutic_alignment(asset_area: &str, focus: &[String]) -> f64 {
    let area = normalize_key(asset_area);
    let keys: Vec<String> = focus.iter().map(|f| normalize_key(f)).collect();

    if keys.iter().any(|f| *f == area) {
        EXACT
    } else if keys.iter().any(|f| phrase_overlap(&area, f)) {
        PARTIAL
    } else if keys.iter().any(|f| related_in(AREA_AFFINITY, &area, f)) {
        RELATED
    } else {
        NO_MATCH
    }
}

/// Asset indication vs. the candidate's declared pipeline gaps.
///
/// Same tiers as therapeutic alignment, with indication families as the related
/// table. An unmatched rare indication scores 0.4 for candidates seeking "rare diseases".
pub fn pipeline_gap(indication: &str, gaps: &[String], seeks_rare: bool) -> f64 {
    let ind = normalize_key(indication);
    let keys: Vec<String> = gaps.iter().map(|g| normalize_key(g)).collect();

    if keys.iter().any(|g| *g == ind) {
        EXACT
    } else if keys.iter().any(|g| phrase_overlap(&ind, g)) {
        PARTIAL
    } else if keys.iter().any(|g| related_in(INDICATION_FAMILIES, &ind, g)) {
        RELATED
    } else if seeks_rare && is_rare_indication(indication) {
        RARE_GAP_FLOOR
    } else {
        NO_MATCH
    }
}

/// Coarse modality family, detected by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalityFamily {
    Adc,
    CellTherapy,
    GeneTherapy,
    Rna,
    SmallMolecule,
    Other,
}

impl ModalityFamily {
    pub fn detect(modality: &str) -> Self {
        let m = normalize_key(modality);
        let any = |words: &[&str]| words.iter().any(|w| contains_phrase(&m, w));

        if any(&["antibody drug conjugate", "adc", "drug conjugate", "immunoconjugate"]) {
            ModalityFamily::Adc
        } else if any(&["cell therapy", "car t", "cart", "car nk", "tcr t", "cellular therapy"]) {
            ModalityFamily::CellTherapy
        } else if any(&["gene therapy", "gene editing", "aav", "crispr", "base editing"]) {
            ModalityFamily::GeneTherapy
        } else if any(&["rna", "rna therapeutic", "sirna", "rnai", "antisense", "aso", "oligonucleotide"]) {
            ModalityFamily::Rna
        } else if any(&["small molecule", "small molecules"]) {
            ModalityFamily::SmallMolecule
        } else {
            ModalityFamily::Other
        }
    }

    /// Cell, gene and RNA platforms count as novel for complexity purposes.
    pub fn is_novel(self) -> bool {
        matches!(
            self,
            ModalityFamily::CellTherapy | ModalityFamily::GeneTherapy | ModalityFamily::Rna
        )
    }
}

/// Expertise flag for the detected family, with per-family miss penalties.
pub fn modality_expertise(modality: &str, flags: &ExpertiseFlags) -> f64 {
    let hit = |flag: bool, miss: f64| if flag { 1.0 } else { miss };
    match ModalityFamily::detect(modality) {
        ModalityFamily::GeneTherapy => hit(flags.gene_therapy, 0.2),
        ModalityFamily::CellTherapy => hit(flags.cell_therapy, 0.2),
        ModalityFamily::Adc => hit(flags.adc, 0.3),
        ModalityFamily::Rna => hit(flags.rna, 0.3),
        ModalityFamily::SmallMolecule => 0.8,
        ModalityFamily::Other => 0.5,
    }
}

/// Asset indication vs. the candidate's named indication expertise.
pub fn indication_expertise(indication: &str, expertise: &[String], rare_flag: bool) -> f64 {
    let ind = normalize_key(indication);
    let keys: Vec<String> = expertise.iter().map(|e| normalize_key(e)).collect();

    if keys.iter().any(|e| *e == ind) {
        EXACT
    } else if keys.iter().any(|e| phrase_overlap(&ind, e)) {
        PARTIAL
    } else if is_rare_indication(indication) {
        if rare_flag {
            0.7
        } else {
            0.4
        }
    } else {
        0.3
    }
}

/// Orphan status: listed rare indication, or the text says "rare"/"orphan".
pub fn is_rare_indication(indication: &str) -> bool {
    let ind = normalize_key(indication);
    RARE_INDICATIONS.iter().any(|r| normalize_key(r) == ind)
        || contains_phrase(&ind, "rare")
        || contains_phrase(&ind, "orphan")
}

/// Ordinal category → score, scaled by stage for deal-size tolerance.
pub fn deal_size_tolerance(strength: Strength, stage: StageBucket) -> f64 {
    let base = strength.score();
    let scaled = if stage.is_late() {
        base * 1.2
    } else if stage.is_early() {
        base * 0.8
    } else {
        base
    };
    scaled.min(1.0)
}
