// src/normalize.rs
//! # Terminology Normalizer
//!
//! Maps free-text asset attributes onto the canonical vocabulary in `crate::vocab`.
//!
//! Precedence per dimension:
//! 1. exact match on canonical key or alias (confidence 1.0),
//! 2. curated typo correction (0.9, with a warning),
//! 3. partial phrase containment against aliases (0.8) or related terms (0.6),
//!    collecting up to three canonical suggestions in first-found order,
//! 4. no match: input passed through unchanged, confidence 0.0, `is_valid = false`.
//!
//! In case 4 the suggestion list carries near-miss hints by edit distance; they never
//! change validity or confidence. Nothing here panics or returns `Err`.

use crate::asset::{AssetProfile, RawAssetProfile};
use crate::error::QualityGateError;
use crate::telemetry::anon_hash;
use crate::vocab::Dimension;
use metrics::counter;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strsim::normalized_levenshtein;
use tracing::debug;

pub const EXACT_CONFIDENCE: f64 = 1.0;
pub const TYPO_CONFIDENCE: f64 = 0.9;
pub const DIRECT_PARTIAL_CONFIDENCE: f64 = 0.8;
pub const RELATED_PARTIAL_CONFIDENCE: f64 = 0.6;
pub const MAX_SUGGESTIONS: usize = 3;

/// Callers reject assets whose mean confidence falls below this before scoring.
pub const DEFAULT_MIN_ENRICHMENT_CONFIDENCE: f64 = 0.6;

const NEAR_MISS_SIMILARITY: f64 = 0.6;

/// Outcome of normalizing one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub normalized: String,
    pub confidence: f64,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn matched(canonical: &str, confidence: f64) -> Self {
        Self {
            is_valid: true,
            normalized: canonical.to_string(),
            confidence,
            suggestions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn unmatched(dimension: Dimension, raw: &str, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: false,
            normalized: raw.to_string(),
            confidence: 0.0,
            suggestions,
            warnings: vec![format!("unknown {}", dimension.label())],
        }
    }
}

/* ----------------------------
Lookup index (built once)
---------------------------- */

struct DimensionIndex {
    canonicals: Vec<&'static str>,
    exact: HashMap<String, usize>,
    /// Normalized alias (canonical included) → term index, in table order.
    aliases: Vec<(String, usize)>,
    typos: HashMap<String, usize>,
    related: Vec<(String, usize)>,
}

impl DimensionIndex {
    fn build(dimension: Dimension) -> Self {
        let table = dimension.table();
        let canonicals: Vec<&'static str> = table.terms.iter().map(|t| t.canonical).collect();
        let position = |canon: &str| canonicals.iter().position(|c| *c == canon);

        let mut exact = HashMap::new();
        let mut aliases = Vec::new();
        for (i, term) in table.terms.iter().enumerate() {
            for a in std::iter::once(&term.canonical).chain(term.aliases.iter()) {
                let key = normalize_key(a);
                if key.is_empty() {
                    continue;
                }
                exact.entry(key.clone()).or_insert(i);
                aliases.push((key, i));
            }
        }

        let mut typos = HashMap::new();
        for (typo, canon) in table.typos {
            if let Some(i) = position(canon) {
                typos.entry(normalize_key(typo)).or_insert(i);
            }
        }

        let related = table
            .related
            .iter()
            .filter_map(|(term, canon)| position(canon).map(|i| (normalize_key(term), i)))
            .collect();

        Self {
            canonicals,
            exact,
            aliases,
            typos,
            related,
        }
    }
}

static INDEXES: Lazy<HashMap<Dimension, DimensionIndex>> = Lazy::new(|| {
    Dimension::ALL
        .into_iter()
        .map(|d| (d, DimensionIndex::build(d)))
        .collect()
});

fn index_for(dimension: Dimension) -> &'static DimensionIndex {
    // Every dimension is inserted above.
    &INDEXES[&dimension]
}

/* ----------------------------
Text helpers
---------------------------- */

/// Lowercase, drop apostrophes, turn separators/punctuation into spaces and
/// collapse whitespace. Both vocabulary and input go through this.
pub fn normalize_key(s: &str) -> String {
    let mut out = s.trim().to_lowercase();
    out = out.replace(['\'', '’', '`'], "");
    out = out.replace(
        [
            '—', '–', '-', '_', '/', '\\', '.', ',', '(', ')', ':', ';', '+', '&', '\n', '\r', '\t',
        ],
        " ",
    );
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word-bounded containment on normalized keys. The needle must start a word and
/// end one, optionally followed by a plural "s"/"es": "breast" is in "breast cancer",
/// "lymphoma" is in "lymphomas", "ra" is not in "rare".
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || haystack.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(at, _)| {
        let starts_word = haystack[..at].is_empty() || haystack[..at].ends_with(' ');
        starts_word && ends_word(&haystack[at + needle.len()..])
    })
}

fn ends_word(rest: &str) -> bool {
    let rest = rest
        .strip_prefix("es")
        .filter(|r| r.is_empty() || r.starts_with(' '))
        .or_else(|| rest.strip_prefix('s'))
        .unwrap_or(rest);
    rest.is_empty() || rest.starts_with(' ')
}

/// Containment in either direction, under the same word rule.
pub fn phrase_overlap(a: &str, b: &str) -> bool {
    contains_phrase(a, b) || contains_phrase(b, a)
}

fn push_unique(out: &mut Vec<usize>, i: usize) {
    if !out.contains(&i) {
        out.push(i);
    }
}

/* ----------------------------
Public API
---------------------------- */

/// Normalize a single attribute value for the given dimension.
pub fn normalize(dimension: Dimension, raw: &str) -> ValidationResult {
    let key = normalize_key(raw);
    let index = index_for(dimension);

    if key.is_empty() {
        return ValidationResult::unmatched(dimension, raw, Vec::new());
    }

    // 1) Exact / alias.
    if let Some(&i) = index.exact.get(&key) {
        return ValidationResult::matched(index.canonicals[i], EXACT_CONFIDENCE);
    }

    // 2) Curated typo table.
    if let Some(&i) = index.typos.get(&key) {
        let canonical = index.canonicals[i];
        let mut res = ValidationResult::matched(canonical, TYPO_CONFIDENCE);
        res.warnings
            .push(format!("corrected {} '{}' to '{}'", dimension.label(), raw.trim(), canonical));
        return res;
    }

    // 3) Partial containment: direct aliases first, then related terms.
    let mut direct = Vec::new();
    for (alias, i) in &index.aliases {
        if phrase_overlap(&key, alias) {
            push_unique(&mut direct, *i);
        }
    }
    let mut related = Vec::new();
    for (term, i) in &index.related {
        if phrase_overlap(&key, term) {
            push_unique(&mut related, *i);
        }
    }

    if !direct.is_empty() || !related.is_empty() {
        let confidence = if direct.is_empty() {
            RELATED_PARTIAL_CONFIDENCE
        } else {
            DIRECT_PARTIAL_CONFIDENCE
        };
        let mut found = direct;
        for i in related {
            push_unique(&mut found, i);
        }
        let suggestions: Vec<String> = found
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|i| index.canonicals[i].to_string())
            .collect();
        let normalized = suggestions[0].clone();
        let warning = format!(
            "partial match: '{}' interpreted as {} '{}'",
            raw.trim(),
            dimension.label(),
            normalized
        );
        return ValidationResult {
            is_valid: true,
            normalized,
            confidence,
            suggestions,
            warnings: vec![warning],
        };
    }

    // 4) Unknown.
    counter!("normalizer_unmatched_total").increment(1);
    debug!(
        target: "normalize",
        dimension = %dimension,
        id = %anon_hash(raw),
        "no vocabulary match"
    );
    ValidationResult::unmatched(dimension, raw, near_misses(index, &key))
}

/// Up to three canonical terms whose best alias is close by edit distance.
fn near_misses(index: &DimensionIndex, key: &str) -> Vec<String> {
    let mut best: Vec<(usize, f64)> = Vec::new();
    for (alias, i) in &index.aliases {
        let sim = normalized_levenshtein(key, alias);
        if sim < NEAR_MISS_SIMILARITY {
            continue;
        }
        match best.iter_mut().find(|(j, _)| j == i) {
            Some(entry) if entry.1 < sim => entry.1 = sim,
            Some(_) => {}
            None => best.push((*i, sim)),
        }
    }
    // Stable: equal similarity keeps table order.
    best.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    best.into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(i, _)| index.canonicals[i].to_string())
        .collect()
}

/* ----------------------------
Whole-asset enrichment
---------------------------- */

/// Five per-dimension results plus their arithmetic mean confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub therapeutic_area: ValidationResult,
    pub indication: ValidationResult,
    pub target: ValidationResult,
    pub modality: ValidationResult,
    pub asset_stage: ValidationResult,
    pub overall_confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl EnrichmentResult {
    pub fn result(&self, dimension: Dimension) -> &ValidationResult {
        match dimension {
            Dimension::TherapeuticArea => &self.therapeutic_area,
            Dimension::Indication => &self.indication,
            Dimension::Target => &self.target,
            Dimension::Modality => &self.modality,
            Dimension::AssetStage => &self.asset_stage,
        }
    }

    /// Dimensions that did not match the vocabulary at all.
    pub fn unrecognized(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| !self.result(*d).is_valid)
            .collect()
    }

    /// The canonical asset, regardless of confidence.
    pub fn normalized_asset(&self) -> AssetProfile {
        AssetProfile {
            therapeutic_area: self.therapeutic_area.normalized.clone(),
            indication: self.indication.normalized.clone(),
            target: self.target.normalized.clone(),
            modality: self.modality.normalized.clone(),
            asset_stage: self.asset_stage.normalized.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Quality gate: the canonical asset if `overall_confidence >= threshold`.
    pub fn accept(&self, threshold: f64) -> Result<AssetProfile, QualityGateError> {
        if self.overall_confidence < threshold {
            return Err(QualityGateError::LowConfidence {
                confidence: self.overall_confidence,
                threshold,
                unrecognized: self.unrecognized(),
            });
        }
        Ok(self.normalized_asset())
    }
}

/// Normalize all five attributes of a raw asset.
pub fn enrich(raw: &RawAssetProfile) -> EnrichmentResult {
    let therapeutic_area = normalize(Dimension::TherapeuticArea, &raw.therapeutic_area);
    let indication = normalize(Dimension::Indication, &raw.indication);
    let target = normalize(Dimension::Target, &raw.target);
    let modality = normalize(Dimension::Modality, &raw.modality);
    let asset_stage = normalize(Dimension::AssetStage, &raw.asset_stage);

    let overall_confidence = [
        therapeutic_area.confidence,
        indication.confidence,
        target.confidence,
        modality.confidence,
        asset_stage.confidence,
    ]
    .iter()
    .sum::<f64>()
        / 5.0;

    EnrichmentResult {
        therapeutic_area,
        indication,
        target,
        modality,
        asset_stage,
        overall_confidence,
        notes: raw.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_normalization_collapses_punctuation() {
        assert_eq!(normalize_key("  Antibody–Drug  Conjugate "), "antibody drug conjugate");
        assert_eq!(normalize_key("Crohn's Disease"), "crohns disease");
        assert_eq!(normalize_key("HER2/neu"), "her2 neu");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn phrase_containment_is_word_bounded() {
        assert!(contains_phrase("breast cancer", "breast"));
        assert!(contains_phrase("non small cell lung cancer", "lung cancer"));
        assert!(!contains_phrase("rare disease", "ra"));
        assert!(!contains_phrase("x", ""));
        assert!(!contains_phrase("alzheimers disease", "as"));
    }

    #[test]
    fn phrase_containment_allows_plurals() {
        assert!(contains_phrase("breast cancers", "breast cancer"));
        assert!(contains_phrase("lymphomas", "lymphoma"));
        assert!(contains_phrase("rare diseases", "rare disease"));
        assert!(contains_phrase("sinuses", "sinus"));
        assert!(!contains_phrase("lymphomata", "lymphoma"));
        assert!(!contains_phrase("rarest", "ra"));
        assert!(phrase_overlap("melanoma", "metastatic melanomas"));
    }

    #[test]
    fn exact_alias_is_full_confidence() {
        let r = normalize(Dimension::Target, "HER2");
        assert!(r.is_valid);
        assert_eq!(r.normalized, "ERBB2");
        assert_eq!(r.confidence, EXACT_CONFIDENCE);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn typo_is_corrected_with_warning() {
        let r = normalize(Dimension::TherapeuticArea, "Oncolgy");
        assert_eq!(r.normalized, "oncology");
        assert_eq!(r.confidence, TYPO_CONFIDENCE);
        assert!(r.warnings[0].contains("corrected"));
    }

    #[test]
    fn partial_match_collects_suggestions_in_order() {
        let r = normalize(Dimension::Indication, "lung");
        assert!(r.is_valid);
        assert_eq!(r.confidence, DIRECT_PARTIAL_CONFIDENCE);
        assert!(r.suggestions.len() <= MAX_SUGGESTIONS);
        assert_eq!(r.suggestions[0], "non-small cell lung cancer");
        assert_eq!(r.normalized, r.suggestions[0]);
    }

    #[test]
    fn related_term_match_is_lower_confidence() {
        let r = normalize(Dimension::Indication, "dementia");
        assert_eq!(r.normalized, "alzheimer's disease");
        assert_eq!(r.confidence, RELATED_PARTIAL_CONFIDENCE);
    }

    #[test]
    fn unknown_passes_input_through() {
        let r = normalize(Dimension::Modality, "Quantum Elixir");
        assert!(!r.is_valid);
        assert_eq!(r.normalized, "Quantum Elixir");
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.warnings, vec!["unknown modality".to_string()]);
    }

    #[test]
    fn unknown_gets_near_miss_hints() {
        let r = normalize(Dimension::TherapeuticArea, "neurologie");
        assert!(!r.is_valid);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.suggestions.first().map(String::as_str), Some("neurology"));
    }

    #[test]
    fn typo_entries_never_shadow_an_alias() {
        for dim in Dimension::ALL {
            let idx = index_for(dim);
            for key in idx.typos.keys() {
                assert!(!idx.exact.contains_key(key), "{dim}: typo {key:?} is also an alias");
            }
        }
    }
}
