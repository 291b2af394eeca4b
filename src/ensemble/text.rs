// src/ensemble/text.rs
//! Rationale text helpers: keyword overlap and specificity bonuses.

use crate::normalize::{contains_phrase, normalize_key};
use crate::roster::DEFAULT_ROSTER;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const NUMERIC_BONUS: f64 = 0.4;
pub const COMPANY_BONUS: f64 = 0.3;
pub const TECHNICAL_BONUS: f64 = 0.3;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w+\b").expect("word regex"));

// Money, percentages, multiples, years, quarters, or any bare number.
static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[$€£]\s?\d|\b(?:19|20)\d{2}\b|\b[qh][1-4]\b|\d+(?:[.,]\d+)?\s?(?:%|x\b|bn\b|billion|million)|\d")
        .expect("numeric regex")
});

/// Known acquirer names plus common shorthand.
static COMPANY_KEYS: Lazy<Vec<String>> = Lazy::new(|| {
    let extra = ["merck", "msd", "lilly", "bms", "j&j", "jnj", "janssen", "astra", "novo", "bayer", "boehringer"];
    let mut keys: Vec<String> = DEFAULT_ROSTER
        .iter()
        .map(|c| normalize_key(&c.name))
        .chain(extra.iter().map(|e| normalize_key(e)))
        .collect();
    keys.sort();
    keys.dedup();
    keys
});

const TECHNICAL_TERMS: &[&str] = &[
    "fda",
    "ema",
    "pdufa",
    "bla",
    "nda",
    "ind",
    "phase 1",
    "phase 2",
    "phase 3",
    "pivotal",
    "breakthrough therapy",
    "fast track",
    "orphan drug",
    "accelerated approval",
    "priority review",
    "biomarker",
    "endpoint",
    "overall survival",
    "progression free",
    "mechanism of action",
    "moa",
    "pharmacokinetic",
    "payload",
    "linker",
    "exclusivity",
    "patent",
    "label expansion",
    "standard of care",
];

/// Lowercased words longer than three characters.
pub fn keywords(text: &str) -> HashSet<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|w| w.chars().count() > 3)
        .collect()
}

/// |A ∩ B| / |A ∪ B|; two empty sets score 0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Mean Jaccard over all rationale pairs. One rationale is trivially consistent (1.0);
/// none scores 0.
pub fn mean_pairwise_similarity(rationales: &[&str]) -> f64 {
    match rationales.len() {
        0 => 0.0,
        1 => 1.0,
        n => {
            let sets: Vec<HashSet<String>> = rationales.iter().map(|r| keywords(r)).collect();
            let mut sum = 0.0;
            let mut pairs = 0usize;
            for i in 0..n {
                for j in (i + 1)..n {
                    sum += jaccard(&sets[i], &sets[j]);
                    pairs += 1;
                }
            }
            sum / pairs as f64
        }
    }
}

pub fn has_numeric_detail(text: &str) -> bool {
    NUMERIC_RE.is_match(text)
}

pub fn mentions_company(text: &str) -> bool {
    let key = normalize_key(text);
    COMPANY_KEYS.iter().any(|c| contains_phrase(&key, c))
}

pub fn mentions_technical_terms(text: &str) -> bool {
    let key = normalize_key(text);
    TECHNICAL_TERMS.iter().any(|t| contains_phrase(&key, t))
}

/// 0.4 numbers + 0.3 company + 0.3 technical vocabulary, capped at 1.
pub fn specificity(text: &str) -> f64 {
    let mut s = 0.0;
    if has_numeric_detail(text) {
        s += NUMERIC_BONUS;
    }
    if mentions_company(text) {
        s += COMPANY_BONUS;
    }
    if mentions_technical_terms(text) {
        s += TECHNICAL_BONUS;
    }
    f64::min(s, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_skip_short_words() {
        let k = keywords("The ADC fits Pfizer's oncology pipeline");
        assert!(k.contains("fits"));
        assert!(k.contains("oncology"));
        assert!(!k.contains("the"));
        assert!(!k.contains("adc"));
    }

    #[test]
    fn jaccard_bounds() {
        let a = keywords("strong oncology franchise");
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(jaccard(&a, &keywords("cardiology heart")), 0.0);
        assert_eq!(jaccard(&HashSet::new(), &HashSet::new()), 0.0);
    }

    #[test]
    fn pairwise_similarity_edge_cases() {
        assert_eq!(mean_pairwise_similarity(&[]), 0.0);
        assert_eq!(mean_pairwise_similarity(&["anything"]), 1.0);
        let s = mean_pairwise_similarity(&["oncology leader", "oncology leader", "cardiology"]);
        assert!((s - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn specificity_components() {
        assert_eq!(specificity("good fit"), 0.0);
        assert_eq!(specificity("$43B deal in 2023"), NUMERIC_BONUS);
        assert_eq!(specificity("Roche has reach"), COMPANY_BONUS);
        assert_eq!(specificity("pivotal readout supports accelerated approval"), TECHNICAL_BONUS);
        assert_eq!(
            specificity("Pfizer paid $43B for Seagen; FDA accelerated approval in 2023"),
            1.0
        );
    }

    #[test]
    fn company_shorthand_is_recognized() {
        assert!(mentions_company("J&J has CAR-T capacity"));
        assert!(mentions_company("BMS fits"));
        assert!(!mentions_company("a bmsx thing"));
    }
}
