// src/roster.rs
//! # Candidate Roster
//!
//! Static acquirer profiles scored by `crate::scoring`.
//!
//! - Loads from TOML (`[[candidates]]`) or JSON (array or `{ "candidates": [...] }`).
//! - Falls back to the built-in `seed()` roster when no file is usable.
//! - Read-only after load; scoring never mutates a profile.

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

/// Ordinal strength category for the six business factors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    #[serde(alias = "very strong", alias = "very-strong")]
    VeryStrong,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Strength {
    pub fn score(self) -> f64 {
        match self {
            Strength::VeryStrong => 1.0,
            Strength::Strong => 0.8,
            Strength::Moderate => 0.6,
            Strength::Weak => 0.3,
            Strength::Unknown => 0.5,
        }
    }
}

/// Modality-family capability flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertiseFlags {
    pub adc: bool,
    pub cell_therapy: bool,
    pub gene_therapy: bool,
    pub rna: bool,
    pub rare_disease: bool,
}

/// One potential acquirer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(default)]
    pub therapeutic_focus: Vec<String>,
    /// Canonical indications (or indication families) the company is seeking.
    /// The generic entry "rare diseases" enables the rare-disease floor.
    #[serde(default)]
    pub pipeline_gaps: Vec<String>,
    #[serde(default)]
    pub expertise: ExpertiseFlags,
    #[serde(default)]
    pub indication_expertise: Vec<String>,
    #[serde(default)]
    pub cash_position: Strength,
    #[serde(default)]
    pub deal_size_tolerance: Strength,
    #[serde(default)]
    pub geographic_reach: Strength,
    #[serde(default)]
    pub recent_deal_activity: Strength,
    #[serde(default)]
    pub regulatory_expertise: Strength,
    #[serde(default)]
    pub commercial_infrastructure: Strength,
}

impl CandidateProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            therapeutic_focus: Vec::new(),
            pipeline_gaps: Vec::new(),
            expertise: ExpertiseFlags::default(),
            indication_expertise: Vec::new(),
            cash_position: Strength::Unknown,
            deal_size_tolerance: Strength::Unknown,
            geographic_reach: Strength::Unknown,
            recent_deal_activity: Strength::Unknown,
            regulatory_expertise: Strength::Unknown,
            commercial_infrastructure: Strength::Unknown,
        }
    }

    pub fn with_focus<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.therapeutic_focus = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_gaps<I, S>(mut self, gaps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pipeline_gaps = gaps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_indications<I, S>(mut self, indications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indication_expertise = indications.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_expertise(mut self, expertise: ExpertiseFlags) -> Self {
        self.expertise = expertise;
        self
    }

    /// Set all six business factors at once, in field order:
    /// cash, deal size, geography, recent deals, regulatory, commercial.
    pub fn with_strengths(mut self, s: [Strength; 6]) -> Self {
        self.cash_position = s[0];
        self.deal_size_tolerance = s[1];
        self.geographic_reach = s[2];
        self.recent_deal_activity = s[3];
        self.regulatory_expertise = s[4];
        self.commercial_infrastructure = s[5];
        self
    }

    /// True when the company lists the generic rare-disease gap.
    pub fn seeks_rare_diseases(&self) -> bool {
        self.pipeline_gaps.iter().any(|g| {
            let g = crate::normalize::normalize_key(g);
            g == "rare diseases" || g == "rare disease"
        })
    }
}

/// Loaded roster wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonRoster {
    List(Vec<CandidateProfile>),
    Wrapped(Roster),
}

impl Roster {
    pub fn new(candidates: Vec<CandidateProfile>) -> Self {
        Self { candidates }
    }

    /// Load from a TOML or JSON file (chosen by extension; anything but `.toml` is JSON).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        if is_toml {
            toml::from_str(&raw).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            let parsed: JsonRoster =
                serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(match parsed {
                JsonRoster::List(candidates) => Roster { candidates },
                JsonRoster::Wrapped(r) => r,
            })
        }
    }

    /// Load from `path`, falling back to the built-in seed on any error.
    pub fn load_or_seed<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path.as_ref()) {
            Ok(r) => r,
            Err(e) => {
                warn!(target: "roster", error = %e, "roster load failed; using built-in seed");
                Self::seed()
            }
        }
    }

    pub fn seed() -> Self {
        Roster {
            candidates: DEFAULT_ROSTER.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn get(&self, name: &str) -> Option<&CandidateProfile> {
        self.candidates
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/* ----------------------------
Built-in seed roster
---------------------------- */

use Strength::{Moderate as M, Strong as S, VeryStrong as VS};

#[allow(clippy::too_many_arguments)]
fn seed(
    name: &str,
    focus: &[&str],
    gaps: &[&str],
    indications: &[&str],
    (adc, cell_therapy, gene_therapy, rna, rare_disease): (bool, bool, bool, bool, bool),
    strengths: [Strength; 6],
) -> CandidateProfile {
    CandidateProfile::new(name)
        .with_focus(focus.iter().copied())
        .with_gaps(gaps.iter().copied())
        .with_indications(indications.iter().copied())
        .with_expertise(ExpertiseFlags {
            adc,
            cell_therapy,
            gene_therapy,
            rna,
            rare_disease,
        })
        .with_strengths(strengths)
}

/// Eighteen large-cap acquirers. Flags are (adc, cell, gene, rna, rare).
pub static DEFAULT_ROSTER: Lazy<Vec<CandidateProfile>> = Lazy::new(|| {
    vec![
        seed(
            "Pfizer",
            &["oncology", "immunology", "rare disease", "infectious disease", "cardiovascular"],
            &["obesity", "breast cancer", "sickle cell disease", "rare diseases"],
            &["breast cancer", "non-small cell lung cancer", "prostate cancer", "bladder cancer", "hemophilia b", "sickle cell disease", "transthyretin amyloidosis", "covid-19", "atopic dermatitis"],
            (true, false, true, true, true),
            [VS, VS, VS, VS, VS, VS],
        ),
        seed(
            "Roche",
            &["oncology", "neurology", "immunology", "ophthalmology", "hematology"],
            &["obesity", "alzheimer's disease", "hepatocellular carcinoma"],
            &["breast cancer", "non-small cell lung cancer", "multiple sclerosis", "spinal muscular atrophy", "age-related macular degeneration", "hemophilia a", "diffuse large b-cell lymphoma"],
            (true, false, true, false, true),
            [VS, S, VS, S, VS, VS],
        ),
        seed(
            "Novartis",
            &["oncology", "neurology", "immunology", "cardiovascular", "hematology"],
            &["prostate cancer", "chronic kidney disease", "rare diseases"],
            &["spinal muscular atrophy", "multiple sclerosis", "heart failure", "hypercholesterolemia", "breast cancer", "chronic lymphocytic leukemia", "prostate cancer", "psoriasis"],
            (false, true, true, true, true),
            [VS, S, VS, S, VS, VS],
        ),
        seed(
            "Merck & Co",
            &["oncology", "infectious disease", "cardiovascular", "immunology"],
            &["ulcerative colitis", "crohn's disease", "acute myeloid leukemia", "non-small cell lung cancer"],
            &["melanoma", "non-small cell lung cancer", "hiv infection", "respiratory syncytial virus", "hypercholesterolemia"],
            (true, false, false, false, false),
            [VS, VS, VS, VS, VS, VS],
        ),
        seed(
            "AstraZeneca",
            &["oncology", "cardiovascular", "metabolic", "respiratory", "rare disease", "immunology"],
            &["obesity", "systemic lupus erythematosus", "rare diseases"],
            &["breast cancer", "non-small cell lung cancer", "ovarian cancer", "asthma", "chronic obstructive pulmonary disease", "chronic kidney disease", "heart failure", "type 2 diabetes"],
            (true, true, false, true, true),
            [VS, S, VS, VS, VS, VS],
        ),
        seed(
            "Johnson & Johnson",
            &["oncology", "immunology", "neurology", "psychiatry", "cardiovascular"],
            &["atopic dermatitis", "alzheimer's disease", "multiple myeloma"],
            &["multiple myeloma", "psoriasis", "crohn's disease", "ulcerative colitis", "prostate cancer", "schizophrenia", "major depressive disorder"],
            (false, true, true, false, false),
            [VS, VS, VS, S, VS, VS],
        ),
        seed(
            "Bristol Myers Squibb",
            &["oncology", "hematology", "immunology", "neurology", "cardiovascular"],
            &["schizophrenia", "alzheimer's disease", "non-small cell lung cancer"],
            &["melanoma", "multiple myeloma", "diffuse large b-cell lymphoma", "multiple sclerosis", "psoriasis", "non-small cell lung cancer", "schizophrenia"],
            (true, true, false, false, false),
            [S, S, VS, VS, VS, VS],
        ),
        seed(
            "Eli Lilly",
            &["metabolic", "neurology", "oncology", "immunology"],
            &["hypertension", "heart failure", "chronic kidney disease"],
            &["type 2 diabetes", "obesity", "alzheimer's disease", "breast cancer", "psoriasis", "atopic dermatitis", "ulcerative colitis"],
            (false, false, true, true, false),
            [VS, VS, VS, VS, VS, VS],
        ),
        seed(
            "AbbVie",
            &["immunology", "oncology", "neurology", "psychiatry", "ophthalmology"],
            &["solid tumors", "parkinson's disease", "schizophrenia", "inflammatory bowel disease"],
            &["rheumatoid arthritis", "psoriasis", "crohn's disease", "ulcerative colitis", "chronic lymphocytic leukemia", "ovarian cancer", "parkinson's disease"],
            (true, false, true, false, false),
            [S, VS, VS, VS, VS, VS],
        ),
        seed(
            "Sanofi",
            &["immunology", "rare disease", "neurology", "infectious disease", "hematology", "oncology"],
            &["multiple sclerosis", "chronic obstructive pulmonary disease", "rare diseases"],
            &["atopic dermatitis", "asthma", "hemophilia a", "fabry disease", "multiple myeloma", "multiple sclerosis"],
            (false, false, false, true, true),
            [S, S, VS, S, VS, VS],
        ),
        seed(
            "GSK",
            &["infectious disease", "respiratory", "oncology", "immunology", "hematology"],
            &["hepatitis b", "multiple myeloma", "atopic dermatitis"],
            &["hiv infection", "asthma", "chronic obstructive pulmonary disease", "respiratory syncytial virus", "multiple myeloma", "ovarian cancer", "systemic lupus erythematosus"],
            (true, false, false, true, false),
            [S, M, VS, S, VS, VS],
        ),
        seed(
            "Amgen",
            &["oncology", "cardiovascular", "immunology", "metabolic", "rare disease"],
            &["obesity", "small cell lung cancer", "rare diseases"],
            &["hypercholesterolemia", "non-small cell lung cancer", "small cell lung cancer", "multiple myeloma", "psoriasis", "asthma"],
            (false, false, false, true, true),
            [S, S, VS, S, VS, VS],
        ),
        seed(
            "Gilead",
            &["infectious disease", "oncology", "immunology", "hematology"],
            &["breast cancer", "systemic lupus erythematosus", "multiple myeloma"],
            &["hiv infection", "hepatitis b", "covid-19", "breast cancer", "diffuse large b-cell lymphoma", "acute myeloid leukemia"],
            (true, true, false, false, false),
            [S, S, VS, S, VS, VS],
        ),
        seed(
            "Novo Nordisk",
            &["metabolic", "cardiovascular", "hematology", "rare disease"],
            &["heart failure", "nonalcoholic steatohepatitis", "chronic kidney disease", "alzheimer's disease"],
            &["type 2 diabetes", "obesity", "hemophilia a", "hemophilia b", "sickle cell disease"],
            (false, false, false, true, true),
            [VS, S, VS, S, VS, VS],
        ),
        seed(
            "Takeda",
            &["gastroenterology", "rare disease", "neurology", "oncology", "hematology"],
            &["psoriasis", "systemic lupus erythematosus", "rare diseases"],
            &["ulcerative colitis", "crohn's disease", "hemophilia a", "fabry disease", "multiple myeloma", "non-small cell lung cancer"],
            (false, true, true, false, true),
            [M, M, VS, M, S, S],
        ),
        seed(
            "Vertex",
            &["rare disease", "hematology", "neurology", "nephrology"],
            &["chronic kidney disease", "amyotrophic lateral sclerosis", "rare diseases"],
            &["cystic fibrosis", "sickle cell disease", "chronic kidney disease"],
            (false, true, true, false, true),
            [S, M, M, M, S, M],
        ),
        seed(
            "Biogen",
            &["neurology", "rare disease", "psychiatry", "immunology"],
            &["systemic lupus erythematosus", "major depressive disorder", "rare diseases"],
            &["multiple sclerosis", "spinal muscular atrophy", "alzheimer's disease", "amyotrophic lateral sclerosis", "parkinson's disease"],
            (false, false, true, true, true),
            [M, M, S, M, S, S],
        ),
        seed(
            "Regeneron",
            &["immunology", "ophthalmology", "oncology", "cardiovascular", "rare disease"],
            &["obesity", "multiple myeloma", "rare diseases"],
            &["atopic dermatitis", "asthma", "age-related macular degeneration", "melanoma", "hypercholesterolemia", "chronic obstructive pulmonary disease"],
            (false, false, true, true, true),
            [S, S, S, S, VS, S],
        ),
    ]
});
