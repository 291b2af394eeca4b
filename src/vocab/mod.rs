// src/vocab/mod.rs
//! # Vocabulary Tables
//!
//! Static canonical term sets for the five asset dimensions. Each dimension carries:
//! - `terms`: canonical form + known aliases/synonyms,
//! - `typos`: curated misspellings → canonical form,
//! - `related`: looser related terms → canonical form (e.g. "dementia" → Alzheimer's).
//!
//! Pure data. Lookup logic lives in `crate::normalize`; the scorer reads the
//! affinity/family tables at the bottom of this module.

mod indications;
mod targets;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use indications::{INDICATION_FAMILIES, RARE_INDICATIONS};

/// One canonical entry and its aliases.
#[derive(Debug, Clone, Copy)]
pub struct Term {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// All vocabulary for a single dimension.
#[derive(Debug, Clone, Copy)]
pub struct VocabTable {
    pub terms: &'static [Term],
    /// (misspelling, canonical)
    pub typos: &'static [(&'static str, &'static str)],
    /// (related term, canonical)
    pub related: &'static [(&'static str, &'static str)],
}

/// The five normalized asset attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    TherapeuticArea,
    Indication,
    Target,
    Modality,
    AssetStage,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::TherapeuticArea,
        Dimension::Indication,
        Dimension::Target,
        Dimension::Modality,
        Dimension::AssetStage,
    ];

    /// Human-readable label used in warnings ("unknown therapeutic area").
    pub fn label(self) -> &'static str {
        match self {
            Dimension::TherapeuticArea => "therapeutic area",
            Dimension::Indication => "indication",
            Dimension::Target => "target",
            Dimension::Modality => "modality",
            Dimension::AssetStage => "asset stage",
        }
    }

    pub fn table(self) -> &'static VocabTable {
        match self {
            Dimension::TherapeuticArea => &THERAPEUTIC_AREAS,
            Dimension::Indication => &indications::INDICATIONS,
            Dimension::Target => &targets::TARGETS,
            Dimension::Modality => &MODALITIES,
            Dimension::AssetStage => &STAGES,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* ----------------------------
Therapeutic areas
---------------------------- */

pub static THERAPEUTIC_AREAS: VocabTable = VocabTable {
    terms: &[
        Term {
            canonical: "oncology",
            aliases: &["cancer", "cancers", "oncologic", "onc", "solid tumors", "hematologic oncology", "immuno-oncology", "io"],
        },
        Term {
            canonical: "immunology",
            aliases: &["immunology & inflammation", "i&i", "autoimmune disease", "autoimmunity", "inflammatory disease", "rheumatology"],
        },
        Term {
            canonical: "neurology",
            aliases: &["neuroscience", "neurosciences", "cns", "central nervous system", "neurodegeneration", "neurodegenerative disease"],
        },
        Term {
            canonical: "psychiatry",
            aliases: &["mental health", "psychiatric disorders", "neuropsychiatry"],
        },
        Term {
            canonical: "cardiovascular",
            aliases: &["cardiovascular disease", "cv", "cardiometabolic", "cardiorenal"],
        },
        Term {
            canonical: "metabolic",
            aliases: &["metabolism", "metabolic disease", "metabolic disorders", "endocrinology", "diabetes & obesity"],
        },
        Term {
            canonical: "infectious disease",
            aliases: &["infectious diseases", "infectious", "anti-infectives", "virology", "antivirals", "vaccines"],
        },
        Term {
            canonical: "rare disease",
            aliases: &["rare diseases", "orphan disease", "orphan diseases", "rare genetic disease", "rare disorders"],
        },
        Term {
            canonical: "respiratory",
            aliases: &["pulmonology", "pulmonary", "respiratory disease"],
        },
        Term {
            canonical: "dermatology",
            aliases: &["derm", "skin disease", "medical dermatology"],
        },
        Term {
            canonical: "ophthalmology",
            aliases: &["eye disease", "ophthalmic", "retina", "retinal disease"],
        },
        Term {
            canonical: "hematology",
            aliases: &["haematology", "blood disorders", "benign hematology"],
        },
        Term {
            canonical: "gastroenterology",
            aliases: &["gi", "gastrointestinal", "hepatology", "digestive disease"],
        },
        Term {
            canonical: "nephrology",
            aliases: &["renal", "kidney disease"],
        },
    ],
    typos: &[
        ("oncolgy", "oncology"),
        ("onocology", "oncology"),
        ("oncologie", "oncology"),
        ("immunolgy", "immunology"),
        ("imunology", "immunology"),
        ("neurolgy", "neurology"),
        ("nuerology", "neurology"),
        ("cardiovasular", "cardiovascular"),
        ("cardiovascualr", "cardiovascular"),
        ("metabolics", "metabolic"),
        ("infectous disease", "infectious disease"),
        ("infecious disease", "infectious disease"),
        ("rare desease", "rare disease"),
        ("respitory", "respiratory"),
        ("dermatolgy", "dermatology"),
        ("opthalmology", "ophthalmology"),
        ("ophthamology", "ophthalmology"),
        ("hematolgy", "hematology"),
        ("gastroentrology", "gastroenterology"),
    ],
    related: &[
        ("tumor", "oncology"),
        ("tumour", "oncology"),
        ("carcinoma", "oncology"),
        ("heme malignancies", "oncology"),
        ("inflammation", "immunology"),
        ("brain", "neurology"),
        ("cardiology", "cardiovascular"),
        ("cardiac", "cardiovascular"),
        ("heart", "cardiovascular"),
        ("diabetes", "metabolic"),
        ("obesity", "metabolic"),
        ("endocrine", "metabolic"),
        ("infection", "infectious disease"),
        ("viral", "infectious disease"),
        ("bacterial", "infectious disease"),
        ("genetic disorder", "rare disease"),
        ("lung", "respiratory"),
        ("skin", "dermatology"),
        ("eye", "ophthalmology"),
        ("blood", "hematology"),
        ("liver", "gastroenterology"),
        ("bowel", "gastroenterology"),
        ("kidney", "nephrology"),
        ("depression", "psychiatry"),
    ],
};

/* ----------------------------
Modalities
---------------------------- */

pub static MODALITIES: VocabTable = VocabTable {
    terms: &[
        Term {
            canonical: "small molecule",
            aliases: &["small molecules", "small-molecule", "oral small molecule", "nce", "new chemical entity", "sm"],
        },
        Term {
            canonical: "monoclonal antibody",
            aliases: &["mab", "mabs", "antibody", "antibodies", "monoclonal", "monoclonal antibodies", "igg"],
        },
        Term {
            canonical: "antibody-drug conjugate",
            aliases: &["adc", "adcs", "antibody drug conjugate", "antibody-drug conjugates", "immunoconjugate"],
        },
        Term {
            canonical: "bispecific antibody",
            aliases: &["bispecific", "bispecifics", "bsab", "t-cell engager", "t cell engager", "tce"],
        },
        Term {
            canonical: "cell therapy",
            aliases: &["car-t", "car t", "cart", "car-t cell therapy", "car-nk", "tcr-t", "til therapy", "cellular therapy", "stem cell therapy"],
        },
        Term {
            canonical: "gene therapy",
            aliases: &["aav", "aav gene therapy", "lentiviral gene therapy", "gene editing", "crispr", "base editing", "gene replacement"],
        },
        Term {
            canonical: "rna therapeutic",
            aliases: &["rna", "sirna", "rnai", "antisense oligonucleotide", "antisense", "aso", "mrna", "mrna therapeutic", "oligonucleotide"],
        },
        Term {
            canonical: "peptide",
            aliases: &["peptides", "cyclic peptide", "peptide therapeutic"],
        },
        Term {
            canonical: "vaccine",
            aliases: &["vaccines", "mrna vaccine", "therapeutic vaccine", "prophylactic vaccine"],
        },
        Term {
            canonical: "protein therapeutic",
            aliases: &["recombinant protein", "fusion protein", "enzyme replacement therapy", "ert", "biologic protein"],
        },
        Term {
            canonical: "radiopharmaceutical",
            aliases: &["radioligand", "radioligand therapy", "rlt", "radioconjugate"],
        },
    ],
    typos: &[
        ("small molecular", "small molecule"),
        ("small molecle", "small molecule"),
        ("smal molecule", "small molecule"),
        ("monoclonal antibodie", "monoclonal antibody"),
        ("monoclonal anitbody", "monoclonal antibody"),
        ("antibody drug conjugte", "antibody-drug conjugate"),
        ("antibody drug conjucate", "antibody-drug conjugate"),
        ("bi specific", "bispecific antibody"),
        ("bispecfic", "bispecific antibody"),
        ("cell theraphy", "cell therapy"),
        ("cell therpy", "cell therapy"),
        ("gene theraphy", "gene therapy"),
        ("gene therpy", "gene therapy"),
        ("antisence oligonucleotide", "rna therapeutic"),
        ("si rna", "rna therapeutic"),
        ("vacine", "vaccine"),
        ("radiopharmaceutcal", "radiopharmaceutical"),
    ],
    related: &[
        ("biologic", "monoclonal antibody"),
        ("biologics", "monoclonal antibody"),
        ("immunotherapy", "monoclonal antibody"),
        ("oral", "small molecule"),
        ("tablet", "small molecule"),
        ("degrader", "small molecule"),
        ("protac", "small molecule"),
        ("kinase inhibitor", "small molecule"),
        ("engineered t cells", "cell therapy"),
        ("viral vector", "gene therapy"),
        ("nucleic acid", "rna therapeutic"),
        ("oligo", "rna therapeutic"),
        ("radiotherapy", "radiopharmaceutical"),
        ("enzyme", "protein therapeutic"),
    ],
};

/* ----------------------------
Development stages
---------------------------- */

pub static STAGES: VocabTable = VocabTable {
    terms: &[
        Term {
            canonical: "discovery",
            aliases: &["research", "target discovery", "hit to lead", "lead optimization", "lead optimisation"],
        },
        Term {
            canonical: "preclinical",
            aliases: &["pre-clinical", "ind-enabling", "ind enabling studies", "nonclinical"],
        },
        Term {
            canonical: "phase 1",
            aliases: &["phase i", "phase1", "phase 1a", "phase 1b", "phase ia", "phase ib", "first-in-human", "fih"],
        },
        Term {
            canonical: "phase 1/2",
            aliases: &["phase i/ii", "phase 1b/2", "phase 1-2"],
        },
        Term {
            canonical: "phase 2",
            aliases: &["phase ii", "phase2", "phase 2a", "phase 2b", "phase iia", "phase iib", "proof of concept"],
        },
        Term {
            canonical: "phase 3",
            aliases: &["phase iii", "phase3", "phase 3a", "phase 3b", "pivotal", "registrational"],
        },
        Term {
            canonical: "filed",
            aliases: &["nda filed", "bla filed", "maa filed", "under review", "regulatory review", "regulatory submission", "submitted"],
        },
        Term {
            canonical: "approved",
            aliases: &["marketed", "commercial", "launched", "commercial stage"],
        },
    ],
    typos: &[
        ("phase ll", "phase 2"),
        ("phase lll", "phase 3"),
        ("phase l", "phase 1"),
        ("phse 1", "phase 1"),
        ("phse 2", "phase 2"),
        ("phse 3", "phase 3"),
        ("phase two", "phase 2"),
        ("phase three", "phase 3"),
        ("phase one", "phase 1"),
        ("preclincal", "preclinical"),
        ("pre clincal", "preclinical"),
        ("discvery", "discovery"),
        ("aproved", "approved"),
    ],
    related: &[
        ("early stage", "phase 1"),
        ("early clinical", "phase 1"),
        ("mid stage", "phase 2"),
        ("late stage", "phase 3"),
        ("animal studies", "preclinical"),
        ("nda", "filed"),
        ("bla", "filed"),
        ("market", "approved"),
    ],
};

/* ----------------------------
Scoring affinity tables
---------------------------- */

/// Therapeutic areas that are adjacent enough for partial alignment credit.
/// Checked in both directions. Also carries a few un-normalized spellings
/// ("cardiology") so roster entries written loosely still line up.
pub static AREA_AFFINITY: &[(&str, &[&str])] = &[
    ("oncology", &["hematology"]),
    ("hematology", &["oncology", "rare disease"]),
    ("immunology", &["dermatology", "gastroenterology", "respiratory"]),
    ("neurology", &["psychiatry", "rare disease"]),
    ("cardiovascular", &["cardiology", "metabolic", "nephrology"]),
    ("metabolic", &["cardiovascular", "gastroenterology"]),
    ("nephrology", &["cardiovascular", "metabolic"]),
    ("respiratory", &["immunology", "infectious disease"]),
    ("rare disease", &["hematology", "neurology"]),
    ("ophthalmology", &["rare disease"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn canonical_set(table: &VocabTable) -> HashSet<&'static str> {
        table.terms.iter().map(|t| t.canonical).collect()
    }

    #[test]
    fn typo_and_related_entries_point_at_known_canonicals() {
        for dim in Dimension::ALL {
            let table = dim.table();
            let canon = canonical_set(table);
            for (typo, target) in table.typos {
                assert!(canon.contains(target), "{dim}: typo {typo:?} -> unknown {target:?}");
            }
            for (rel, target) in table.related {
                assert!(canon.contains(target), "{dim}: related {rel:?} -> unknown {target:?}");
            }
        }
    }

    #[test]
    fn canonicals_are_unique_per_dimension() {
        for dim in Dimension::ALL {
            let table = dim.table();
            assert_eq!(canonical_set(table).len(), table.terms.len(), "{dim}");
        }
    }

    #[test]
    fn rare_indications_are_canonical() {
        let canon = canonical_set(Dimension::Indication.table());
        for r in RARE_INDICATIONS {
            assert!(canon.contains(r), "rare indication {r:?} missing from table");
        }
    }
}
