// src/vocab/targets.rs
//! Molecular target vocabulary: HGNC gene symbol as canonical form, protein names,
//! legacy names and common trade shorthand as aliases.
//!
//! This is the only target table; free-text targets go through the same normalizer
//! as the other dimensions (see `crate::normalize`).

use super::{Term, VocabTable};

pub static TARGETS: VocabTable = VocabTable {
    terms: &[
        // --- receptor tyrosine kinases ---
        Term { canonical: "ERBB2", aliases: &["her2", "her-2", "her2/neu", "neu", "cd340", "erbb-2"] },
        Term { canonical: "EGFR", aliases: &["her1", "erbb1", "egfr exon 20", "egf receptor"] },
        Term { canonical: "ERBB3", aliases: &["her3", "her-3"] },
        Term { canonical: "MET", aliases: &["c-met", "hgfr", "hepatocyte growth factor receptor"] },
        Term { canonical: "ALK", aliases: &["anaplastic lymphoma kinase"] },
        Term { canonical: "ROS1", aliases: &["ros-1"] },
        Term { canonical: "RET", aliases: &["ret fusion"] },
        Term { canonical: "NTRK1", aliases: &["trka", "trk", "ntrk"] },
        Term { canonical: "FGFR2", aliases: &["fgfr-2"] },
        Term { canonical: "FGFR3", aliases: &["fgfr-3"] },
        Term { canonical: "KIT", aliases: &["c-kit", "cd117"] },
        Term { canonical: "FLT3", aliases: &["flt-3", "cd135"] },
        Term { canonical: "KDR", aliases: &["vegfr2", "vegfr-2", "flk-1"] },
        // --- intracellular signaling ---
        Term { canonical: "KRAS", aliases: &["k-ras", "kras g12c", "kras g12d", "ki-ras"] },
        Term { canonical: "BRAF", aliases: &["b-raf", "braf v600e"] },
        Term { canonical: "PIK3CA", aliases: &["pi3k alpha", "pi3ka", "p110 alpha", "p110a"] },
        Term { canonical: "AKT1", aliases: &["akt", "pkb"] },
        Term { canonical: "MTOR", aliases: &["frap1", "mammalian target of rapamycin"] },
        Term { canonical: "CDK4", aliases: &["cdk4/6", "cyclin dependent kinase 4"] },
        Term { canonical: "BTK", aliases: &["bruton's tyrosine kinase", "bruton tyrosine kinase"] },
        Term { canonical: "BCL2", aliases: &["bcl-2"] },
        Term { canonical: "IDH1", aliases: &["idh-1"] },
        Term { canonical: "PARP1", aliases: &["parp", "parp-1"] },
        Term { canonical: "ATR", aliases: &["atr kinase"] },
        Term { canonical: "WEE1", aliases: &["wee-1"] },
        Term { canonical: "JAK1", aliases: &["jak-1"] },
        Term { canonical: "JAK2", aliases: &["jak-2"] },
        Term { canonical: "TYK2", aliases: &["tyk-2"] },
        // --- immune checkpoints / immuno-oncology ---
        Term { canonical: "PDCD1", aliases: &["pd-1", "pd1", "cd279", "programmed death 1"] },
        Term { canonical: "CD274", aliases: &["pd-l1", "pdl1", "b7-h1", "programmed death ligand 1"] },
        Term { canonical: "CTLA4", aliases: &["ctla-4", "cd152"] },
        Term { canonical: "LAG3", aliases: &["lag-3", "cd223"] },
        Term { canonical: "TIGIT", aliases: &["vstm3"] },
        // --- lineage / ADC / cell-therapy antigens ---
        Term { canonical: "CD19", aliases: &["cd-19", "b4"] },
        Term { canonical: "MS4A1", aliases: &["cd20", "cd-20"] },
        Term { canonical: "CD38", aliases: &["cd-38"] },
        Term { canonical: "TNFRSF17", aliases: &["bcma", "cd269", "b cell maturation antigen"] },
        Term { canonical: "CD3E", aliases: &["cd3", "cd3 epsilon"] },
        Term { canonical: "TACSTD2", aliases: &["trop2", "trop-2", "tumor associated calcium signal transducer 2"] },
        Term { canonical: "NECTIN4", aliases: &["nectin-4", "pvrl4"] },
        Term { canonical: "FOLR1", aliases: &["folate receptor alpha", "fr alpha", "fra"] },
        Term { canonical: "CLDN18", aliases: &["claudin 18.2", "cldn18.2", "claudin-18"] },
        Term { canonical: "DLL3", aliases: &["delta-like ligand 3"] },
        Term { canonical: "MSLN", aliases: &["mesothelin"] },
        Term { canonical: "FOLH1", aliases: &["psma", "prostate specific membrane antigen"] },
        Term { canonical: "CEACAM5", aliases: &["cea", "cd66e"] },
        // --- nuclear receptors ---
        Term { canonical: "AR", aliases: &["androgen receptor"] },
        Term { canonical: "ESR1", aliases: &["estrogen receptor", "estrogen receptor alpha", "er alpha"] },
        Term { canonical: "NR1H4", aliases: &["fxr", "farnesoid x receptor"] },
        Term { canonical: "THRB", aliases: &["thr-beta", "thyroid hormone receptor beta"] },
        // --- cytokines / immunology ---
        Term { canonical: "TNF", aliases: &["tnf-alpha", "tnf alpha", "tnfa", "tumor necrosis factor"] },
        Term { canonical: "IL6", aliases: &["il-6", "interleukin-6"] },
        Term { canonical: "IL6R", aliases: &["il-6r", "il-6 receptor"] },
        Term { canonical: "IL17A", aliases: &["il-17", "il-17a", "il17"] },
        Term { canonical: "IL23A", aliases: &["il-23", "il23", "il-23p19"] },
        Term { canonical: "IL4R", aliases: &["il-4r", "il-4ra", "il-4 receptor alpha"] },
        Term { canonical: "IL13", aliases: &["il-13", "interleukin-13"] },
        Term { canonical: "IL5", aliases: &["il-5", "interleukin-5"] },
        Term { canonical: "TSLP", aliases: &["thymic stromal lymphopoietin"] },
        Term { canonical: "S1PR1", aliases: &["s1p1", "s1p receptor 1"] },
        Term { canonical: "FCGRT", aliases: &["fcrn", "neonatal fc receptor"] },
        Term { canonical: "C5", aliases: &["complement c5", "complement component 5"] },
        Term { canonical: "C3", aliases: &["complement c3"] },
        // --- neuroscience ---
        Term { canonical: "APP", aliases: &["amyloid beta", "amyloid-beta", "abeta", "amyloid precursor protein"] },
        Term { canonical: "MAPT", aliases: &["tau", "microtubule associated protein tau"] },
        Term { canonical: "SNCA", aliases: &["alpha-synuclein", "alpha synuclein", "a-syn"] },
        Term { canonical: "LRRK2", aliases: &["lrrk-2", "dardarin"] },
        Term { canonical: "SOD1", aliases: &["sod-1", "superoxide dismutase 1"] },
        Term { canonical: "HTT", aliases: &["huntingtin", "mhtt"] },
        // --- rare / genetic disease ---
        Term { canonical: "DMD", aliases: &["dystrophin"] },
        Term { canonical: "SMN1", aliases: &["smn", "survival motor neuron 1", "smn2"] },
        Term { canonical: "CFTR", aliases: &["cystic fibrosis transmembrane conductance regulator"] },
        Term { canonical: "HBB", aliases: &["beta-globin", "beta globin", "hemoglobin beta"] },
        Term { canonical: "F8", aliases: &["factor viii", "fviii", "coagulation factor viii"] },
        Term { canonical: "F9", aliases: &["factor ix", "fix", "coagulation factor ix"] },
        Term { canonical: "GLA", aliases: &["alpha-galactosidase a", "alpha galactosidase"] },
        Term { canonical: "TTR", aliases: &["transthyretin", "prealbumin"] },
        // --- cardiometabolic ---
        Term { canonical: "PCSK9", aliases: &["pcsk-9"] },
        Term { canonical: "ANGPTL3", aliases: &["angptl-3", "angiopoietin-like 3"] },
        Term { canonical: "LPA", aliases: &["lp(a)", "lipoprotein(a)", "lipoprotein a"] },
        Term { canonical: "APOC3", aliases: &["apoc-iii", "apolipoprotein c3", "apo c-iii"] },
        Term { canonical: "GLP1R", aliases: &["glp-1", "glp1", "glp-1r", "glp-1 receptor", "glp1 receptor"] },
        Term { canonical: "GIPR", aliases: &["gip receptor", "gip", "gipr agonist"] },
        Term { canonical: "GCGR", aliases: &["glucagon receptor"] },
        Term { canonical: "SLC5A2", aliases: &["sglt2", "sglt-2", "sodium glucose cotransporter 2"] },
        Term { canonical: "DPP4", aliases: &["dpp-4", "cd26"] },
        // --- angiogenesis / ophthalmology ---
        Term { canonical: "VEGFA", aliases: &["vegf", "vegf-a", "vascular endothelial growth factor"] },
        Term { canonical: "ANGPT2", aliases: &["ang2", "ang-2", "angiopoietin-2"] },
    ],
    typos: &[
        ("hre2", "ERBB2"),
        ("her2neu", "ERBB2"),
        ("egrf", "EGFR"),
        ("krass", "KRAS"),
        ("k ras g12c", "KRAS"),
        ("pdl 1", "CD274"),
        ("pd l 1", "CD274"),
        ("ctal4", "CTLA4"),
        ("torp2", "TACSTD2"),
        ("bc12", "BCL2"),
        ("claudin18 2", "CLDN18"),
        ("glp1 r", "GLP1R"),
        ("pcks9", "PCSK9"),
        ("bmca", "TNFRSF17"),
        ("il17 a", "IL17A"),
        ("tnf alfa", "TNF"),
        ("alpha synnuclein", "SNCA"),
        ("mesothelian", "MSLN"),
        ("huntingin", "HTT"),
        ("dystrophine", "DMD"),
    ],
    related: &[
        ("immune checkpoint", "PDCD1"),
        ("checkpoint inhibitor", "PDCD1"),
        ("her family", "ERBB2"),
        ("ras", "KRAS"),
        ("amyloid", "APP"),
        ("incretin", "GLP1R"),
        ("complement", "C5"),
        ("interleukin", "IL6"),
        ("anti angiogenic", "VEGFA"),
        ("b cell", "CD19"),
        ("t cell", "CD3E"),
    ],
};
