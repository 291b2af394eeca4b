// src/vocab/indications.rs
//! Indication vocabulary, rare-disease flags and indication families.

use super::{Term, VocabTable};

pub static INDICATIONS: VocabTable = VocabTable {
    terms: &[
        // --- solid tumors ---
        Term { canonical: "breast cancer", aliases: &["breast carcinoma", "metastatic breast cancer", "her2 positive breast cancer", "hr positive breast cancer", "triple negative breast cancer", "tnbc", "mbc"] },
        Term { canonical: "non-small cell lung cancer", aliases: &["nsclc", "non small cell lung cancer", "lung adenocarcinoma", "squamous nsclc"] },
        Term { canonical: "small cell lung cancer", aliases: &["sclc", "extensive stage sclc"] },
        Term { canonical: "lung cancer", aliases: &["lung carcinoma", "pulmonary cancer"] },
        Term { canonical: "prostate cancer", aliases: &["prostate carcinoma", "mcrpc", "metastatic castration resistant prostate cancer", "crpc"] },
        Term { canonical: "colorectal cancer", aliases: &["crc", "colon cancer", "rectal cancer", "mcrc"] },
        Term { canonical: "pancreatic cancer", aliases: &["pdac", "pancreatic ductal adenocarcinoma", "pancreatic adenocarcinoma"] },
        Term { canonical: "ovarian cancer", aliases: &["ovarian carcinoma", "platinum resistant ovarian cancer"] },
        Term { canonical: "gastric cancer", aliases: &["stomach cancer", "gastroesophageal junction cancer", "gej cancer"] },
        Term { canonical: "hepatocellular carcinoma", aliases: &["hcc", "liver cancer"] },
        Term { canonical: "melanoma", aliases: &["metastatic melanoma", "cutaneous melanoma"] },
        Term { canonical: "glioblastoma", aliases: &["gbm", "glioblastoma multiforme"] },
        Term { canonical: "bladder cancer", aliases: &["urothelial carcinoma", "urothelial cancer"] },
        // --- hematologic malignancies ---
        Term { canonical: "acute myeloid leukemia", aliases: &["aml", "acute myeloid leukaemia", "acute myelogenous leukemia"] },
        Term { canonical: "multiple myeloma", aliases: &["myeloma", "relapsed refractory multiple myeloma", "rrmm"] },
        Term { canonical: "diffuse large b-cell lymphoma", aliases: &["dlbcl", "diffuse large b cell lymphoma"] },
        Term { canonical: "chronic lymphocytic leukemia", aliases: &["cll", "chronic lymphocytic leukaemia"] },
        // --- immunology ---
        Term { canonical: "rheumatoid arthritis", aliases: &["ra"] },
        Term { canonical: "psoriasis", aliases: &["plaque psoriasis", "psoriatic disease"] },
        Term { canonical: "atopic dermatitis", aliases: &["eczema", "atopic eczema"] },
        Term { canonical: "ulcerative colitis", aliases: &["uc"] },
        Term { canonical: "crohn's disease", aliases: &["crohns", "crohn disease", "cd"] },
        Term { canonical: "systemic lupus erythematosus", aliases: &["sle", "lupus", "lupus nephritis"] },
        Term { canonical: "multiple sclerosis", aliases: &["ms", "relapsing multiple sclerosis", "rms"] },
        // --- neurology / psychiatry ---
        Term { canonical: "alzheimer's disease", aliases: &["alzheimers", "alzheimer disease", "early alzheimer's disease"] },
        Term { canonical: "parkinson's disease", aliases: &["parkinsons", "parkinson disease"] },
        Term { canonical: "amyotrophic lateral sclerosis", aliases: &["als", "lou gehrig's disease", "motor neuron disease"] },
        Term { canonical: "huntington's disease", aliases: &["huntingtons", "huntington disease"] },
        Term { canonical: "major depressive disorder", aliases: &["mdd", "depression", "treatment resistant depression"] },
        Term { canonical: "schizophrenia", aliases: &["schizophrenic disorder"] },
        // --- cardiometabolic / renal ---
        Term { canonical: "heart failure", aliases: &["chronic heart failure", "hfref", "hfpef", "congestive heart failure"] },
        Term { canonical: "hypertension", aliases: &["high blood pressure", "resistant hypertension"] },
        Term { canonical: "hypercholesterolemia", aliases: &["high cholesterol", "dyslipidemia", "familial hypercholesterolemia"] },
        Term { canonical: "type 2 diabetes", aliases: &["t2d", "t2dm", "type ii diabetes", "type 2 diabetes mellitus"] },
        Term { canonical: "obesity", aliases: &["chronic weight management", "overweight"] },
        Term { canonical: "nonalcoholic steatohepatitis", aliases: &["nash", "mash", "metabolic dysfunction associated steatohepatitis"] },
        Term { canonical: "chronic kidney disease", aliases: &["ckd", "diabetic kidney disease"] },
        // --- infectious disease ---
        Term { canonical: "hiv infection", aliases: &["hiv", "hiv-1", "aids"] },
        Term { canonical: "hepatitis b", aliases: &["hbv", "chronic hepatitis b"] },
        Term { canonical: "covid-19", aliases: &["covid", "sars-cov-2"] },
        Term { canonical: "respiratory syncytial virus", aliases: &["rsv", "rsv infection"] },
        // --- respiratory ---
        Term { canonical: "asthma", aliases: &["severe asthma", "eosinophilic asthma"] },
        Term { canonical: "chronic obstructive pulmonary disease", aliases: &["copd"] },
        Term { canonical: "idiopathic pulmonary fibrosis", aliases: &["ipf", "pulmonary fibrosis"] },
        // --- rare / genetic ---
        Term { canonical: "cystic fibrosis", aliases: &["cf"] },
        Term { canonical: "duchenne muscular dystrophy", aliases: &["dmd", "duchenne"] },
        Term { canonical: "spinal muscular atrophy", aliases: &["sma"] },
        Term { canonical: "sickle cell disease", aliases: &["scd", "sickle cell anemia", "sickle cell anaemia"] },
        Term { canonical: "hemophilia a", aliases: &["haemophilia a", "factor viii deficiency"] },
        Term { canonical: "hemophilia b", aliases: &["haemophilia b", "factor ix deficiency"] },
        Term { canonical: "fabry disease", aliases: &["fabry", "anderson-fabry disease"] },
        Term { canonical: "transthyretin amyloidosis", aliases: &["attr", "attr amyloidosis", "attr-cm", "hattr"] },
        // --- ophthalmology ---
        Term { canonical: "age-related macular degeneration", aliases: &["amd", "wet amd", "namd", "geographic atrophy"] },
    ],
    typos: &[
        ("brest cancer", "breast cancer"),
        ("breast cancr", "breast cancer"),
        ("breat cancer", "breast cancer"),
        ("nsclc cancer", "non-small cell lung cancer"),
        ("prostrate cancer", "prostate cancer"),
        ("pancreatic cancr", "pancreatic cancer"),
        ("melanona", "melanoma"),
        ("glioblastma", "glioblastoma"),
        ("leukaemia aml", "acute myeloid leukemia"),
        ("multiple mylemoa", "multiple myeloma"),
        ("multiple myloma", "multiple myeloma"),
        ("rhumatoid arthritis", "rheumatoid arthritis"),
        ("rheumatoid arthritus", "rheumatoid arthritis"),
        ("psoraisis", "psoriasis"),
        ("psorasis", "psoriasis"),
        ("atopic dermatits", "atopic dermatitis"),
        ("chrons disease", "crohn's disease"),
        ("multiple sclerois", "multiple sclerosis"),
        ("alzhiemers disease", "alzheimer's disease"),
        ("alzeimers", "alzheimer's disease"),
        ("parkinson s disease", "parkinson's disease"),
        ("schizophernia", "schizophrenia"),
        ("diabetis", "type 2 diabetes"),
        ("type 2 diabetis", "type 2 diabetes"),
        ("athsma", "asthma"),
        ("astma", "asthma"),
        ("cystic fibrossis", "cystic fibrosis"),
        ("duchene muscular dystrophy", "duchenne muscular dystrophy"),
        ("sickle cell diesease", "sickle cell disease"),
        ("hemophila a", "hemophilia a"),
    ],
    related: &[
        ("joint inflammation", "rheumatoid arthritis"),
        ("inflammatory arthritis", "rheumatoid arthritis"),
        ("dementia", "alzheimer's disease"),
        ("memory loss", "alzheimer's disease"),
        ("tremor", "parkinson's disease"),
        ("movement disorder", "parkinson's disease"),
        ("blood cancer", "acute myeloid leukemia"),
        ("leukemia", "acute myeloid leukemia"),
        ("lymphoma", "diffuse large b-cell lymphoma"),
        ("fatty liver", "nonalcoholic steatohepatitis"),
        ("kidney failure", "chronic kidney disease"),
        ("emphysema", "chronic obstructive pulmonary disease"),
        ("bronchitis", "chronic obstructive pulmonary disease"),
        ("inflammatory bowel disease", "ulcerative colitis"),
        ("inflammatory bowel disease", "crohn's disease"),
        ("ibd", "ulcerative colitis"),
        ("ibd", "crohn's disease"),
        ("weight loss", "obesity"),
        ("cholesterol", "hypercholesterolemia"),
        ("cardiomyopathy", "transthyretin amyloidosis"),
        ("amyloidosis", "transthyretin amyloidosis"),
        ("bleeding disorder", "hemophilia a"),
        ("skin cancer", "melanoma"),
        ("brain tumor", "glioblastoma"),
        ("muscle wasting", "duchenne muscular dystrophy"),
        ("neuromuscular", "spinal muscular atrophy"),
    ],
};

/// Canonical indications carrying orphan/rare-disease status.
pub static RARE_INDICATIONS: &[&str] = &[
    "amyotrophic lateral sclerosis",
    "huntington's disease",
    "idiopathic pulmonary fibrosis",
    "cystic fibrosis",
    "duchenne muscular dystrophy",
    "spinal muscular atrophy",
    "sickle cell disease",
    "hemophilia a",
    "hemophilia b",
    "fabry disease",
    "transthyretin amyloidosis",
    "glioblastoma",
];

/// Indication → related indications/families, used for pipeline-gap partial credit.
/// A candidate listing "solid tumors" as a gap gets related credit for any member.
pub static INDICATION_FAMILIES: &[(&str, &[&str])] = &[
    ("breast cancer", &["solid tumors"]),
    ("non-small cell lung cancer", &["lung cancer", "small cell lung cancer", "solid tumors"]),
    ("small cell lung cancer", &["lung cancer", "non-small cell lung cancer", "solid tumors"]),
    ("lung cancer", &["non-small cell lung cancer", "small cell lung cancer", "solid tumors"]),
    ("prostate cancer", &["solid tumors", "bladder cancer"]),
    ("colorectal cancer", &["gastric cancer", "pancreatic cancer", "solid tumors"]),
    ("pancreatic cancer", &["colorectal cancer", "gastric cancer", "solid tumors"]),
    ("ovarian cancer", &["breast cancer", "solid tumors"]),
    ("gastric cancer", &["colorectal cancer", "solid tumors"]),
    ("hepatocellular carcinoma", &["solid tumors"]),
    ("melanoma", &["solid tumors"]),
    ("glioblastoma", &["solid tumors"]),
    ("bladder cancer", &["prostate cancer", "solid tumors"]),
    ("acute myeloid leukemia", &["hematologic malignancies", "chronic lymphocytic leukemia"]),
    ("multiple myeloma", &["hematologic malignancies"]),
    ("diffuse large b-cell lymphoma", &["hematologic malignancies", "chronic lymphocytic leukemia"]),
    ("chronic lymphocytic leukemia", &["hematologic malignancies", "diffuse large b-cell lymphoma"]),
    ("rheumatoid arthritis", &["autoimmune disease", "systemic lupus erythematosus", "psoriasis"]),
    ("psoriasis", &["atopic dermatitis", "autoimmune disease", "rheumatoid arthritis"]),
    ("atopic dermatitis", &["psoriasis", "asthma"]),
    ("ulcerative colitis", &["crohn's disease", "inflammatory bowel disease"]),
    ("crohn's disease", &["ulcerative colitis", "inflammatory bowel disease"]),
    ("systemic lupus erythematosus", &["autoimmune disease", "rheumatoid arthritis"]),
    ("multiple sclerosis", &["autoimmune disease", "neurodegeneration"]),
    ("alzheimer's disease", &["neurodegeneration", "parkinson's disease"]),
    ("parkinson's disease", &["neurodegeneration", "alzheimer's disease"]),
    ("amyotrophic lateral sclerosis", &["neurodegeneration", "huntington's disease"]),
    ("huntington's disease", &["neurodegeneration", "amyotrophic lateral sclerosis"]),
    ("major depressive disorder", &["schizophrenia"]),
    ("schizophrenia", &["major depressive disorder"]),
    ("heart failure", &["hypertension", "transthyretin amyloidosis"]),
    ("hypertension", &["heart failure", "chronic kidney disease"]),
    ("hypercholesterolemia", &["cardiovascular risk reduction"]),
    ("type 2 diabetes", &["obesity", "chronic kidney disease"]),
    ("obesity", &["type 2 diabetes", "nonalcoholic steatohepatitis"]),
    ("nonalcoholic steatohepatitis", &["obesity", "type 2 diabetes"]),
    ("chronic kidney disease", &["type 2 diabetes", "hypertension"]),
    ("hiv infection", &["hepatitis b"]),
    ("hepatitis b", &["hiv infection"]),
    ("covid-19", &["respiratory syncytial virus"]),
    ("respiratory syncytial virus", &["covid-19"]),
    ("asthma", &["chronic obstructive pulmonary disease", "atopic dermatitis"]),
    ("chronic obstructive pulmonary disease", &["asthma", "idiopathic pulmonary fibrosis"]),
    ("idiopathic pulmonary fibrosis", &["chronic obstructive pulmonary disease"]),
    ("hemophilia a", &["hemophilia b", "sickle cell disease"]),
    ("hemophilia b", &["hemophilia a", "sickle cell disease"]),
    ("sickle cell disease", &["hemophilia a", "hemophilia b"]),
    ("duchenne muscular dystrophy", &["spinal muscular atrophy"]),
    ("spinal muscular atrophy", &["duchenne muscular dystrophy"]),
    ("transthyretin amyloidosis", &["heart failure"]),
];
