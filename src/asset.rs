// src/asset.rs
//! Asset profiles: the raw (user-entered) record and its normalized counterpart.
//!
//! Normalization never mutates a `RawAssetProfile`; `crate::normalize::enrich`
//! produces a fresh `AssetProfile` instead.

use crate::normalize::{normalize, normalize_key};
use crate::vocab::Dimension;
use serde::{Deserialize, Serialize};

/// Free-text asset attributes as entered by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAssetProfile {
    pub therapeutic_area: String,
    pub indication: String,
    pub target: String,
    pub modality: String,
    pub asset_stage: String,
    /// Optional free-form description; passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RawAssetProfile {
    pub fn new(
        therapeutic_area: impl Into<String>,
        indication: impl Into<String>,
        target: impl Into<String>,
        modality: impl Into<String>,
        asset_stage: impl Into<String>,
    ) -> Self {
        Self {
            therapeutic_area: therapeutic_area.into(),
            indication: indication.into(),
            target: target.into(),
            modality: modality.into(),
            asset_stage: asset_stage.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Canonicalized asset: the input to the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    pub therapeutic_area: String,
    pub indication: String,
    pub target: String,
    pub modality: String,
    pub asset_stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssetProfile {
    pub fn new(
        therapeutic_area: impl Into<String>,
        indication: impl Into<String>,
        target: impl Into<String>,
        modality: impl Into<String>,
        asset_stage: impl Into<String>,
    ) -> Self {
        Self {
            therapeutic_area: therapeutic_area.into(),
            indication: indication.into(),
            target: target.into(),
            modality: modality.into(),
            asset_stage: asset_stage.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn stage_bucket(&self) -> StageBucket {
        StageBucket::parse(&self.asset_stage)
    }

    /// Concatenated text used for keyword scans and log hashing.
    pub(crate) fn fingerprint_text(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.therapeutic_area, self.indication, self.target, self.modality, self.asset_stage
        )
    }
}

/// Coarse development phase used by deal-size scaling and complexity scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageBucket {
    Discovery,
    Preclinical,
    Phase1,
    Phase1To2,
    Phase2,
    Phase3,
    Filed,
    Approved,
    Unknown,
}

impl StageBucket {
    pub fn parse(stage: &str) -> Self {
        let res = normalize(Dimension::AssetStage, stage);
        if !res.is_valid {
            return StageBucket::Unknown;
        }
        match normalize_key(&res.normalized).as_str() {
            "discovery" => StageBucket::Discovery,
            "preclinical" => StageBucket::Preclinical,
            "phase 1" => StageBucket::Phase1,
            "phase 1 2" => StageBucket::Phase1To2,
            "phase 2" => StageBucket::Phase2,
            "phase 3" => StageBucket::Phase3,
            "filed" => StageBucket::Filed,
            "approved" => StageBucket::Approved,
            _ => StageBucket::Unknown,
        }
    }

    /// Discovery through phase 1.
    pub fn is_early(self) -> bool {
        matches!(
            self,
            StageBucket::Discovery | StageBucket::Preclinical | StageBucket::Phase1
        )
    }

    /// Phase 3 onwards.
    pub fn is_late(self) -> bool {
        matches!(
            self,
            StageBucket::Phase3 | StageBucket::Filed | StageBucket::Approved
        )
    }
}
