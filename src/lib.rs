// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod asset;
pub mod config;
pub mod engine;
pub mod ensemble;
pub mod error;
pub mod normalize;
pub mod recommend;
pub mod roster;
pub mod scoring;
pub mod telemetry;
pub mod vocab;

// ---- Re-exports for a stable public API ----
pub use crate::asset::{AssetProfile, RawAssetProfile, StageBucket};
pub use crate::config::EngineConfig;
pub use crate::engine::{Engine, Report};
pub use crate::ensemble::{
    resolve, EnsembleResolver, EnsembleResult, ModelAnswer, ModelResponse, ModelWeightsConfig,
};
pub use crate::error::{ConfigError, EngineError, EnsembleError, QualityGateError, WeightError};
pub use crate::normalize::{enrich, normalize, EnrichmentResult, ValidationResult};
pub use crate::recommend::{reconcile, Recommendation, RecommendationSource};
pub use crate::roster::{CandidateProfile, ExpertiseFlags, Roster, Strength};
pub use crate::scoring::{
    score, BuyerScore, ConfidenceLevel, ScoringEngine, ScoringWeights, TopBuyer,
    NO_SUITABLE_BUYER,
};
pub use crate::vocab::Dimension;
