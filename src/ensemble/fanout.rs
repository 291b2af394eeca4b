// src/ensemble/fanout.rs
//! Concurrent model fan-out. Real providers live in the host application and
//! implement `ModelClient`; this crate only ships a mock and a disabled client.

use super::{ModelAnswer, ModelResponse, ResponseMetadata};
use crate::asset::AssetProfile;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Confidence assigned when a model omits `confidence_score`.
pub const DEFAULT_RESPONSE_CONFIDENCE: f64 = 0.5;

#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Identifier used for the model-weight lookup.
    fn model_id(&self) -> &str;
    /// `None` means the model produced nothing usable.
    async fn recommend(&self, asset: &AssetProfile) -> Option<ModelAnswer>;
}

pub type DynModelClient = Arc<dyn ModelClient>;

/// Fixed answer, optionally after a delay (for timeout tests).
#[derive(Debug, Clone)]
pub struct MockModelClient {
    id: String,
    answer: Option<ModelAnswer>,
    delay: Option<Duration>,
}

impl MockModelClient {
    pub fn new(id: impl Into<String>, answer: ModelAnswer) -> Self {
        Self {
            id: id.into(),
            answer: Some(answer),
            delay: None,
        }
    }

    /// A mock that answers `None`.
    pub fn silent(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            answer: None,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    fn model_id(&self) -> &str {
        &self.id
    }

    async fn recommend(&self, _asset: &AssetProfile) -> Option<ModelAnswer> {
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        self.answer.clone()
    }
}

/// Always `None`; stands in for a model switched off by configuration.
#[derive(Debug, Clone)]
pub struct DisabledModelClient {
    id: String,
}

impl DisabledModelClient {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl ModelClient for DisabledModelClient {
    fn model_id(&self) -> &str {
        &self.id
    }

    async fn recommend(&self, _asset: &AssetProfile) -> Option<ModelAnswer> {
        None
    }
}

/// Query every client concurrently with a per-call timeout.
///
/// Timed-out, empty and panicked calls are dropped. The result keeps client order
/// regardless of completion order.
pub async fn gather_responses(
    clients: &[DynModelClient],
    asset: &AssetProfile,
    per_call_timeout: Duration,
) -> Vec<ModelResponse> {
    let mut set = JoinSet::new();
    for (idx, client) in clients.iter().enumerate() {
        let client = Arc::clone(client);
        let asset = asset.clone();
        set.spawn(async move {
            let started = Instant::now();
            let answer = tokio::time::timeout(per_call_timeout, client.recommend(&asset)).await;
            let latency_ms = started.elapsed().as_millis() as u64;
            let model = client.model_id().to_string();
            match answer {
                Ok(Some(answer)) => {
                    let confidence = answer
                        .confidence_score
                        .filter(|c| c.is_finite())
                        .map_or(DEFAULT_RESPONSE_CONFIDENCE, |c| c.clamp(0.0, 1.0));
                    let response = ModelResponse::new(model, answer, confidence).with_metadata(
                        ResponseMetadata {
                            latency_ms: Some(latency_ms),
                            tokens_used: None,
                        },
                    );
                    (idx, Some(response))
                }
                Ok(None) => {
                    debug!(target: "ensemble", %model, "model returned no answer");
                    (idx, None)
                }
                Err(_) => {
                    warn!(target: "ensemble", %model, latency_ms, "model call timed out");
                    (idx, None)
                }
            }
        });
    }

    let mut collected: Vec<(usize, ModelResponse)> = Vec::with_capacity(clients.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, Some(r))) => collected.push((idx, r)),
            Ok((_, None)) => {}
            Err(e) => warn!(target: "ensemble", error = %e, "model task failed"),
        }
    }
    collected.sort_by_key(|(idx, _)| *idx);
    collected.into_iter().map(|(_, r)| r).collect()
}
