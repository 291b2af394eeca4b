// src/telemetry.rs
//! Tracing setup, metric descriptions and the log-safe hash helper.
//!
//! Asset text is never logged raw; log sites pass `anon_hash(...)` instead.

use metrics::{describe_counter, describe_gauge, describe_histogram};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_FORMAT: &str = "BUYER_MATCH_LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "pharma_buyer_match=info,warn";

/// Install the global subscriber. `RUST_LOG` wins over the default filter;
/// `BUYER_MATCH_LOG_FORMAT=json` switches to JSON lines. Safe to call twice.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "pharma_buyer_match=debug,info"
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let json = std::env::var(ENV_LOG_FORMAT)
        .ok()
        .is_some_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };
}

/// Register descriptions for every metric this crate emits (once per process).
pub fn describe_metrics() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("buyer_scoring_runs_total", "Scoring runs over a candidate roster.");
        describe_counter!(
            "buyer_candidates_filtered_total",
            "Candidates dropped for quality below the cut-off."
        );
        describe_histogram!("buyer_candidates_ranked", "Candidates kept per scoring run.");
        describe_counter!("ensemble_resolutions_total", "Consensus resolutions performed.");
        describe_gauge!("ensemble_agreement", "Agreement level of the latest consensus.");
        describe_counter!(
            "normalizer_unmatched_total",
            "Attribute values with no vocabulary match."
        );
    });
}

/// Short stable id for text we must not log verbatim: first 6 bytes of SHA-256, hex.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("ERBB2|breast cancer");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("ERBB2|breast cancer"));
        assert_ne!(a, anon_hash("ERBB2|gastric cancer"));
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        describe_metrics();
        describe_metrics();
    }
}
