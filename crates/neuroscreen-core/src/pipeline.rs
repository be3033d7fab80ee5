//! Run orchestration: one record shared by the CLI and the server.
//!
//! The pipeline stages themselves are pure; this module only wires them in
//! dependency order and stamps the result with a run id and timestamp. Any
//! latency simulation belongs to the orchestrating shell, never here — the
//! whole run executes synchronously.

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::attribution::{AttributionEntry, attribution_from_powers, simulate_attribution};
use crate::classify::{Classification, classify};
use crate::coherence::{CoherencePair, estimate_coherence};
use crate::ingest::{IngestError, parse_csv};
use crate::risk::{RiskResult, score_risk};
use crate::spectrum::{BandPowers, band_powers_from_signal, round4, simulate_band_powers};

/// Score at and above which coherence reacts as "elevated" in measured mode.
/// Deliberately tied to the outcome, not to any input label.
const COHERENCE_ELEVATION_SCORE: u32 = 50;

/// Where a report's signal came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnalysisSource {
    Simulated { seed: u32, pathology: bool },
    Csv { seed: u32, rows: usize },
}

/// Complete output record of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub run_id: String,
    /// Unix timestamp, seconds.
    pub timestamp: u64,
    pub source: AnalysisSource,
    pub band_powers: BandPowers,
    /// Supplementary theta/alpha biomarker; informational, never scored.
    pub theta_alpha_ratio: f64,
    pub risk: RiskResult,
    pub classification: Classification,
    pub attribution: Vec<AttributionEntry>,
    pub coherence: Vec<CoherencePair>,
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn theta_alpha_ratio(powers: &BandPowers) -> f64 {
    round4(powers.theta / (powers.alpha + 1e-6))
}

/// Run the simulated pipeline: parametric band powers, seeded scoring,
/// simulated attribution, pathology-driven coherence.
pub fn run_simulated(pathology: bool, seed: u32) -> AnalysisReport {
    let band_powers = simulate_band_powers(pathology, seed);
    let risk = score_risk(&band_powers, seed, true);
    let classification = classify(risk.score);
    let attribution = simulate_attribution(pathology, seed);
    let coherence = estimate_coherence(pathology, seed);

    log::info!(
        "simulated run: seed={seed} pathology={pathology} score={} tier={}",
        risk.score,
        classification.level
    );

    AnalysisReport {
        run_id: Uuid::new_v4().to_string(),
        timestamp: now_unix(),
        source: AnalysisSource::Simulated { seed, pathology },
        theta_alpha_ratio: theta_alpha_ratio(&band_powers),
        band_powers,
        risk,
        classification,
        attribution,
        coherence,
    }
}

/// Run the measured pipeline over CSV text. Validation failures
/// short-circuit before any spectral computation and are returned
/// structurally — there is no fallback to simulated data.
pub fn run_from_csv(text: &str, seed: u32) -> Result<AnalysisReport, IngestError> {
    let signal = parse_csv(text)?;
    let band_powers = band_powers_from_signal(&signal);
    let risk = score_risk(&band_powers, seed, false);
    let classification = classify(risk.score);
    let attribution = attribution_from_powers(&band_powers);
    let elevated = risk.score >= COHERENCE_ELEVATION_SCORE;
    let coherence = estimate_coherence(elevated, seed);

    log::info!(
        "csv run: rows={} seed={seed} score={} tier={}",
        signal.len(),
        risk.score,
        classification.level
    );

    Ok(AnalysisReport {
        run_id: Uuid::new_v4().to_string(),
        timestamp: now_unix(),
        source: AnalysisSource::Csv {
            seed,
            rows: signal.len(),
        },
        theta_alpha_ratio: theta_alpha_ratio(&band_powers),
        band_powers,
        risk,
        classification,
        attribution,
        coherence,
    })
}
