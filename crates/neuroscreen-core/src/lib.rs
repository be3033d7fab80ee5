//! # neuroscreen-core
//!
//! **Demonstration EEG risk-screening pipeline.**
//!
//! `neuroscreen-core` generates or ingests EEG-like signals, estimates
//! per-band spectral power via single-bin spectral projection (no full
//! transform), derives a bounded composite risk score, and produces the
//! explanatory extras a dashboard needs: a tier classification, ranked
//! synthetic feature attributions, and synthetic inter-region coherence.
//!
//! ## Quick Start
//!
//! ```
//! use neuroscreen_core::{classify, score_risk, simulate_band_powers};
//!
//! // Deterministic: the same seed always yields the same study.
//! let powers = simulate_band_powers(false, 42);
//! let risk = score_risk(&powers, 42, true);
//! let tier = classify(risk.score);
//! assert!(risk.score <= 100);
//! println!("{}: {}", tier.level, risk.key_marker);
//! ```
//!
//! ## Architecture
//!
//! Generator|Ingestion → Power Estimator → Risk Scorer → Classifier,
//! with Attribution and Coherence branching off the estimator and the
//! scored outcome. Every stage is a pure function of (seed, flags, signal);
//! each seeded stage derives its own PRNG from `seed + fixed offset`, so
//! stage order never matters and every stage is independently testable.
//!
//! Two estimator paths share one output shape and are deliberately kept
//! separate: the simulated path synthesizes powers around literature
//! baselines (unnormalized), the measured path projects ingested samples
//! onto integer-Hz bins and normalizes the five powers to a fixed 4.4
//! total so both paths score on the same numeric scale.
//!
//! This is a demonstration system, not a medical device: band power uses a
//! simplified heuristic estimator and the SHAP-style attribution is derived
//! from the scorer's own deviations, not a trained model.

pub mod attribution;
pub mod classify;
pub mod coherence;
pub mod ingest;
pub mod pipeline;
pub mod risk;
pub mod rng;
pub mod signal;
pub mod spectrum;

pub use attribution::{
    AttributionEntry, FEATURE_COUNT, FeatureBand, attribution_from_powers, simulate_attribution,
};
pub use classify::{Classification, RiskLevel, classify};
pub use coherence::{COHERENCE_PAIRS, CoherencePair, estimate_coherence};
pub use ingest::{IngestError, parse_csv};
pub use pipeline::{AnalysisReport, AnalysisSource, run_from_csv, run_simulated};
pub use risk::{RiskResult, ScoreComponent, score_risk};
pub use rng::SeededRng;
pub use signal::{
    CHANNELS, DEFAULT_SAMPLE_RATE, MIN_SAMPLES, SIGNAL_LEN, Sample, Signal, generate_signal,
};
pub use spectrum::{
    Band, BandPowers, NORMALIZATION_TARGET, band_powers_from_signal, goertzel_power,
    simulate_band_powers,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
