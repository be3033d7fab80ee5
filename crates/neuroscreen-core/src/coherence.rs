//! Synthetic inter-region coherence.
//!
//! Not true cross-spectral coherence: three named electrode-pair values
//! correlated with the overall risk outcome. Elevated risk pulls coherence
//! down into the disconnected range; low risk keeps it in the healthy range.

use serde::Serialize;

use crate::rng::{COHERENCE_OFFSET, SeededRng};

/// Electrode pairs reported, in fixed order.
pub const COHERENCE_PAIRS: [&str; 3] = ["Fz-Pz", "C3-C4", "F3-P3"];

/// One electrode-pair coherence value, roughly in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoherencePair {
    pub pair: &'static str,
    pub value: f64,
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Estimate synthetic coherence for all pairs (PRNG at `seed + 4000`).
///
/// Each pair independently draws a base from [0.65, 0.80) for low risk or
/// [0.25, 0.45) when elevated, plus small symmetric jitter. Both branches
/// consume identical draw counts.
pub fn estimate_coherence(elevated: bool, seed: u32) -> Vec<CoherencePair> {
    let mut rng = SeededRng::for_stage(seed, COHERENCE_OFFSET);
    COHERENCE_PAIRS
        .iter()
        .map(|&pair| {
            let base = if elevated {
                rng.range(0.25, 0.45)
            } else {
                rng.range(0.65, 0.80)
            };
            let jitter = (rng.next_f64() - 0.5) * 0.05;
            CoherencePair {
                pair,
                value: round3(base + jitter),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_per_seed() {
        assert_eq!(estimate_coherence(true, 42), estimate_coherence(true, 42));
        assert_eq!(estimate_coherence(false, 42), estimate_coherence(false, 42));
    }

    #[test]
    fn reports_all_pairs_in_order() {
        let pairs = estimate_coherence(false, 7);
        let names: Vec<&str> = pairs.iter().map(|p| p.pair).collect();
        assert_eq!(names, COHERENCE_PAIRS);
    }

    #[test]
    fn elevated_risk_lowers_coherence() {
        for seed in 0..50 {
            let low = estimate_coherence(false, seed);
            let high = estimate_coherence(true, seed);
            for (l, h) in low.iter().zip(&high) {
                // Ranges plus +-0.025 jitter never overlap.
                assert!(l.value >= 0.625, "low-risk {} = {}", l.pair, l.value);
                assert!(h.value <= 0.475, "elevated {} = {}", h.pair, h.value);
            }
        }
    }

    #[test]
    fn values_rounded_to_three_decimals() {
        for p in estimate_coherence(true, 9) {
            assert_eq!(p.value, (p.value * 1000.0).round() / 1000.0);
        }
    }
}
