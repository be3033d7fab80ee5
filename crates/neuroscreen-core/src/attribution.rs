//! Synthetic SHAP-style feature attribution.
//!
//! Produces a fixed list of 15 named pseudo-features, each tagged with a
//! source band (or the "coherence" pseudo-band) and an anatomical region.
//! Values are derived from the same deviations the scorer uses — not from a
//! trained model — and the list is sorted descending by absolute value
//! before being exposed. That ordering is part of the contract.
//!
//! Two independently maintained algorithms share the output shape: the
//! measured path derives everything from band powers; the simulated path
//! draws from disjoint pathological/healthy magnitude ranges with a fixed
//! per-band sign table. They model different situations and are deliberately
//! not unified.

use serde::{Deserialize, Serialize};

use crate::rng::{ATTRIBUTION_OFFSET, SeededRng};
use crate::spectrum::{Band, BandPowers, round4};

/// Number of pseudo-features, fixed by contract.
pub const FEATURE_COUNT: usize = 15;

/// Source tag for a pseudo-feature: a spectral band or the coherence
/// pseudo-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureBand {
    Delta,
    Theta,
    Alpha,
    Beta,
    Gamma,
    Coherence,
}

impl FeatureBand {
    pub fn name(self) -> &'static str {
        match self.band() {
            Some(b) => b.name(),
            None => "coherence",
        }
    }

    fn band(self) -> Option<Band> {
        match self {
            Self::Delta => Some(Band::Delta),
            Self::Theta => Some(Band::Theta),
            Self::Alpha => Some(Band::Alpha),
            Self::Beta => Some(Band::Beta),
            Self::Gamma => Some(Band::Gamma),
            Self::Coherence => None,
        }
    }
}

/// One ranked pseudo-feature contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributionEntry {
    pub name: &'static str,
    pub band: FeatureBand,
    /// Anatomical/electrode tag for the presentation layer.
    pub region: &'static str,
    /// Signed contribution; positive pushes toward risk.
    pub value: f64,
}

/// The fixed feature catalogue. Two of the fifteen carry the coherence
/// pseudo-band.
const FEATURES: [(&str, FeatureBand, &str); FEATURE_COUNT] = [
    ("Alpha Power (Occipital)", FeatureBand::Alpha, "O1"),
    ("Alpha Power (Parietal)", FeatureBand::Alpha, "P3"),
    ("Alpha Peak Frequency", FeatureBand::Alpha, "O1"),
    ("Delta Power (Frontal)", FeatureBand::Delta, "Fp1"),
    ("Delta Power (Central)", FeatureBand::Delta, "C3"),
    ("Delta/Alpha Ratio", FeatureBand::Delta, "Fp1"),
    ("Theta Power (Frontal)", FeatureBand::Theta, "F3"),
    ("Theta Power (Central)", FeatureBand::Theta, "C3"),
    ("Theta/Beta Ratio", FeatureBand::Theta, "F3"),
    ("Beta Power (Frontal)", FeatureBand::Beta, "F3"),
    ("Beta Power (Central)", FeatureBand::Beta, "C3"),
    ("Gamma Power (Frontal)", FeatureBand::Gamma, "Fp1"),
    ("Gamma Power (Parietal)", FeatureBand::Gamma, "P3"),
    ("Frontal-Parietal Coherence", FeatureBand::Coherence, "Fz-Pz"),
    ("Interhemispheric Coherence", FeatureBand::Coherence, "C3-C4"),
];

/// Sort descending by absolute value, in place. Stable, so equal magnitudes
/// keep catalogue order.
fn rank(mut entries: Vec<AttributionEntry>) -> Vec<AttributionEntry> {
    entries.sort_by(|a, b| {
        b.value
            .abs()
            .partial_cmp(&a.value.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
}

/// Measured-mode attribution, derived entirely from band powers.
///
/// The noise generator is seeded from the alpha power itself
/// (`round(alpha x 10000)`) so identical powers always yield identical
/// attributions without threading an extra seed through the measured path.
pub fn attribution_from_powers(powers: &BandPowers) -> Vec<AttributionEntry> {
    let mut rng = SeededRng::new((powers.alpha * 10_000.0).round() as u32);
    let entries = FEATURES
        .iter()
        .map(|&(name, band, region)| {
            let value = match band.band() {
                None => {
                    // Coherence features mirror alpha suppression.
                    (1.0 - powers.alpha / Band::Alpha.baseline()) * 0.15
                        + (rng.next_f64() - 0.5) * 0.03
                }
                Some(Band::Alpha) => {
                    let dev = (powers.alpha - Band::Alpha.baseline()) / Band::Alpha.baseline();
                    // Sign-flipped: alpha suppression increases risk.
                    -dev * 0.3 + (rng.next_f64() - 0.5) * 0.02
                }
                Some(b) => {
                    let dev = (powers.get(b) - b.baseline()) / b.baseline();
                    dev * 0.2 + (rng.next_f64() - 0.5) * 0.02
                }
            };
            AttributionEntry {
                name,
                band,
                region,
                value: round4(value),
            }
        })
        .collect();
    rank(entries)
}

/// Per-feature sign under the pathological profile; healthy flips every one.
fn pathological_sign(band: FeatureBand) -> f64 {
    match band {
        FeatureBand::Delta | FeatureBand::Theta | FeatureBand::Gamma => 1.0,
        FeatureBand::Alpha => 1.0, // suppression features contribute positively
        FeatureBand::Beta => -1.0,
        FeatureBand::Coherence => 1.0,
    }
}

/// Pathological magnitude range per band; disjoint from the healthy range.
fn magnitude_range(band: FeatureBand, pathology: bool) -> (f64, f64) {
    if !pathology {
        return (0.005, 0.05);
    }
    match band {
        FeatureBand::Delta => (0.10, 0.22),
        FeatureBand::Theta => (0.08, 0.18),
        FeatureBand::Alpha => (0.12, 0.25),
        FeatureBand::Beta => (0.06, 0.10),
        FeatureBand::Gamma => (0.06, 0.15),
        FeatureBand::Coherence => (0.08, 0.20),
    }
}

/// Simulated-mode attribution from a pathology flag and seed (PRNG at
/// `seed + 3000`). Both flag branches consume identical draw counts.
pub fn simulate_attribution(pathology: bool, seed: u32) -> Vec<AttributionEntry> {
    let mut rng = SeededRng::for_stage(seed, ATTRIBUTION_OFFSET);
    let entries = FEATURES
        .iter()
        .map(|&(name, band, region)| {
            let (lo, hi) = magnitude_range(band, pathology);
            let magnitude = rng.range(lo, hi);
            let noise = (rng.next_f64() - 0.5) * 0.02;
            let sign = if pathology {
                pathological_sign(band)
            } else {
                -pathological_sign(band)
            };
            AttributionEntry {
                name,
                band,
                region,
                value: round4(sign * magnitude + noise),
            }
        })
        .collect();
    rank(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::simulate_band_powers;

    fn assert_ranked(entries: &[AttributionEntry]) {
        assert_eq!(entries.len(), FEATURE_COUNT);
        for pair in entries.windows(2) {
            assert!(
                pair[0].value.abs() >= pair[1].value.abs(),
                "{} ({}) ranked above {} ({})",
                pair[0].name,
                pair[0].value,
                pair[1].name,
                pair[1].value
            );
        }
    }

    #[test]
    fn catalogue_has_two_coherence_features() {
        let n = FEATURES
            .iter()
            .filter(|(_, b, _)| *b == FeatureBand::Coherence)
            .count();
        assert_eq!(n, 2);
    }

    #[test]
    fn measured_attribution_ranked_and_sized() {
        for seed in [0u32, 7, 42, 1234] {
            let p = simulate_band_powers(true, seed);
            assert_ranked(&attribution_from_powers(&p));
        }
    }

    #[test]
    fn simulated_attribution_ranked_and_sized() {
        assert_ranked(&simulate_attribution(false, 42));
        assert_ranked(&simulate_attribution(true, 42));
    }

    #[test]
    fn measured_attribution_deterministic_per_powers() {
        let p = simulate_band_powers(false, 42);
        assert_eq!(attribution_from_powers(&p), attribution_from_powers(&p));
    }

    #[test]
    fn simulated_attribution_deterministic() {
        assert_eq!(simulate_attribution(true, 42), simulate_attribution(true, 42));
    }

    #[test]
    fn pathology_flips_simulated_signs() {
        // Noise is +-0.01 and pathological magnitudes are >= 0.06, so sign
        // is decided by the sign table for every pathological feature.
        let pathological = simulate_attribution(true, 42);
        for e in &pathological {
            let expected = pathological_sign(e.band);
            assert_eq!(
                e.value.signum(),
                expected,
                "{} should carry the pathological sign",
                e.name
            );
        }
    }

    #[test]
    fn suppressed_alpha_drives_measured_values_positive() {
        let mut p = simulate_band_powers(false, 1);
        p.alpha = 0.5; // deep suppression
        let entries = attribution_from_powers(&p);
        for e in entries.iter().filter(|e| e.band == FeatureBand::Alpha) {
            assert!(e.value > 0.0, "{} should be positive, got {}", e.name, e.value);
        }
        for e in entries.iter().filter(|e| e.band == FeatureBand::Coherence) {
            assert!(e.value > 0.0, "{} should be positive, got {}", e.name, e.value);
        }
    }

    #[test]
    fn values_rounded_to_four_decimals() {
        let p = simulate_band_powers(true, 3);
        for e in attribution_from_powers(&p) {
            assert_eq!(e.value, round4(e.value));
        }
        for e in simulate_attribution(false, 3) {
            assert_eq!(e.value, round4(e.value));
        }
    }
}
