//! Weighted deviation-from-baseline risk scoring.
//!
//! Four of the five bands contribute: delta, theta, and gamma score their
//! elevation above baseline; alpha scores its suppression below baseline
//! (the inversion is the point — alpha suppression drives risk). Beta is
//! computed and displayed elsewhere but excluded from scoring and from the
//! key-marker set; that asymmetry is intentional and preserved.

use serde::{Deserialize, Serialize};

use crate::rng::{RISK_OFFSET, SeededRng};
use crate::spectrum::{Band, BandPowers};

/// The four scored bands, in reduction order.
const SCORED_BANDS: [Band; 4] = [Band::Delta, Band::Theta, Band::Alpha, Band::Gamma];

/// One band's contribution to the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub band: Band,
    pub value: f64,
}

/// Composite risk result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Bounded composite score.
    pub score: u32,
    /// Simulated-mode confidence in [80, 95); omitted for measured mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u32>,
    /// Dominant contributor label. Ties during the left-to-right strict-max
    /// reduction resolve to the first-seen maximum in canonical band order.
    pub key_marker: String,
    /// Signed percentage string for the dominant band's deviation.
    pub key_deviation: String,
    /// Per-band contributions for the four scored bands, in canonical order.
    pub components: Vec<ScoreComponent>,
}

/// Weighted deviation component for one band.
fn component(band: Band, powers: &BandPowers) -> f64 {
    let p = powers.get(band);
    match band {
        Band::Delta => (p / 1.2 - 1.0) * 20.0,
        Band::Theta => (p / 0.7 - 1.0) * 15.0,
        // Inverted: suppression, not elevation, drives risk.
        Band::Alpha => (1.0 - p / 1.8) * 35.0,
        Band::Gamma => (p / 0.2 - 1.0) * 10.0,
        Band::Beta => 0.0,
    }
}

/// Fixed band -> phrase table for the key marker.
fn marker_label(band: Band) -> &'static str {
    match band {
        Band::Delta => "Delta Elevation",
        Band::Theta => "Theta Elevation",
        Band::Alpha => "Alpha Suppression",
        Band::Gamma => "Gamma Dysregulation",
        Band::Beta => unreachable!("beta is excluded from the key-marker set"),
    }
}

/// Human-readable deviation string from the same ratio the component uses.
fn deviation_string(band: Band, powers: &BandPowers) -> String {
    let p = powers.get(band);
    let base = band.baseline();
    match band {
        Band::Alpha => {
            let pct = ((1.0 - p / base) * 100.0).round();
            let sign = if pct >= 0.0 { "-" } else { "+" };
            format!("{sign}{:.0}% below normal", pct.abs())
        }
        _ => {
            let pct = ((p / base - 1.0) * 100.0).round();
            let sign = if pct >= 0.0 { "+" } else { "-" };
            format!("{sign}{:.0}% above normal", pct.abs())
        }
    }
}

/// Score a set of band powers.
///
/// `with_confidence` selects the simulated-mode confidence draw (PRNG at
/// `seed + 2000`); the measured path passes `false` and gets `None`. The
/// scorer has no error path: any well-formed [`BandPowers`] produces a
/// result, zero powers included (every power appears only in a ratio with a
/// nonzero literature baseline).
pub fn score_risk(powers: &BandPowers, seed: u32, with_confidence: bool) -> RiskResult {
    let components: Vec<ScoreComponent> = SCORED_BANDS
        .iter()
        .map(|&band| ScoreComponent {
            band,
            value: component(band, powers),
        })
        .collect();

    let raw: f64 = components.iter().map(|c| c.value).sum::<f64>() * 1.2;
    let score = raw.round().clamp(0.0, 100.0) as u32;

    let confidence = if with_confidence {
        let mut rng = SeededRng::for_stage(seed, RISK_OFFSET);
        Some(80 + (rng.next_f64() * 15.0).floor() as u32)
    } else {
        None
    };

    // Left-to-right strict-max reduction; first-seen maximum wins ties.
    let mut dominant = &components[0];
    for c in &components[1..] {
        if c.value > dominant.value {
            dominant = c;
        }
    }

    RiskResult {
        score,
        confidence,
        key_marker: marker_label(dominant.band).to_string(),
        key_deviation: deviation_string(dominant.band, powers),
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::simulate_band_powers;

    fn baselines() -> BandPowers {
        BandPowers {
            delta: 1.2,
            theta: 0.7,
            alpha: 1.8,
            beta: 0.5,
            gamma: 0.2,
        }
    }

    #[test]
    fn baseline_powers_score_zero() {
        let r = score_risk(&baselines(), 42, false);
        assert_eq!(r.score, 0);
        for c in &r.components {
            assert!(c.value.abs() < 1e-9, "{:?} nonzero at baseline", c.band);
        }
    }

    #[test]
    fn score_always_bounded() {
        for seed in 0..200 {
            for &flag in &[false, true] {
                let p = simulate_band_powers(flag, seed);
                let r = score_risk(&p, seed, true);
                assert!(r.score <= 100);
            }
        }
    }

    #[test]
    fn extreme_powers_clamp() {
        let mut high = baselines();
        high.delta = 50.0;
        high.theta = 50.0;
        high.alpha = 0.0;
        high.gamma = 50.0;
        assert_eq!(score_risk(&high, 0, false).score, 100);

        let mut low = baselines();
        low.delta = 0.0;
        low.theta = 0.0;
        low.gamma = 0.0;
        // Negative raw sum clamps to zero rather than underflowing.
        assert_eq!(score_risk(&low, 0, false).score, 0);
    }

    #[test]
    fn zero_powers_degrade_gracefully() {
        let r = score_risk(&BandPowers::zero(), 7, false);
        // delta -20, theta -15, alpha +35, gamma -10 -> sum 0, x1.2 -> 0.
        assert_eq!(r.score, 0);
        assert_eq!(r.key_marker, "Alpha Suppression");
    }

    #[test]
    fn confidence_only_when_requested() {
        let p = baselines();
        assert!(score_risk(&p, 42, false).confidence.is_none());
        let c = score_risk(&p, 42, true).confidence.unwrap();
        assert!((80..95).contains(&c), "confidence {c}");
    }

    #[test]
    fn confidence_is_deterministic_per_seed() {
        let p = baselines();
        assert_eq!(
            score_risk(&p, 42, true).confidence,
            score_risk(&p, 42, true).confidence
        );
    }

    #[test]
    fn beta_never_contributes() {
        let mut p = baselines();
        let before = score_risk(&p, 0, false);
        p.beta = 100.0;
        let after = score_risk(&p, 0, false);
        assert_eq!(before.score, after.score);
        assert_eq!(before.components, after.components);
    }

    #[test]
    fn key_marker_tracks_dominant_band() {
        let mut p = baselines();
        p.alpha = 0.5; // strong suppression
        let r = score_risk(&p, 0, false);
        assert_eq!(r.key_marker, "Alpha Suppression");
        assert!(r.key_deviation.starts_with('-'));
        assert!(r.key_deviation.contains("below normal"));

        let mut p = baselines();
        p.theta = 2.0;
        let r = score_risk(&p, 0, false);
        assert_eq!(r.key_marker, "Theta Elevation");
        assert!(r.key_deviation.starts_with('+'));
        assert!(r.key_deviation.contains("above normal"));
    }

    #[test]
    fn exact_ties_resolve_to_first_band() {
        // At the baselines every ratio is exactly 1.0, so all four
        // components tie at exactly 0.0 and the first-seen maximum wins.
        let r = score_risk(&baselines(), 0, false);
        assert!(r.components.iter().all(|c| c.value == 0.0));
        assert_eq!(r.key_marker, "Delta Elevation");
    }

    #[test]
    fn components_in_canonical_order() {
        let r = score_risk(&baselines(), 0, false);
        let bands: Vec<Band> = r.components.iter().map(|c| c.band).collect();
        assert_eq!(bands, vec![Band::Delta, Band::Theta, Band::Alpha, Band::Gamma]);
    }
}
