//! Per-band spectral power estimation.
//!
//! Two estimators share one output shape ([`BandPowers`]):
//!
//! - *Simulated*: parametric synthesis around literature baselines, seeded,
//!   no signal data involved. Values are NOT normalized — they vary
//!   independently around the baselines.
//! - *Measured*: single-frequency spectral projection (Goertzel recurrence)
//!   over an ingested [`Signal`], one bin per integer Hz per band, then
//!   normalized so the five powers total exactly 4.4. No full transform is
//!   computed.
//!
//! The asymmetry is intentional: the simulated path models a parametric
//! patient, the measured path puts arbitrary recordings on the same numeric
//! scale as simulation despite wholly different absolute units.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::rng::{BAND_POWER_OFFSET, SeededRng};
use crate::signal::{CHANNEL_COUNT, Signal};

/// The five canonical spectral bands, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Delta,
    Theta,
    Alpha,
    Beta,
    Gamma,
}

impl Band {
    /// All bands in canonical spectral order.
    pub const ALL: [Band; 5] = [
        Band::Delta,
        Band::Theta,
        Band::Alpha,
        Band::Beta,
        Band::Gamma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Band::Delta => "delta",
            Band::Theta => "theta",
            Band::Alpha => "alpha",
            Band::Beta => "beta",
            Band::Gamma => "gamma",
        }
    }

    /// Literature baseline power in uV^2/Hz.
    pub fn baseline(self) -> f64 {
        match self {
            Band::Delta => 1.2,
            Band::Theta => 0.7,
            Band::Alpha => 1.8,
            Band::Beta => 0.5,
            Band::Gamma => 0.2,
        }
    }

    /// Frequency range in Hz (lower inclusive, upper inclusive).
    pub fn range_hz(self) -> (f64, f64) {
        match self {
            Band::Delta => (0.5, 4.0),
            Band::Theta => (4.0, 8.0),
            Band::Alpha => (8.0, 13.0),
            Band::Beta => (13.0, 30.0),
            Band::Gamma => (30.0, 50.0),
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalization target for measured-mode powers: the sum of the five
/// literature baselines.
pub const NORMALIZATION_TARGET: f64 = 4.4;

/// Per-band power magnitudes in uV^2/Hz. Field order is canonical spectral
/// order and doubles as serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandPowers {
    pub delta: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl BandPowers {
    pub fn zero() -> Self {
        Self {
            delta: 0.0,
            theta: 0.0,
            alpha: 0.0,
            beta: 0.0,
            gamma: 0.0,
        }
    }

    pub fn get(&self, band: Band) -> f64 {
        match band {
            Band::Delta => self.delta,
            Band::Theta => self.theta,
            Band::Alpha => self.alpha,
            Band::Beta => self.beta,
            Band::Gamma => self.gamma,
        }
    }

    pub fn set(&mut self, band: Band, value: f64) {
        match band {
            Band::Delta => self.delta = value,
            Band::Theta => self.theta = value,
            Band::Alpha => self.alpha = value,
            Band::Beta => self.beta = value,
            Band::Gamma => self.gamma = value,
        }
    }

    pub fn total(&self) -> f64 {
        self.delta + self.theta + self.alpha + self.beta + self.gamma
    }
}

/// Round to four decimals — the construction-boundary policy for powers.
pub(crate) fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Simulated pathological multiplier range per band.
fn pathological_range(band: Band) -> (f64, f64) {
    match band {
        Band::Delta => (1.6, 2.5),
        Band::Theta => (1.4, 1.9),
        Band::Alpha => (0.25, 0.55),
        Band::Beta => (0.7, 0.95),
        Band::Gamma => (1.4, 2.1),
    }
}

/// Simulated-mode estimator: baseline x seeded multiplier per band.
///
/// Healthy draws come from [0.85, 1.15); pathological draws from
/// band-specific elevated/suppressed ranges. Output is deliberately not
/// normalized to the 4.4 total.
pub fn simulate_band_powers(pathology: bool, seed: u32) -> BandPowers {
    let mut rng = SeededRng::for_stage(seed, BAND_POWER_OFFSET);
    let mut powers = BandPowers::zero();
    for band in Band::ALL {
        let mult = if pathology {
            let (lo, hi) = pathological_range(band);
            rng.range(lo, hi)
        } else {
            rng.range(0.85, 1.15)
        };
        powers.set(band, round4(band.baseline() * mult));
    }
    powers
}

/// Squared magnitude of one spectral bin via the Goertzel recurrence.
///
/// O(N) per frequency and equal to one DFT bin's `|X_k|^2 / N` — no full
/// transform. The caller is expected to have removed any DC offset.
pub fn goertzel_power(samples: &[f64], freq_hz: f64, sample_rate: f64) -> f64 {
    if samples.is_empty() || sample_rate <= 0.0 {
        return 0.0;
    }
    let omega = 2.0 * PI * freq_hz / sample_rate;
    let coeff = 2.0 * omega.cos();
    let mut s1 = 0.0f64;
    let mut s2 = 0.0f64;
    for &x in samples {
        let s0 = x + coeff * s1 - s2;
        s2 = s1;
        s1 = s0;
    }
    (s1 * s1 + s2 * s2 - coeff * s1 * s2) / samples.len() as f64
}

/// Measured-mode estimator: single-bin spectral projection over a signal.
///
/// Per band and channel, the channel's DC mean is removed and power is
/// accumulated at every integer Hz within the band range (upper edges capped
/// at Nyquist), then averaged across channels. The five raw powers are
/// rescaled to total exactly [`NORMALIZATION_TARGET`], preserving inter-band
/// ratios; a zero raw total is left at zero.
pub fn band_powers_from_signal(signal: &Signal) -> BandPowers {
    let sample_rate = signal.sample_rate_estimate();
    let nyquist = sample_rate / 2.0;

    // Demean each channel once; every band reuses the centered series.
    let channels: Vec<Vec<f64>> = (0..CHANNEL_COUNT)
        .map(|ch| {
            let series = signal.channel(ch);
            let mean = series.iter().sum::<f64>() / series.len().max(1) as f64;
            series.iter().map(|v| v - mean).collect()
        })
        .collect();

    let mut powers = BandPowers::zero();
    for band in Band::ALL {
        let (lo, hi) = band.range_hz();
        let hi = hi.min(nyquist);
        if hi < lo {
            continue;
        }
        let first = lo.ceil().max(1.0) as u32;
        let last = hi.floor() as u32;
        let mut band_power = 0.0;
        for series in &channels {
            for freq in first..=last {
                band_power += goertzel_power(series, f64::from(freq), sample_rate);
            }
        }
        powers.set(band, band_power / CHANNEL_COUNT as f64);
    }

    let total = powers.total();
    if total > 0.0 {
        let scale = NORMALIZATION_TARGET / total;
        for band in Band::ALL {
            powers.set(band, round4(powers.get(band) * scale));
        }
    }
    powers
}
