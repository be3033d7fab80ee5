//! Multi-channel EEG-like time series and the seeded synthetic generator.
//!
//! A [`Signal`] is an ordered sequence of [`Sample`]s over the fixed
//! five-channel montage {Fp1, F3, C3, P3, O1}. The synthetic generator sums
//! one representative sinusoid per spectral band with per-channel randomized
//! amplitude and phase, plus centered per-sample noise.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::rng::{SIGNAL_OFFSET, SeededRng};
use crate::spectrum::Band;

/// Fixed channel montage, in canonical order.
pub const CHANNELS: [&str; 5] = ["Fp1", "F3", "C3", "P3", "O1"];

/// Number of channels in the montage.
pub const CHANNEL_COUNT: usize = CHANNELS.len();

/// Nominal sample rate for generated signals, in Hz.
pub const DEFAULT_SAMPLE_RATE: f64 = 256.0;

/// Generated signal duration in seconds.
pub const SIGNAL_DURATION_SECS: f64 = 5.0;

/// Samples per generated signal (256 Hz x 5 s).
pub const SIGNAL_LEN: usize = 1280;

/// Minimum samples required for reliable band estimation (~0.5 s at 256 Hz).
pub const MIN_SAMPLES: usize = 128;

/// Representative frequency per band used by the synthetic generator, in Hz.
const BAND_FREQS: [f64; 5] = [2.0, 6.0, 10.0, 20.0, 40.0];

/// Nominal per-band amplitude scale in microvolts, before randomization.
const BAND_AMPLITUDES: [f64; 5] = [20.0, 10.0, 15.0, 5.0, 2.0];

/// One time instant: a timestamp plus one amplitude per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time in seconds from signal start.
    pub time: f64,
    /// Amplitudes in microvolts, ordered as [`CHANNELS`].
    pub channels: [f64; CHANNEL_COUNT],
}

/// Ordered sequence of samples at a uniform nominal rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub samples: Vec<Sample>,
    /// Nominal sample rate in Hz.
    pub sample_rate: f64,
}

impl Signal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// One channel's samples as a flat series.
    pub fn channel(&self, index: usize) -> Vec<f64> {
        self.samples.iter().map(|s| s.channels[index]).collect()
    }

    /// Sample rate estimated from the first two timestamps.
    ///
    /// Falls back to 256 Hz for signals shorter than two samples or with a
    /// non-positive time delta.
    pub fn sample_rate_estimate(&self) -> f64 {
        if self.samples.len() < 2 {
            return DEFAULT_SAMPLE_RATE;
        }
        let dt = self.samples[1].time - self.samples[0].time;
        if dt > 0.0 {
            1.0 / dt
        } else {
            DEFAULT_SAMPLE_RATE
        }
    }
}

/// Generate a deterministic 5-second, 5-channel synthetic signal.
///
/// With the pathology flag set, band amplitudes are rescaled toward the
/// modeled abnormal profile (delta/theta/gamma elevated, alpha suppressed,
/// beta untouched). Without it, the same number of PRNG draws is still
/// consumed so that stream position is identical across both branches.
pub fn generate_signal(pathology: bool, seed: u32) -> Signal {
    let mut rng = SeededRng::for_stage(seed, SIGNAL_OFFSET);
    let mut samples: Vec<Sample> = (0..SIGNAL_LEN)
        .map(|i| Sample {
            time: i as f64 / DEFAULT_SAMPLE_RATE,
            channels: [0.0; CHANNEL_COUNT],
        })
        .collect();

    for ch in 0..CHANNEL_COUNT {
        let mut amps = [0.0f64; 5];
        let mut phases = [0.0f64; 5];
        for b in 0..5 {
            amps[b] = BAND_AMPLITUDES[b] * rng.range(0.5, 1.5);
        }
        for phase in &mut phases {
            *phase = rng.range(0.0, 2.0 * PI);
        }

        // Both branches consume exactly four draws; only the scaling differs.
        let delta_mult = rng.range(1.8, 2.5);
        let theta_mult = rng.range(1.5, 2.0);
        let alpha_mult = rng.range(0.3, 0.6);
        let gamma_mult = rng.range(1.5, 2.2);
        if pathology {
            amps[Band::Delta as usize] *= delta_mult;
            amps[Band::Theta as usize] *= theta_mult;
            amps[Band::Alpha as usize] *= alpha_mult;
            amps[Band::Gamma as usize] *= gamma_mult;
        }

        for sample in &mut samples {
            let t = sample.time;
            let mut v = 0.0;
            for b in 0..5 {
                v += amps[b] * (2.0 * PI * BAND_FREQS[b] * t + phases[b]).sin();
            }
            v += (rng.next_f64() - 0.5) * 4.0;
            sample.channels[ch] = v;
        }
    }

    Signal {
        samples,
        sample_rate: DEFAULT_SAMPLE_RATE,
    }
}
