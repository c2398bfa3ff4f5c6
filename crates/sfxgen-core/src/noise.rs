//! Colored noise generation.
//!
//! The noise waveform reads from a buffer filled up front, one value per
//! output sample. White noise is uniform; pink and brown are shaped from the
//! same white source.

use rand::Rng;

use crate::params::NoiseType;
use crate::rng::signed_unit;

/// Fills a buffer of `length` noise samples of the given color.
///
/// White and pink stay roughly inside [-1, 1]; brown is a damped random walk
/// and is not clamped here. The renderer clamps the waveform before it
/// enters the effects chain.
pub fn generate_noise<R: Rng + ?Sized>(noise_type: NoiseType, length: usize, rng: &mut R) -> Vec<f64> {
    match noise_type {
        NoiseType::White => white_noise(rng, length),
        NoiseType::Pink => pink_noise(rng, length),
        NoiseType::Brown => brown_noise(rng, length),
    }
}

/// Independent uniform draws in [-1, 1).
pub fn white_noise<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<f64> {
    (0..length).map(|_| signed_unit(rng)).collect()
}

/// Output gain of the pink filter. The unscaled sum has an RMS near 1.25
/// for uniform input; this brings it to about 0.14 so peaks sit well
/// inside [-1, 1].
pub const PINK_GAIN: f64 = 0.11;

/// Three-pole pink noise approximation (Paul Kellet, economy variant).
pub fn pink_noise<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<f64> {
    let mut b0 = 0.0;
    let mut b1 = 0.0;
    let mut b2 = 0.0;

    (0..length)
        .map(|_| {
            let white = signed_unit(rng);
            b0 = 0.99886 * b0 + white * 0.0555179;
            b1 = 0.99332 * b1 + white * 0.0750759;
            b2 = 0.96900 * b2 + white * 0.1538520;
            (b0 + b1 + b2 + white * 0.3104856) * PINK_GAIN
        })
        .collect()
}

/// Leaky-integrated white noise.
pub fn brown_noise<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<f64> {
    let mut last = 0.0;

    (0..length)
        .map(|_| {
            let white = signed_unit(rng);
            last = (last + white * 0.02) * 0.996;
            last * 3.5
        })
        .collect()
}
