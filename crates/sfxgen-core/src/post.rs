//! Buffer-level lo-fi reductions applied after a render completes.
//!
//! Both stages are nearest-neighbour / step quantizers on purpose: the
//! stepped artifacts are the effect.

use crate::render::{RenderOptions, RenderedBuffer};

/// Smallest bit depth the quantizer accepts.
pub const MIN_BIT_DEPTH: u8 = 2;
/// Largest bit depth the quantizer accepts.
pub const MAX_BIT_DEPTH: u8 = 16;

/// Picks every `source_rate / target_rate`-th sample (nearest neighbour).
///
/// Returns the input unchanged when `target_rate` is zero or not below
/// `source_rate`.
pub fn decimate(samples: &[f64], source_rate: u32, target_rate: u32) -> Vec<f64> {
    if target_rate == 0 || target_rate >= source_rate || samples.is_empty() {
        return samples.to_vec();
    }
    let ratio = f64::from(source_rate) / f64::from(target_rate);
    let len = ((samples.len() as f64 / ratio).round() as usize).max(1);
    (0..len)
        .map(|j| samples[nearest_index(j, ratio, samples.len())])
        .collect()
}

/// Decimates to `target_rate` and holds each kept sample back up to
/// `source_rate`, so the length and nominal rate are unchanged.
pub fn reduce_sample_rate(samples: &[f64], source_rate: u32, target_rate: u32) -> Vec<f64> {
    if target_rate == 0 || target_rate >= source_rate || samples.is_empty() {
        return samples.to_vec();
    }
    let reduced = decimate(samples, source_rate, target_rate);
    let ratio = f64::from(target_rate) / f64::from(source_rate);
    (0..samples.len())
        .map(|i| reduced[nearest_index(i, ratio, reduced.len())])
        .collect()
}

/// Quantizes to `2^(bits-1) - 1` levels per polarity after clamping to
/// [-1, 1]. `bits` is clamped to [2, 16].
pub fn reduce_bit_depth(samples: &[f64], bits: u8) -> Vec<f64> {
    let levels = quantization_levels(bits);
    samples
        .iter()
        .map(|s| (s.clamp(-1.0, 1.0) * levels).round() / levels)
        .collect()
}

/// Positive quantization levels used for a bit depth.
pub fn quantization_levels(bits: u8) -> f64 {
    let bits = bits.clamp(MIN_BIT_DEPTH, MAX_BIT_DEPTH);
    f64::from((1u32 << (bits - 1)) - 1)
}

/// Applies the reductions requested in `options` to a rendered buffer.
///
/// Sample-rate reduction runs first, then bit-depth reduction. The buffer's
/// bit-depth tag follows the (clamped) requested depth.
pub fn post_process(buffer: RenderedBuffer, options: &RenderOptions) -> RenderedBuffer {
    let mut buffer = buffer;

    if let Some(target) = options.target_sample_rate {
        buffer.samples = reduce_sample_rate(&buffer.samples, buffer.sample_rate, target);
    }
    if let Some(bits) = options.bit_depth {
        buffer.samples = reduce_bit_depth(&buffer.samples, bits);
        buffer.bit_depth = bits.clamp(MIN_BIT_DEPTH, MAX_BIT_DEPTH);
    }

    buffer
}

fn nearest_index(i: usize, ratio: f64, len: usize) -> usize {
    ((i as f64 * ratio).floor() as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64 / len as f64).collect()
    }

    #[test]
    fn test_decimate_picks_every_nth() {
        let out = decimate(&ramp(8), 8000, 4000);
        assert_eq!(out, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_decimate_ignores_upsampling() {
        let input = ramp(8);
        assert_eq!(decimate(&input, 8000, 16000), input);
        assert_eq!(decimate(&input, 8000, 0), input);
    }

    #[test]
    fn test_reduce_sample_rate_holds_steps() {
        let out = reduce_sample_rate(&ramp(8), 8000, 4000);
        assert_eq!(out, vec![0.0, 0.0, 0.25, 0.25, 0.5, 0.5, 0.75, 0.75]);
    }

    #[test]
    fn test_reduce_sample_rate_keeps_length() {
        let input = ramp(44100);
        let out = reduce_sample_rate(&input, 44100, 11025);
        assert_eq!(out.len(), input.len());
        for chunk in out.chunks(4) {
            assert!(chunk.iter().all(|&s| s == chunk[0]));
        }
    }

    #[test]
    fn test_reduce_bit_depth_levels() {
        assert_eq!(quantization_levels(8), 127.0);
        assert_eq!(quantization_levels(16), 32767.0);
        assert_eq!(quantization_levels(1), 1.0);
        assert_eq!(quantization_levels(40), 32767.0);

        let out = reduce_bit_depth(&[0.9, 0.4, -0.6, -2.0], 2);
        assert_eq!(out, vec![1.0, 0.0, -1.0, -1.0]);
    }

    #[test]
    fn test_post_process_tags_bit_depth() {
        let buffer = RenderedBuffer::new(8000, ramp(16));
        let options = RenderOptions {
            target_sample_rate: Some(4000),
            bit_depth: Some(4),
            ..RenderOptions::default()
        };
        let out = post_process(buffer, &options);
        assert_eq!(out.bit_depth, 4);
        assert_eq!(out.sample_rate, 8000);
        assert_eq!(out.len(), 16);
        assert!(out.samples.iter().all(|s| ((s * 7.0).round() - s * 7.0).abs() < 1e-12));
    }

    #[test]
    fn test_post_process_without_targets_is_identity() {
        let buffer = RenderedBuffer::new(8000, ramp(16));
        assert_eq!(post_process(buffer.clone(), &RenderOptions::default()), buffer);
    }
}
