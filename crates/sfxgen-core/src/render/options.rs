//! Render request settings.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::params::ParameterSet;

/// Default clip length in seconds.
pub const DEFAULT_DURATION: f64 = 1.5;
/// Shortest clip the engine renders; shorter requests are stretched to it.
pub const MIN_DURATION: f64 = 0.1;
/// Longest clip the engine renders; longer requests are cut to it.
pub const MAX_DURATION: f64 = 10.0;

/// Default engine sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Lowest supported engine sample rate.
pub const MIN_SAMPLE_RATE: u32 = 8000;
/// Highest supported engine sample rate.
pub const MAX_SAMPLE_RATE: u32 = 192000;

/// How long to render, at what rate, and which lo-fi reductions to apply
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Clip length in seconds.
    pub duration: f64,
    /// Engine sample rate in Hz.
    pub sample_rate: u32,
    /// Decimate to this rate and hold back up to `sample_rate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sample_rate: Option<u32>,
    /// Quantize to this many bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            sample_rate: DEFAULT_SAMPLE_RATE,
            target_sample_rate: None,
            bit_depth: None,
        }
    }
}

impl RenderOptions {
    /// Options with the given duration and defaults elsewhere.
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Derives the lo-fi targets from the output fields of a parameter set.
    ///
    /// A `sample_rate` below the engine rate becomes the decimation target
    /// and a `sample_size` below 16 becomes the quantization depth.
    pub fn for_params(params: &ParameterSet) -> Self {
        let defaults = Self::default();
        Self {
            target_sample_rate: (params.sample_rate > 0 && params.sample_rate < defaults.sample_rate)
                .then_some(params.sample_rate),
            bit_depth: (params.sample_size > 0 && params.sample_size < 16).then_some(params.sample_size),
            ..defaults
        }
    }

    /// Duration after rejecting invalid values and clamping into range.
    pub fn clamped_duration(&self) -> SynthResult<f64> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SynthError::InvalidDuration {
                duration: self.duration,
            });
        }
        Ok(self.duration.clamp(MIN_DURATION, MAX_DURATION))
    }

    /// Checks the engine sample rate.
    pub fn checked_sample_rate(&self) -> SynthResult<u32> {
        if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            Ok(self.sample_rate)
        } else {
            Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            })
        }
    }

    /// Number of samples a render with these options produces.
    pub fn num_samples(&self) -> SynthResult<usize> {
        let duration = self.clamped_duration()?;
        let sample_rate = self.checked_sample_rate()?;
        Ok((f64::from(sample_rate) * duration).round() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_length() {
        assert_eq!(RenderOptions::default().num_samples().unwrap(), 66150);
    }

    #[test]
    fn test_duration_is_clamped() {
        assert_eq!(RenderOptions::with_duration(0.01).num_samples().unwrap(), 4410);
        assert_eq!(RenderOptions::with_duration(60.0).num_samples().unwrap(), 441000);
    }

    #[test]
    fn test_invalid_duration() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = RenderOptions::with_duration(duration).num_samples().unwrap_err();
            assert_eq!(err.code(), "SYNTH_001");
        }
    }

    #[test]
    fn test_invalid_sample_rate() {
        let options = RenderOptions {
            sample_rate: 1000,
            ..RenderOptions::default()
        };
        assert!(matches!(
            options.num_samples(),
            Err(SynthError::InvalidSampleRate { rate: 1000 })
        ));
    }

    #[test]
    fn test_for_params() {
        let params = ParameterSet {
            sample_rate: 11025,
            sample_size: 8,
            ..ParameterSet::default()
        };
        let options = RenderOptions::for_params(&params);
        assert_eq!(options.target_sample_rate, Some(11025));
        assert_eq!(options.bit_depth, Some(8));

        let options = RenderOptions::for_params(&ParameterSet::default());
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_partial_document() {
        let options: RenderOptions = serde_json::from_str(r#"{"duration": 0.5}"#).unwrap();
        assert_eq!(options, RenderOptions::with_duration(0.5));
    }
}
