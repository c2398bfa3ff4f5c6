//! Rendered mono audio.

/// A finished mono clip: float samples in [-1, 1] plus the format they are
/// meant to be played or encoded at.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit-depth tag; 8 or below encodes as 8-bit PCM, otherwise 16-bit.
    pub bit_depth: u8,
    /// Samples.
    pub samples: Vec<f64>,
}

impl RenderedBuffer {
    /// Wraps samples at the default 16-bit depth.
    pub fn new(sample_rate: u32, samples: Vec<f64>) -> Self {
        Self {
            sample_rate,
            bit_depth: 16,
            samples,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |peak, s| peak.max(s.abs()))
    }

    /// Root-mean-square level.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|s| s * s).sum();
        (sum / self.samples.len() as f64).sqrt()
    }
}
