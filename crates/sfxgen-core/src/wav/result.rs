//! WAV encoding result type.

use crate::render::RenderedBuffer;

use super::format::{PcmWidth, WavFormat};
use super::pcm::hash_pcm;
use super::writer::{samples_to_pcm, write_wav_to_vec};

/// An encoded WAV file and its metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8 or 16).
    pub bits_per_sample: u16,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples at the given width.
    pub fn from_mono(samples: &[f64], sample_rate: u32, width: PcmWidth) -> Self {
        let pcm = samples_to_pcm(samples, width);
        let pcm_hash = hash_pcm(&pcm);
        let format = WavFormat::mono(sample_rate, width);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            bits_per_sample: width.bits(),
            num_samples: samples.len(),
        }
    }

    /// Encodes a rendered buffer; its bit-depth tag picks the width.
    pub fn from_buffer(buffer: &RenderedBuffer) -> Self {
        Self::from_mono(
            &buffer.samples,
            buffer.sample_rate,
            PcmWidth::for_bit_depth(buffer.bit_depth),
        )
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / f64::from(self.sample_rate)
    }
}
