//! Header writing and float-to-PCM conversion.

use std::io::{self, Write};

use super::format::{PcmWidth, WavFormat};

/// Size of the RIFF/WAVE header written before the PCM payload.
pub const HEADER_LEN: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&header(format, pcm_data.len()))?;
    writer.write_all(pcm_data)
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header(format, pcm_data.len()));
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Builds the 44-byte header for `data_len` bytes of PCM.
fn header(format: &WavFormat, data_len: usize) -> [u8; HEADER_LEN] {
    let data_size = data_len as u32;
    // Total file size minus the 8-byte RIFF preamble
    let file_size = data_size.saturating_add(36);

    let mut out = [0u8; HEADER_LEN];
    out[0..4].copy_from_slice(b"RIFF");
    out[4..8].copy_from_slice(&file_size.to_le_bytes());
    out[8..12].copy_from_slice(b"WAVE");

    out[12..16].copy_from_slice(b"fmt ");
    out[16..20].copy_from_slice(&16u32.to_le_bytes());
    out[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
    out[22..24].copy_from_slice(&WavFormat::CHANNELS.to_le_bytes());
    out[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    out[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    out[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    out[34..36].copy_from_slice(&format.width.bits().to_le_bytes());

    out[36..40].copy_from_slice(b"data");
    out[40..44].copy_from_slice(&data_size.to_le_bytes());
    out
}

/// Converts samples to unsigned 8-bit PCM via `round((s + 1) * 127.5)`.
///
/// Samples are clamped to [-1, 1]; NaN becomes silence (128).
pub fn samples_to_pcm8(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .map(|&s| ((sanitize(s) + 1.0) * 127.5).round() as u8)
        .collect()
}

/// Converts samples to signed 16-bit little-endian PCM via `floor(s * 32767)`.
///
/// Samples are clamped to [-1, 1]; NaN becomes 0.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let value = (sanitize(sample) * 32767.0).floor() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

/// Converts samples at the given width.
pub fn samples_to_pcm(samples: &[f64], width: PcmWidth) -> Vec<u8> {
    match width {
        PcmWidth::U8 => samples_to_pcm8(samples),
        PcmWidth::I16 => samples_to_pcm16(samples),
    }
}

fn sanitize(sample: f64) -> f64 {
    if sample.is_nan() {
        0.0
    } else {
        sample.clamp(-1.0, 1.0)
    }
}
