//! Reading mono PCM WAV files back into float buffers.

use std::io::Cursor;

use hound::{SampleFormat, WavReader};

use crate::render::{RenderedBuffer, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};

use super::format::{PcmWidth, WavFormat};

/// Reads the format of a WAV file.
///
/// Only uncompressed mono 8/16-bit PCM at a supported engine rate is
/// accepted.
pub fn read_format(wav_data: &[u8]) -> Option<WavFormat> {
    let reader = WavReader::new(Cursor::new(wav_data)).ok()?;
    format_of(&reader.spec())
}

fn format_of(spec: &hound::WavSpec) -> Option<WavFormat> {
    if spec.sample_format != SampleFormat::Int
        || spec.channels != WavFormat::CHANNELS
        || !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&spec.sample_rate)
    {
        return None;
    }
    Some(WavFormat::mono(spec.sample_rate, PcmWidth::from_bits(spec.bits_per_sample)?))
}

/// Decodes a WAV file written by the encoder.
///
/// Returns None for anything that is not a well-formed mono 8-bit or
/// 16-bit PCM file, including truncated sample data.
pub fn decode_wav(wav_data: &[u8]) -> Option<RenderedBuffer> {
    let mut reader = WavReader::new(Cursor::new(wav_data)).ok()?;
    let format = format_of(&reader.spec())?;

    // hound shifts unsigned 8-bit data to signed, so b = s + 128.
    let samples: Vec<f64> = match format.width {
        PcmWidth::U8 => reader
            .samples::<i8>()
            .map(|s| s.map(pcm8_to_sample))
            .collect::<Result<_, _>>()
            .ok()?,
        PcmWidth::I16 => reader
            .samples::<i16>()
            .map(|s| s.map(pcm16_to_sample))
            .collect::<Result<_, _>>()
            .ok()?,
    };

    Some(RenderedBuffer {
        sample_rate: format.sample_rate,
        bit_depth: format.width.bits() as u8,
        samples,
    })
}

/// `(b - 127.5) / 127.5` for the unsigned byte `b`.
pub(crate) fn pcm8_to_sample(s: i8) -> f64 {
    (f64::from(s) + 128.0 - 127.5) / 127.5
}

/// `i / 32767`, with `i16::MIN` pinned to -1.
pub(crate) fn pcm16_to_sample(s: i16) -> f64 {
    (f64::from(s) / 32767.0).clamp(-1.0, 1.0)
}
