//! Deterministic mono WAV encoding and decoding.
//!
//! Files carry a fixed 44-byte header and no timestamps or other variable
//! metadata, so equal buffers always produce identical bytes and the PCM
//! hash can be compared across runs. Reading goes through `hound`.

mod decode;
mod format;
mod pcm;
mod result;
mod writer;


use crate::render::RenderedBuffer;

pub use decode::{decode_wav, read_format};
pub use format::{PcmWidth, WavFormat};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{
    samples_to_pcm, samples_to_pcm16, samples_to_pcm8, write_wav, write_wav_to_vec, HEADER_LEN,
};

/// Encodes a rendered buffer, choosing 8- or 16-bit PCM from its bit-depth
/// tag.
pub fn encode_wav(buffer: &RenderedBuffer) -> WavResult {
    WavResult::from_buffer(buffer)
}
