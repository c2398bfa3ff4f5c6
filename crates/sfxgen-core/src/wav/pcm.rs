//! Chunk lookup, PCM extraction and hashing.

/// Finds the body of the first chunk with the given id.
///
/// Returns None when the RIFF/WAVE preamble is missing or the chunk is
/// absent or truncated.
pub(crate) fn find_chunk<'a>(wav_data: &'a [u8], id: &[u8; 4]) -> Option<&'a [u8]> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12usize;
    while pos.checked_add(8)? <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size)?;
        if chunk_id == id {
            return wav_data.get(body_start..body_end);
        }

        // Chunks are word aligned
        pos = body_end.checked_add(chunk_size % 2)?;
    }

    None
}

/// Extracts PCM data from a WAV file buffer.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }
    find_chunk(wav_data, b"data")
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}

/// BLAKE3 hex digest of raw PCM bytes.
pub(crate) fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
