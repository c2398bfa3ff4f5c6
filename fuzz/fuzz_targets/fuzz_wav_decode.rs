#![no_main]

use libfuzzer_sys::fuzz_target;
use sfxgen_core::{decode_wav, encode_wav};

fuzz_target!(|data: &[u8]| {
    let Some(buffer) = decode_wav(data) else {
        return;
    };
    assert!(buffer.samples.iter().all(|s| (-1.0..=1.0).contains(s)));

    let encoded = encode_wav(&buffer);
    let again = decode_wav(&encoded.wav_data).expect("encoder output decodes");
    assert_eq!(again.sample_rate, buffer.sample_rate);
    assert_eq!(again.bit_depth, buffer.bit_depth);
    assert_eq!(again.samples.len(), buffer.samples.len());
});
