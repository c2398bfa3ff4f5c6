#![no_main]

use libfuzzer_sys::fuzz_target;
use sfxgen_core::{codec, render_seeded, RenderOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(params) = codec::decode(text) else {
        return;
    };
    assert!(params.is_finite());

    // Anything that decodes must re-encode to the same parameters and render
    // within range.
    let code = codec::encode(&params).expect("decoded params re-encode");
    assert_eq!(codec::decode(&code).expect("round trip"), params);

    let buffer = render_seeded(&params, &RenderOptions::with_duration(0.1), 0)
        .expect("default options render");
    assert!(buffer.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
});
