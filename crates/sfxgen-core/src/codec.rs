//! Compact share codes for parameter sets.
//!
//! A share code is the parameter set's compact JSON document encoded as
//! URL-safe base64 without padding, so it can be pasted into a URL query.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::CodecError;
use crate::params::ParameterSet;

/// Encodes a parameter set as a share code.
///
/// Non-finite fields are written as 0, so decoding always yields the
/// validated form of `params`.
pub fn encode(params: &ParameterSet) -> Result<String, CodecError> {
    let json = serde_json::to_vec(&params.validated())?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a share code.
///
/// Surrounding whitespace, trailing `=` padding and the standard base64
/// alphabet (`+`, `/`) are tolerated. Fields missing from the document take
/// their defaults.
pub fn decode(code: &str) -> Result<ParameterSet, CodecError> {
    let normalized: String = code
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    let json = String::from_utf8(bytes)?;
    let params: ParameterSet = serde_json::from_str(&json)?;
    Ok(params.validated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Preset, WaveType};
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_every_preset() {
        let mut rng = create_rng(11);
        for preset in Preset::ALL {
            let params = preset.generate(&mut rng);
            let code = encode(&params).unwrap();
            assert_eq!(decode(&code).unwrap(), params, "{}", preset);
        }
    }

    #[test]
    fn test_code_is_url_safe() {
        let code = encode(&ParameterSet::default()).unwrap();
        assert!(code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let params = Preset::Jump.generate(&mut create_rng(3));
        assert_eq!(encode(&params).unwrap(), encode(&params.clone()).unwrap());
    }

    #[test]
    fn test_encode_scrubs_non_finite() {
        let params = ParameterSet {
            base_freq: f64::NAN,
            ..ParameterSet::default()
        };
        let decoded = decode(&encode(&params).unwrap()).unwrap();
        assert_eq!(decoded.base_freq, 0.0);
    }

    #[test]
    fn test_decode_tolerates_padding_and_whitespace() {
        let params = ParameterSet {
            wave_type: WaveType::Sine,
            ..ParameterSet::default()
        };
        let code = format!("  {}==\n", encode(&params).unwrap());
        assert_eq!(decode(&code).unwrap(), params);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("!!not base64!!").unwrap_err().code(), "CODEC_001");
        let not_utf8 = URL_SAFE_NO_PAD.encode([0xffu8, 0xfe, 0xfd]);
        assert_eq!(decode(&not_utf8).unwrap_err().code(), "CODEC_002");
        let not_json = URL_SAFE_NO_PAD.encode("hello");
        assert_eq!(decode(&not_json).unwrap_err().code(), "CODEC_003");
    }

    #[test]
    fn test_decode_partial_document() {
        let code = URL_SAFE_NO_PAD.encode(r#"{"wave_type":3,"p_env_decay":0.2}"#);
        let params = decode(&code).unwrap();
        assert_eq!(params.wave_type, WaveType::Noise);
        assert_eq!(params.decay, 0.2);
        assert_eq!(params.sustain, ParameterSet::default().sustain);
    }
}
