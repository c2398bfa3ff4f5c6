//! Tests for the parameter set.

use pretty_assertions::assert_eq;

use super::*;
use crate::rng::create_rng;

// =========================================================================
// Defaults
// =========================================================================

#[test]
fn test_default_values() {
    let p = ParameterSet::default();
    assert_eq!(p.wave_type, WaveType::Square);
    assert_eq!(p.base_freq, 0.3);
    assert_eq!(p.attack, 0.0);
    assert_eq!(p.sustain, 0.3);
    assert_eq!(p.decay, 0.4);
    assert_eq!(p.lpf_freq, 1.0);
    assert_eq!(p.sound_vol, 0.5);
    assert_eq!(p.sample_rate, 44100);
    assert_eq!(p.sample_size, 16);
}

#[test]
fn test_field_table_covers_every_numeric_field() {
    // 41 float controls + sample_rate + sample_size
    assert_eq!(NUMERIC_FIELDS.len(), 43);

    let json = serde_json::to_value(ParameterSet::default()).unwrap();
    let object = json.as_object().unwrap();
    for field in NUMERIC_FIELDS {
        assert!(object.contains_key(field.name), "missing {}", field.name);
    }
    // The two enums are the only keys outside the table.
    assert_eq!(object.len(), NUMERIC_FIELDS.len() + 2);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn test_validate_replaces_non_finite() {
    let p = ParameterSet {
        base_freq: f64::NAN,
        freq_ramp: f64::INFINITY,
        decay: f64::NEG_INFINITY,
        ..ParameterSet::default()
    };
    assert!(!p.is_finite());

    let v = p.validated();
    assert!(v.is_finite());
    assert_eq!(v.base_freq, 0.0);
    assert_eq!(v.freq_ramp, 0.0);
    assert_eq!(v.decay, 0.0);
    assert_eq!(v.sustain, 0.3);
}

#[test]
fn test_validate_is_idempotent() {
    let p = ParameterSet {
        lpf_freq: f64::NAN,
        sound_vol: 7.5,
        ..ParameterSet::default()
    };
    let once = p.validated();
    assert_eq!(once.validated(), once);
    // Out-of-range but finite values are left for the renderer to clamp.
    assert_eq!(once.sound_vol, 7.5);
}

// =========================================================================
// Morph
// =========================================================================

#[test]
fn test_morph_endpoints_are_exact() {
    let mut rng = create_rng(1);
    let a = presets::random(&mut rng);
    let b = presets::random(&mut rng);

    let at_zero = a.morph_to(&b, 0.0);
    let at_one = a.morph_to(&b, 1.0);

    for field in NUMERIC_FIELDS {
        assert_eq!(field.get(&at_zero), field.get(&a), "{}", field.name);
        assert_eq!(field.get(&at_one), field.get(&b), "{}", field.name);
    }
}

#[test]
fn test_morph_keeps_wave_and_noise_type() {
    let a = ParameterSet::default();
    let b = ParameterSet {
        wave_type: WaveType::Noise,
        noise_type: NoiseType::Brown,
        ..ParameterSet::default()
    };
    let m = a.morph_to(&b, 1.0);
    assert_eq!(m.wave_type, WaveType::Square);
    assert_eq!(m.noise_type, NoiseType::White);
}

#[test]
fn test_morph_midpoint_and_extrapolation() {
    let a = ParameterSet {
        base_freq: 0.2,
        sample_rate: 22050,
        ..ParameterSet::default()
    };
    let b = ParameterSet {
        base_freq: 0.6,
        sample_rate: 44100,
        ..ParameterSet::default()
    };

    let mid = a.morph_to(&b, 0.5);
    assert!((mid.base_freq - 0.4).abs() < 1e-12);
    assert_eq!(mid.sample_rate, 33075);

    let beyond = a.morph_to(&b, 1.5);
    assert!((beyond.base_freq - 0.8).abs() < 1e-12);
}

// =========================================================================
// Named access and mutation
// =========================================================================

#[test]
fn test_get_and_set_by_name() {
    let mut p = ParameterSet::default();
    p.set("chorus_depth", 0.75).unwrap();
    assert_eq!(p.get("chorus_depth").unwrap(), 0.75);

    p.set("sample_rate", 22049.6).unwrap();
    assert_eq!(p.sample_rate, 22050);

    assert!(matches!(
        p.set("warp_drive", 1.0),
        Err(SynthError::UnknownParameter { .. })
    ));
    assert!(p.get("warp_drive").is_err());
}

#[test]
fn test_mutated_leaves_identity_fields() {
    let base = ParameterSet {
        wave_type: WaveType::Sine,
        noise_type: NoiseType::Pink,
        ..ParameterSet::default()
    };
    let mut rng = create_rng(77);
    let m = base.mutated(&mut rng, 0.05);

    assert_eq!(m.wave_type, WaveType::Sine);
    assert_eq!(m.noise_type, NoiseType::Pink);
    assert_eq!(m.sound_vol, base.sound_vol);
    assert_eq!(m.sample_rate, base.sample_rate);
    assert_ne!(m, base);
    for field in NUMERIC_FIELDS {
        let delta = (field.get(&m) - field.get(&base)).abs();
        assert!(delta <= 0.05 + 1e-12, "{} moved by {}", field.name, delta);
    }
}

// =========================================================================
// JSON documents
// =========================================================================

#[test]
fn test_json_round_trip() {
    let mut rng = create_rng(12);
    let p = presets::teleport(&mut rng);
    let json = p.to_json_pretty().unwrap();
    assert_eq!(ParameterSet::from_json(&json).unwrap(), p);
}

#[test]
fn test_partial_document_fills_defaults() {
    let p = ParameterSet::from_json(r#"{"wave_type": 2, "base_freq": 0.5}"#).unwrap();
    assert_eq!(p.wave_type, WaveType::Sine);
    assert_eq!(p.base_freq, 0.5);
    assert_eq!(p.decay, 0.4);
}

#[test]
fn test_legacy_document_names() {
    let legacy = r#"{
        "wave_type": 1,
        "p_env_attack": 0.1,
        "p_env_sustain": 0.2,
        "p_env_punch": 0.3,
        "p_env_decay": 0.4,
        "p_base_freq": 0.5,
        "p_hpf_freq": 0.05,
        "reverb_wet": 0.5,
        "sound_vol": 0.25
    }"#;
    let p = ParameterSet::from_json(legacy).unwrap();
    assert_eq!(p.wave_type, WaveType::Sawtooth);
    assert_eq!(p.attack, 0.1);
    assert_eq!(p.sustain, 0.2);
    assert_eq!(p.sustain_punch, 0.3);
    assert_eq!(p.decay, 0.4);
    assert_eq!(p.base_freq, 0.5);
    assert_eq!(p.hpf_freq, 0.05);
    assert_eq!(p.sound_vol, 0.25);
}

#[test]
fn test_wave_type_clamped_on_load() {
    let p = ParameterSet::from_json(r#"{"wave_type": 9, "noise_type": -3}"#).unwrap();
    assert_eq!(p.wave_type, WaveType::Noise);
    assert_eq!(p.noise_type, NoiseType::White);

    let p = ParameterSet::from_json(r#"{"wave_type": 1.7}"#).unwrap();
    assert_eq!(p.wave_type, WaveType::Sawtooth);
}

#[test]
fn test_enums_serialize_as_numbers() {
    let p = ParameterSet {
        wave_type: WaveType::Noise,
        noise_type: NoiseType::Pink,
        ..ParameterSet::default()
    };
    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value["wave_type"], 3);
    assert_eq!(value["noise_type"], 1);
}
