//! The parameter set that drives a render.
//!
//! A [`ParameterSet`] is a plain value: nothing is validated or clamped on
//! assignment. [`ParameterSet::validated`] scrubs non-finite values and the
//! renderer clamps everything else into range when it builds its state.

mod fields;
pub mod presets;

#[cfg(test)]
mod tests;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

pub use fields::{FieldKind, NumericField, NUMERIC_FIELDS};
pub use presets::Preset;

/// Oscillator waveform.
///
/// Stored as a number (0-3) in preset documents. Out-of-range or fractional
/// values are floored and clamped into range on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "u8")]
pub enum WaveType {
    /// Pulse wave with variable duty cycle.
    #[default]
    Square,
    /// Rising sawtooth.
    Sawtooth,
    /// Pure sine.
    Sine,
    /// Pre-generated colored noise.
    Noise,
}

impl WaveType {
    /// All waveforms in index order.
    pub const ALL: [WaveType; 4] = [
        WaveType::Square,
        WaveType::Sawtooth,
        WaveType::Sine,
        WaveType::Noise,
    ];

    /// Picks the waveform at `index`, clamping past the last one.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

impl From<f64> for WaveType {
    fn from(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self::from_index(value.floor() as usize)
        } else {
            WaveType::Square
        }
    }
}

impl From<WaveType> for u8 {
    fn from(wave: WaveType) -> Self {
        wave as u8
    }
}

/// Color of the noise used by [`WaveType::Noise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "u8")]
pub enum NoiseType {
    /// Flat spectrum.
    #[default]
    White,
    /// Roughly -3 dB per octave.
    Pink,
    /// Roughly -6 dB per octave.
    Brown,
}

impl NoiseType {
    /// All noise colors in index order.
    pub const ALL: [NoiseType; 3] = [NoiseType::White, NoiseType::Pink, NoiseType::Brown];

    /// Picks the noise color at `index`, clamping past the last one.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }
}

impl From<f64> for NoiseType {
    fn from(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self::from_index(value.floor() as usize)
        } else {
            NoiseType::White
        }
    }
}

impl From<NoiseType> for u8 {
    fn from(noise: NoiseType) -> Self {
        noise as u8
    }
}

/// Every control of a sound effect.
///
/// Frequencies and rates are normalized controls, not Hz: the renderer maps
/// them to physical units (for example `base_freq * 440` Hz). Several fields
/// are carried for preset-file compatibility only and never reach the
/// renderer: `freq_dramp`, `freq_limit`, `pha_offset`, `pha_ramp`,
/// `lpf_ramp`, `lpf_resonance`, `hpf_ramp`, `reverb_size` and `reverb_decay`.
///
/// Legacy sfxr field names (`p_env_attack`, `p_base_freq`, ...) are accepted
/// when deserializing; unknown keys are ignored and missing keys take their
/// default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    // Oscillator
    pub wave_type: WaveType,
    #[serde(alias = "p_base_freq")]
    pub base_freq: f64,
    #[serde(alias = "p_freq_ramp")]
    pub freq_ramp: f64,
    #[serde(alias = "p_freq_dramp")]
    pub freq_dramp: f64,
    #[serde(alias = "p_freq_limit")]
    pub freq_limit: f64,
    #[serde(alias = "p_duty")]
    pub duty: f64,
    #[serde(alias = "p_duty_ramp")]
    pub duty_ramp: f64,
    pub noise_type: NoiseType,

    // Envelope
    #[serde(alias = "p_env_attack")]
    pub attack: f64,
    #[serde(alias = "p_env_sustain")]
    pub sustain: f64,
    #[serde(alias = "p_env_decay")]
    pub decay: f64,
    #[serde(alias = "p_env_punch")]
    pub sustain_punch: f64,
    #[serde(alias = "p_repeat_speed")]
    pub repeat_speed: f64,

    // Modulation
    #[serde(alias = "p_vib_strength")]
    pub vib_strength: f64,
    #[serde(alias = "p_vib_speed")]
    pub vib_speed: f64,
    #[serde(alias = "p_arp_mod")]
    pub arp_mod: f64,
    #[serde(alias = "p_arp_speed")]
    pub arp_speed: f64,
    pub fm_freq: f64,
    pub fm_depth: f64,
    pub lfo_rate: f64,
    pub lfo_depth: f64,
    pub ring_mod_freq: f64,
    pub ring_mod_depth: f64,

    // Phaser (legacy, not rendered)
    #[serde(alias = "p_pha_offset")]
    pub pha_offset: f64,
    #[serde(alias = "p_pha_ramp")]
    pub pha_ramp: f64,

    // Filters
    #[serde(alias = "p_lpf_freq")]
    pub lpf_freq: f64,
    #[serde(alias = "p_lpf_ramp")]
    pub lpf_ramp: f64,
    #[serde(alias = "p_lpf_resonance")]
    pub lpf_resonance: f64,
    #[serde(alias = "p_hpf_freq")]
    pub hpf_freq: f64,
    #[serde(alias = "p_hpf_ramp")]
    pub hpf_ramp: f64,

    // Effects
    pub distortion: f64,
    pub bit_crush: f64,
    pub sub_bass: f64,
    pub chorus_rate: f64,
    pub chorus_depth: f64,
    pub delay_time: f64,
    pub delay_feedback: f64,
    pub flanger_rate: f64,
    pub flanger_depth: f64,
    pub flanger_delay: f64,
    pub reverb_size: f64,
    pub reverb_decay: f64,

    // Output
    pub sound_vol: f64,
    /// Export sample rate in Hz.
    pub sample_rate: u32,
    /// Export bit depth (8 or 16).
    pub sample_size: u8,
}

impl Default for ParameterSet {
    /// A plain square blip: no attack, short sustain and decay, low-pass
    /// fully open.
    fn default() -> Self {
        Self {
            wave_type: WaveType::Square,
            base_freq: 0.3,
            freq_ramp: 0.0,
            freq_dramp: 0.0,
            freq_limit: 0.0,
            duty: 0.0,
            duty_ramp: 0.0,
            noise_type: NoiseType::White,

            attack: 0.0,
            sustain: 0.3,
            decay: 0.4,
            sustain_punch: 0.0,
            repeat_speed: 0.0,

            vib_strength: 0.0,
            vib_speed: 0.0,
            arp_mod: 0.0,
            arp_speed: 0.0,
            fm_freq: 0.0,
            fm_depth: 0.0,
            lfo_rate: 0.0,
            lfo_depth: 0.0,
            ring_mod_freq: 0.0,
            ring_mod_depth: 0.0,

            pha_offset: 0.0,
            pha_ramp: 0.0,

            lpf_freq: 1.0,
            lpf_ramp: 0.0,
            lpf_resonance: 0.0,
            hpf_freq: 0.0,
            hpf_ramp: 0.0,

            distortion: 0.0,
            bit_crush: 0.0,
            sub_bass: 0.0,
            chorus_rate: 0.0,
            chorus_depth: 0.0,
            delay_time: 0.0,
            delay_feedback: 0.0,
            flanger_rate: 0.0,
            flanger_depth: 0.0,
            flanger_delay: 0.0,
            reverb_size: 0.0,
            reverb_decay: 0.0,

            sound_vol: 0.5,
            sample_rate: 44100,
            sample_size: 16,
        }
    }
}

impl ParameterSet {
    /// Returns a copy with every non-finite numeric field replaced by 0.
    ///
    /// Idempotent, and never fails.
    pub fn validated(&self) -> Self {
        let mut out = self.clone();
        for field in NUMERIC_FIELDS {
            if !field.get(&out).is_finite() {
                field.set(&mut out, 0.0);
            }
        }
        out
    }

    /// True when every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        NUMERIC_FIELDS.iter().all(|f| f.get(self).is_finite())
    }

    /// Linearly interpolates every numeric field toward `target`.
    ///
    /// `amount` outside [0, 1] extrapolates. Waveform and noise color are
    /// taken from `self`. The endpoints are exact: 0 returns `self`'s values
    /// and 1 returns `target`'s.
    pub fn morph_to(&self, target: &ParameterSet, amount: f64) -> Self {
        let mut out = self.clone();
        for field in NUMERIC_FIELDS {
            let from = field.get(self);
            let to = field.get(target);
            let value = if amount == 0.0 {
                from
            } else if amount == 1.0 {
                to
            } else {
                from + (to - from) * amount
            };
            field.set(&mut out, value);
        }
        out
    }

    /// Returns a copy with roughly half of the tone-shaping fields nudged by
    /// a uniform offset in `[-amount, amount)`.
    ///
    /// Waveform, noise color, volume and the output format are left alone.
    pub fn mutated<R: Rng + ?Sized>(&self, rng: &mut R, amount: f64) -> Self {
        let mut out = self.clone();
        for field in NUMERIC_FIELDS.iter().filter(|f| f.is_mutable()) {
            if rng.gen::<bool>() {
                let value = field.get(&out) + crate::rng::signed_unit(rng) * amount;
                field.set(&mut out, value);
            }
        }
        out
    }

    /// Reads a numeric field by name.
    pub fn get(&self, name: &str) -> SynthResult<f64> {
        NumericField::find(name)
            .map(|f| f.get(self))
            .ok_or_else(|| SynthError::unknown_parameter(name))
    }

    /// Writes a numeric field by name. Integer fields round the value.
    pub fn set(&mut self, name: &str, value: f64) -> SynthResult<()> {
        let field = NumericField::find(name).ok_or_else(|| SynthError::unknown_parameter(name))?;
        field.set(self, value);
        Ok(())
    }

    /// Serializes to pretty-printed JSON for preset files.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.validated())
    }

    /// Parses a preset file.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
