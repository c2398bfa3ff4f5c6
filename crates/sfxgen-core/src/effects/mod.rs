//! Per-sample effects chain.
//!
//! The chain runs inside the render loop, after the oscillator, in a fixed
//! order: sub-bass, ring modulation, one-pole low-pass, one-pole high-pass,
//! distortion, bit-crush, chorus, echo, flanger. [`EffectsChain::finish`]
//! then applies envelope and volume and records the final output, which the
//! two filters read back on the next sample.

mod delay_line;
mod modulated;
mod shaping;

use std::f64::consts::{PI, TAU};

use crate::params::ParameterSet;

pub use delay_line::DelayLine;
pub use modulated::{Chorus, Echo, Flanger};
pub use shaping::{bit_crush, crush_bits, distort};

/// Fixed output headroom.
pub const HEADROOM: f64 = 0.3;

/// Ring modulator frequency is `ring_mod_freq * RING_MOD_SCALE_HZ`.
const RING_MOD_SCALE_HZ: f64 = 200.0;

/// Per-sample inputs from the oscillator stage.
#[derive(Debug, Clone, Copy)]
pub struct SampleContext {
    /// Modulated oscillator frequency in Hz.
    pub freq: f64,
    /// Render time in seconds.
    pub time: f64,
}

/// Effect amounts resolved from a parameter set and clamped to range.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSettings {
    pub sub_bass: f64,
    pub ring_mod_freq: f64,
    pub ring_mod_depth: f64,
    /// Low-pass blend factor; 1 disables the filter.
    pub lpf_cutoff: f64,
    /// High-pass subtraction factor; 0 disables the filter.
    pub hpf_cutoff: f64,
    pub distortion: f64,
    pub bit_crush: f64,
    pub chorus_rate: f64,
    pub chorus_depth: f64,
    pub delay_time: f64,
    pub delay_feedback: f64,
    pub flanger_rate: f64,
    pub flanger_depth: f64,
    pub flanger_delay: f64,
    pub volume: f64,
}

impl EffectSettings {
    /// Resolves and clamps the effect fields of `params`.
    ///
    /// `params` is expected to be validated (all fields finite).
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            sub_bass: params.sub_bass.clamp(0.0, 1.0),
            ring_mod_freq: params.ring_mod_freq.max(0.0),
            ring_mod_depth: params.ring_mod_depth.clamp(0.0, 1.0),
            lpf_cutoff: params.lpf_freq.clamp(0.0, 1.0),
            hpf_cutoff: params.hpf_freq.clamp(0.0, 1.0),
            distortion: params.distortion.clamp(0.0, 1.0),
            bit_crush: params.bit_crush.clamp(0.0, 1.0),
            chorus_rate: params.chorus_rate.max(0.0),
            chorus_depth: params.chorus_depth.clamp(0.0, 1.0),
            delay_time: params.delay_time.clamp(0.0, 1.0),
            delay_feedback: params.delay_feedback.clamp(0.0, 1.0),
            flanger_rate: params.flanger_rate.max(0.0),
            flanger_depth: params.flanger_depth.clamp(0.0, 1.0),
            flanger_delay: params.flanger_delay.clamp(0.0, 1.0),
            volume: params.sound_vol.clamp(0.0, 1.0),
        }
    }
}

/// Loop-carried state of the effects chain for one render.
#[derive(Debug, Clone)]
pub struct EffectsChain {
    settings: EffectSettings,
    sample_rate: f64,
    sub_phase: f64,
    prev_output: f64,
    chorus: Option<Chorus>,
    echo: Option<Echo>,
    flanger: Option<Flanger>,
}

impl EffectsChain {
    /// Allocates the delay lines the enabled stages need.
    pub fn new(settings: EffectSettings, sample_rate: f64) -> Self {
        let chorus = (settings.chorus_depth > 0.0)
            .then(|| Chorus::new(settings.chorus_rate, settings.chorus_depth, sample_rate));
        let echo = (settings.delay_time > 0.0)
            .then(|| Echo::new(settings.delay_time, settings.delay_feedback, sample_rate));
        let flanger = (settings.flanger_depth > 0.0).then(|| {
            Flanger::new(
                settings.flanger_rate,
                settings.flanger_depth,
                settings.flanger_delay,
                sample_rate,
            )
        });

        Self {
            settings,
            sample_rate,
            sub_phase: 0.0,
            prev_output: 0.0,
            chorus,
            echo,
            flanger,
        }
    }

    /// Builds the chain for a parameter set.
    pub fn from_params(params: &ParameterSet, sample_rate: f64) -> Self {
        Self::new(EffectSettings::from_params(params), sample_rate)
    }

    /// Final output of the previous sample.
    pub fn prev_output(&self) -> f64 {
        self.prev_output
    }

    /// Runs one oscillator sample through every enabled stage.
    pub fn process(&mut self, sample: f64, ctx: SampleContext) -> f64 {
        let s = &self.settings;
        let mut sample = sample;

        if s.sub_bass > 0.0 {
            self.sub_phase = (self.sub_phase + PI * ctx.freq / self.sample_rate).rem_euclid(TAU);
            sample += self.sub_phase.sin() * s.sub_bass * 0.5;
        }

        if s.ring_mod_freq != 0.0 && s.ring_mod_depth != 0.0 {
            let carrier = (TAU * s.ring_mod_freq * RING_MOD_SCALE_HZ * ctx.time).sin();
            sample *= 1.0 - s.ring_mod_depth + s.ring_mod_depth * carrier;
        }

        // Both filters blend with the previous *final* output sample.
        if s.lpf_cutoff < 1.0 {
            sample = sample * s.lpf_cutoff + self.prev_output * (1.0 - s.lpf_cutoff);
        }
        if s.hpf_cutoff > 0.0 {
            sample -= self.prev_output * s.hpf_cutoff;
        }

        sample = distort(sample, s.distortion);
        sample = bit_crush(sample, s.bit_crush);

        if let Some(chorus) = self.chorus.as_mut() {
            sample = chorus.process(sample, ctx.time);
        }
        if let Some(echo) = self.echo.as_mut() {
            sample = echo.process(sample);
        }
        if let Some(flanger) = self.flanger.as_mut() {
            sample = flanger.process(sample, ctx.time);
        }

        sample
    }

    /// Clamps, applies envelope, volume and headroom, and stores the result
    /// as the filters' history. Non-finite results become silence.
    pub fn finish(&mut self, sample: f64, envelope: f64) -> f64 {
        let out = sample.clamp(-1.0, 1.0) * envelope.clamp(0.0, 1.0) * self.settings.volume * HEADROOM;
        let out = if out.is_finite() { out } else { 0.0 };
        self.prev_output = out;
        out
    }
}
