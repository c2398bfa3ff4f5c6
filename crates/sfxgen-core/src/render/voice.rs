//! Oscillator state for one render: running frequency, duty cycle,
//! arpeggiator, frequency modulators and the waveform itself.

use std::f64::consts::TAU;

use rand::Rng;

use crate::params::{ParameterSet, WaveType};
use crate::rng::signed_unit;

/// Lowest frequency the ramped oscillator may reach.
pub const MIN_FREQ_HZ: f64 = 20.0;
/// Highest frequency the ramped oscillator may reach.
pub const MAX_FREQ_HZ: f64 = 20000.0;

const BASE_FREQ_SCALE_HZ: f64 = 440.0;
const FREQ_RAMP_SCALE_HZ: f64 = 10.0;
const DUTY_RAMP_SCALE: f64 = 0.0001;
const MIN_DUTY: f64 = 0.01;
const MAX_DUTY: f64 = 0.99;

const ARP_RATE_SCALE: f64 = 50.0;
const ARP_MIN_MULTIPLIER: f64 = 0.1;
const ARP_MAX_MULTIPLIER: f64 = 10.0;

const FM_RATE_SCALE_HZ: f64 = 50.0;
const FM_DEPTH_SCALE_HZ: f64 = 100.0;
const LFO_RATE_SCALE_HZ: f64 = 5.0;
const LFO_DEPTH_SCALE_HZ: f64 = 50.0;
const VIBRATO_RATE_SCALE_HZ: f64 = 50.0;
const VIBRATO_DEPTH_SCALE: f64 = 0.1;

/// Modulation amounts are bounded so no combination can overflow the
/// derived frequency.
const MAX_MODULATION: f64 = 100.0;

/// One oscillator sample and the frequency it was produced at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceOutput {
    /// Raw waveform value in [-1, 1].
    pub sample: f64,
    /// Derived (modulated) frequency in Hz.
    pub freq: f64,
}

/// Periodic pitch-multiplier randomization.
#[derive(Debug, Clone)]
struct Arpeggio {
    step: f64,
    modulation: f64,
    timer: f64,
    multiplier: f64,
}

impl Arpeggio {
    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.timer += self.step;
        if self.timer >= 1.0 {
            self.timer = 0.0;
            self.multiplier = 1.0 + self.modulation * signed_unit(rng);
        }
    }

    fn multiplier(&self) -> f64 {
        self.multiplier.clamp(ARP_MIN_MULTIPLIER, ARP_MAX_MULTIPLIER)
    }
}

/// A sine modulator described by a rate and a depth, both in Hz.
#[derive(Debug, Clone, Copy)]
struct Modulator {
    rate_hz: f64,
    depth: f64,
}

impl Modulator {
    /// Gated on both amounts being nonzero.
    fn new(rate: f64, rate_scale: f64, depth: f64, depth_scale: f64) -> Option<Self> {
        (rate != 0.0 && depth != 0.0).then(|| Self {
            rate_hz: bounded(rate) * rate_scale,
            depth: bounded(depth) * depth_scale,
        })
    }

    fn at(&self, t: f64) -> f64 {
        (TAU * self.rate_hz * t).sin() * self.depth
    }
}

/// Loop-carried oscillator state.
#[derive(Debug, Clone)]
pub struct Voice {
    wave_type: WaveType,
    sample_rate: f64,
    phase: f64,
    freq: f64,
    freq_step: f64,
    duty: f64,
    duty_step: f64,
    arpeggio: Option<Arpeggio>,
    fm: Option<Modulator>,
    fm_phase: f64,
    lfo: Option<Modulator>,
    vibrato: Option<Modulator>,
    noise: Vec<f64>,
}

impl Voice {
    /// Builds the oscillator for a validated parameter set.
    ///
    /// `noise` holds the pre-generated samples used by the noise waveform;
    /// indices past its end fall back to fresh uniform draws.
    pub fn new(params: &ParameterSet, sample_rate: f64, noise: Vec<f64>) -> Self {
        let arpeggio = (params.arp_speed > 0.0).then(|| Arpeggio {
            step: bounded(params.arp_speed) * ARP_RATE_SCALE / sample_rate,
            modulation: bounded(params.arp_mod),
            timer: 0.0,
            multiplier: 1.0,
        });

        Self {
            wave_type: params.wave_type,
            sample_rate,
            phase: 0.0,
            freq: (params.base_freq * BASE_FREQ_SCALE_HZ).clamp(MIN_FREQ_HZ, MAX_FREQ_HZ),
            freq_step: bounded(params.freq_ramp) * FREQ_RAMP_SCALE_HZ,
            duty: (0.5 - params.duty * 0.5).clamp(MIN_DUTY, MAX_DUTY),
            duty_step: bounded(params.duty_ramp) * DUTY_RAMP_SCALE,
            arpeggio,
            fm: Modulator::new(params.fm_freq, FM_RATE_SCALE_HZ, params.fm_depth, FM_DEPTH_SCALE_HZ),
            fm_phase: 0.0,
            lfo: Modulator::new(params.lfo_rate, LFO_RATE_SCALE_HZ, params.lfo_depth, LFO_DEPTH_SCALE_HZ),
            vibrato: Modulator::new(
                params.vib_speed,
                VIBRATO_RATE_SCALE_HZ,
                params.vib_strength,
                VIBRATO_DEPTH_SCALE,
            ),
            noise,
        }
    }

    /// Current duty cycle.
    pub fn duty(&self) -> f64 {
        self.duty
    }

    /// Ramped frequency before any modulation.
    pub fn base_freq(&self) -> f64 {
        self.freq
    }

    /// Produces sample `index` at render time `t` seconds.
    ///
    /// `rng` feeds the arpeggiator and the noise fallback.
    pub fn next_sample<R: Rng + ?Sized>(&mut self, index: usize, t: f64, rng: &mut R) -> VoiceOutput {
        self.freq = (self.freq + self.freq_step).clamp(MIN_FREQ_HZ, MAX_FREQ_HZ);
        self.duty = (self.duty + self.duty_step).clamp(MIN_DUTY, MAX_DUTY);

        if let Some(arp) = self.arpeggio.as_mut() {
            arp.advance(rng);
        }

        let freq = self.derived_freq(t);
        let sample = self.waveform(index, rng).clamp(-1.0, 1.0);

        self.phase = (self.phase + TAU * freq / self.sample_rate).rem_euclid(TAU);
        if !self.phase.is_finite() {
            self.phase = 0.0;
        }

        VoiceOutput { sample, freq }
    }

    /// Ramped frequency with arpeggio, FM, LFO and vibrato applied.
    fn derived_freq(&mut self, t: f64) -> f64 {
        let mut freq = self.freq;
        if let Some(arp) = &self.arpeggio {
            freq *= arp.multiplier();
        }

        if let Some(fm) = self.fm {
            freq += self.fm_phase.sin() * fm.depth;
            self.fm_phase = (self.fm_phase + TAU * fm.rate_hz / self.sample_rate).rem_euclid(TAU);
        }
        if let Some(lfo) = self.lfo {
            freq += lfo.at(t);
        }
        // Vibrato is proportional to the frequency reached so far.
        if let Some(vibrato) = self.vibrato {
            freq += vibrato.at(t) * freq;
        }

        if freq.is_finite() {
            freq
        } else {
            self.freq
        }
    }

    fn waveform<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> f64 {
        match self.wave_type {
            WaveType::Square => {
                if self.phase / TAU < self.duty {
                    1.0
                } else {
                    -1.0
                }
            }
            WaveType::Sawtooth => self.phase / std::f64::consts::PI - 1.0,
            WaveType::Sine => self.phase.sin(),
            WaveType::Noise => match self.noise.get(index) {
                Some(&sample) => sample,
                None => signed_unit(rng),
            },
        }
    }
}

fn bounded(value: f64) -> f64 {
    value.clamp(-MAX_MODULATION, MAX_MODULATION)
}
