//! Delay-line effects: chorus, feedback echo and flanger.
//!
//! Each stage owns its ring buffer and processes one sample at a time with
//! the render time `t` (seconds) driving its LFO.

use std::f64::consts::TAU;

use super::delay_line::DelayLine;

/// Chorus buffer length in seconds.
const CHORUS_MAX_SECONDS: f64 = 0.02;
/// Centre of the chorus tap.
const CHORUS_BASE_SECONDS: f64 = 0.01;
/// Chorus tap swing either side of the centre.
const CHORUS_SWING_SECONDS: f64 = 0.005;

/// Echo buffer length in seconds.
const ECHO_MAX_SECONDS: f64 = 0.5;

/// Flanger buffer length in seconds.
const FLANGER_MAX_SECONDS: f64 = 0.02;
const FLANGER_MIN_SECONDS: f64 = 0.001;
const FLANGER_BASE_RANGE_SECONDS: f64 = 0.009;
const FLANGER_SWEEP_SECONDS: f64 = 0.005;
const FLANGER_MIX: f64 = 0.3;

/// Short modulated delay mixed back at `depth * 0.3`.
#[derive(Debug, Clone)]
pub struct Chorus {
    line: DelayLine,
    rate_hz: f64,
    mix: f64,
    base: f64,
    swing: f64,
}

impl Chorus {
    /// `rate` is scaled to `rate * 5` Hz; `depth` in [0, 1].
    pub fn new(rate: f64, depth: f64, sample_rate: f64) -> Self {
        Self {
            line: DelayLine::with_seconds(CHORUS_MAX_SECONDS, sample_rate),
            rate_hz: rate.max(0.0) * 5.0,
            mix: depth.clamp(0.0, 1.0) * 0.3,
            base: CHORUS_BASE_SECONDS * sample_rate,
            swing: CHORUS_SWING_SECONDS * sample_rate,
        }
    }

    /// Processes one sample.
    pub fn process(&mut self, sample: f64, t: f64) -> f64 {
        let offset = self.base + (TAU * self.rate_hz * t).sin() * self.swing;
        let delayed = self.line.tap(offset);
        self.line.push(sample);
        sample + delayed * self.mix
    }
}

/// Feedback echo: the tap is added at `feedback * 0.5` and the sum is what
/// gets written back, so repeats decay geometrically.
#[derive(Debug, Clone)]
pub struct Echo {
    line: DelayLine,
    delay: usize,
    gain: f64,
}

impl Echo {
    /// `time` in [0, 1] maps to `time * 0.3` seconds; `feedback` in [0, 1].
    pub fn new(time: f64, feedback: f64, sample_rate: f64) -> Self {
        let line = DelayLine::with_seconds(ECHO_MAX_SECONDS, sample_rate);
        let delay = (time.clamp(0.0, 1.0) * sample_rate * 0.3).round() as usize;
        Self {
            delay: delay.clamp(1, line.capacity() - 1),
            line,
            gain: feedback.clamp(0.0, 1.0) * 0.5,
        }
    }

    /// Tap length in samples.
    pub fn delay_samples(&self) -> usize {
        self.delay
    }

    /// Processes one sample.
    pub fn process(&mut self, sample: f64) -> f64 {
        let out = sample + self.line.read(self.delay) * self.gain;
        self.line.push(out);
        out
    }
}

/// Short swept delay at a fixed 0.3 mix.
#[derive(Debug, Clone)]
pub struct Flanger {
    line: DelayLine,
    rate_hz: f64,
    base: f64,
    sweep: f64,
}

impl Flanger {
    /// `rate` is in Hz, `depth` and `delay` in [0, 1]. `delay` places the
    /// resting tap between 1 and 10 ms; `depth` sweeps up to 5 ms above it.
    pub fn new(rate: f64, depth: f64, delay: f64, sample_rate: f64) -> Self {
        let base_seconds = FLANGER_MIN_SECONDS + delay.clamp(0.0, 1.0) * FLANGER_BASE_RANGE_SECONDS;
        Self {
            line: DelayLine::with_seconds(FLANGER_MAX_SECONDS, sample_rate),
            rate_hz: rate.max(0.0),
            base: base_seconds * sample_rate,
            sweep: depth.clamp(0.0, 1.0) * FLANGER_SWEEP_SECONDS * sample_rate,
        }
    }

    /// Processes one sample.
    pub fn process(&mut self, sample: f64, t: f64) -> f64 {
        let lfo = 0.5 + 0.5 * (TAU * self.rate_hz * t).sin();
        let delayed = self.line.tap(self.base + lfo * self.sweep);
        self.line.push(sample);
        sample + delayed * FLANGER_MIX
    }
}
