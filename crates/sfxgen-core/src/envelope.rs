//! Attack / punch-sustain / decay amplitude envelope.
//!
//! The envelope is a pure function of the sample index: the renderer asks
//! for `level(i)` instead of stepping a generator, which keeps chunked or
//! restarted renders consistent.

use crate::params::ParameterSet;

/// Retrigger period is `sample_rate / (repeat_speed * REPEAT_RATE_HZ)`.
const REPEAT_RATE_HZ: f64 = 20.0;

/// Fraction of each retrigger period spent fading back in.
const REPEAT_FADE_FRACTION: f64 = 0.1;

/// Envelope segment a sample falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    /// Linear ramp from 0 to 1.
    Attack,
    /// Level 1 plus a decaying punch overshoot.
    Sustain,
    /// Linear fall from 1 to 0.
    Decay,
    /// Silent.
    Done,
}

/// Three-segment envelope measured in samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    attack: usize,
    sustain: usize,
    decay: usize,
    punch: f64,
    retrigger_period: Option<f64>,
}

impl Envelope {
    /// Builds an envelope from segment durations in seconds.
    ///
    /// Negative or NaN durations collapse to empty segments.
    pub fn new(attack: f64, sustain: f64, decay: f64, punch: f64, sample_rate: f64) -> Self {
        Self {
            attack: seconds_to_samples(attack, sample_rate),
            sustain: seconds_to_samples(sustain, sample_rate),
            decay: seconds_to_samples(decay, sample_rate),
            punch: if punch.is_finite() { punch.max(0.0) } else { 0.0 },
            retrigger_period: None,
        }
    }

    /// Builds the envelope described by a parameter set.
    pub fn from_params(params: &ParameterSet, sample_rate: f64) -> Self {
        Self::new(
            params.attack,
            params.sustain,
            params.decay,
            params.sustain_punch,
            sample_rate,
        )
        .with_retrigger(params.repeat_speed, sample_rate)
    }

    /// Adds a periodic fade-in at `repeat_speed * 20` retriggers per second.
    /// Non-positive speeds disable it.
    pub fn with_retrigger(mut self, repeat_speed: f64, sample_rate: f64) -> Self {
        self.retrigger_period = if repeat_speed.is_finite() && repeat_speed > 0.0 {
            Some(sample_rate / (repeat_speed * REPEAT_RATE_HZ))
        } else {
            None
        };
        self
    }

    /// Total length of the audible part in samples.
    pub fn len(&self) -> usize {
        self.attack
            .saturating_add(self.sustain)
            .saturating_add(self.decay)
    }

    /// True when every segment is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Segment containing sample `i`.
    pub fn stage(&self, i: usize) -> EnvelopeStage {
        if i < self.attack {
            EnvelopeStage::Attack
        } else if i < self.attack.saturating_add(self.sustain) {
            EnvelopeStage::Sustain
        } else if i < self.len() {
            EnvelopeStage::Decay
        } else {
            EnvelopeStage::Done
        }
    }

    /// Envelope level at sample `i`, before the [0, 1] clamp.
    ///
    /// Sustain can exceed 1 when punch is set. Each branch only runs for a
    /// non-empty segment, so no division by zero can occur.
    pub fn level(&self, i: usize) -> f64 {
        let base = match self.stage(i) {
            EnvelopeStage::Attack => i as f64 / self.attack as f64,
            EnvelopeStage::Sustain => {
                let progress = (i - self.attack) as f64 / self.sustain as f64;
                1.0 + (1.0 - progress) * 2.0 * self.punch
            }
            EnvelopeStage::Decay => {
                let progress = (i - self.attack - self.sustain) as f64 / self.decay as f64;
                (1.0 - progress).max(0.0)
            }
            EnvelopeStage::Done => 0.0,
        };
        base * self.retrigger_gain(i)
    }

    /// Fade-in gain applied at the start of every retrigger period.
    fn retrigger_gain(&self, i: usize) -> f64 {
        let Some(period) = self.retrigger_period else {
            return 1.0;
        };
        let fade = period * REPEAT_FADE_FRACTION;
        if fade <= 0.0 {
            return 1.0;
        }
        let pos = (i as f64) % period;
        if pos < fade {
            pos / fade
        } else {
            1.0
        }
    }
}

/// Segments longer than any render are capped.
fn seconds_to_samples(seconds: f64, sample_rate: f64) -> usize {
    let samples = (seconds * sample_rate).floor();
    if samples > 0.0 {
        samples.min(f64::from(u32::MAX)) as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f64 = 1000.0;

    #[test]
    fn test_segment_lengths() {
        let env = Envelope::new(0.1, 0.2, 0.3, 0.0, SR);
        assert_eq!(env.len(), 600);
        assert_eq!(env.stage(0), EnvelopeStage::Attack);
        assert_eq!(env.stage(100), EnvelopeStage::Sustain);
        assert_eq!(env.stage(300), EnvelopeStage::Decay);
        assert_eq!(env.stage(600), EnvelopeStage::Done);
    }

    #[test]
    fn test_attack_ramp() {
        let env = Envelope::new(0.1, 0.1, 0.1, 0.0, SR);
        assert_eq!(env.level(0), 0.0);
        assert!((env.level(50) - 0.5).abs() < 1e-12);
        assert_eq!(env.level(100), 1.0);
    }

    #[test]
    fn test_zero_attack_starts_at_full_level() {
        let env = Envelope::new(0.0, 0.3, 0.4, 0.0, 44100.0);
        assert_eq!(env.level(0), 1.0);
    }

    #[test]
    fn test_all_segments_empty_is_silent() {
        let env = Envelope::new(0.0, 0.0, 0.0, 0.5, SR);
        assert!(env.is_empty());
        assert_eq!(env.level(0), 0.0);
        assert_eq!(env.level(10), 0.0);
    }

    #[test]
    fn test_punch_overshoot_decays_to_one() {
        let env = Envelope::new(0.0, 0.1, 0.1, 0.5, SR);
        assert!((env.level(0) - 2.0).abs() < 1e-12);
        assert!((env.level(50) - 1.5).abs() < 1e-12);
        assert_eq!(env.level(100), 1.0);
    }

    #[test]
    fn test_decay_reaches_zero() {
        let env = Envelope::new(0.0, 0.0, 0.1, 0.0, SR);
        assert_eq!(env.level(0), 1.0);
        assert!((env.level(50) - 0.5).abs() < 1e-12);
        assert_eq!(env.level(100), 0.0);
    }

    #[test]
    fn test_negative_durations_are_empty() {
        let env = Envelope::new(-0.5, 0.1, -1.0, -2.0, SR);
        assert_eq!(env.len(), 100);
        assert_eq!(env.level(0), 1.0);
    }

    #[test]
    fn test_retrigger_fades_in_each_period() {
        // repeat_speed 0.5 -> 10 retriggers/s -> 100 sample period, 10 sample fade
        let env = Envelope::new(0.0, 1.0, 0.0, 0.0, SR).with_retrigger(0.5, SR);
        assert_eq!(env.level(0), 0.0);
        assert!((env.level(5) - 0.5).abs() < 1e-12);
        assert_eq!(env.level(50), 1.0);
        assert_eq!(env.level(100), 0.0);
        assert!((env.level(105) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_retrigger_disabled_for_non_positive_speed() {
        let env = Envelope::new(0.0, 1.0, 0.0, 0.0, SR).with_retrigger(-1.0, SR);
        assert_eq!(env.level(0), 1.0);
    }
}
