//! Procedural preset generators.
//!
//! Each generator starts from [`ParameterSet::default`] and randomizes the
//! fields that characterize its sound family, returning a fresh value. The
//! first seven reproduce the classic sfxr generators; the rest lean on the
//! extended modulation and effects controls.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::{NoiseType, ParameterSet, WaveType};
use crate::error::{SynthError, SynthResult};
use crate::rng::signed_unit;

/// Named preset generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    PickupCoin,
    LaserShoot,
    Explosion,
    PowerUp,
    HitHurt,
    Jump,
    BlipSelect,
    Random,
    Tone,
    Click,
    Bell,
    SynthStab,
    Zap,
    BassDrop,
    Alarm,
    Robot,
    Wobble,
    Footstep,
    Teleport,
}

impl Preset {
    /// Every generator, in menu order.
    pub const ALL: [Preset; 19] = [
        Preset::PickupCoin,
        Preset::LaserShoot,
        Preset::Explosion,
        Preset::PowerUp,
        Preset::HitHurt,
        Preset::Jump,
        Preset::BlipSelect,
        Preset::Random,
        Preset::Tone,
        Preset::Click,
        Preset::Bell,
        Preset::SynthStab,
        Preset::Zap,
        Preset::BassDrop,
        Preset::Alarm,
        Preset::Robot,
        Preset::Wobble,
        Preset::Footstep,
        Preset::Teleport,
    ];

    /// Snake-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::PickupCoin => "pickup_coin",
            Preset::LaserShoot => "laser_shoot",
            Preset::Explosion => "explosion",
            Preset::PowerUp => "power_up",
            Preset::HitHurt => "hit_hurt",
            Preset::Jump => "jump",
            Preset::BlipSelect => "blip_select",
            Preset::Random => "random",
            Preset::Tone => "tone",
            Preset::Click => "click",
            Preset::Bell => "bell",
            Preset::SynthStab => "synth_stab",
            Preset::Zap => "zap",
            Preset::BassDrop => "bass_drop",
            Preset::Alarm => "alarm",
            Preset::Robot => "robot",
            Preset::Wobble => "wobble",
            Preset::Footstep => "footstep",
            Preset::Teleport => "teleport",
        }
    }

    /// Runs the generator.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ParameterSet {
        match self {
            Preset::PickupCoin => pickup_coin(rng),
            Preset::LaserShoot => laser_shoot(rng),
            Preset::Explosion => explosion(rng),
            Preset::PowerUp => power_up(rng),
            Preset::HitHurt => hit_hurt(rng),
            Preset::Jump => jump(rng),
            Preset::BlipSelect => blip_select(rng),
            Preset::Random => random(rng),
            Preset::Tone => tone(rng),
            Preset::Click => click(rng),
            Preset::Bell => bell(rng),
            Preset::SynthStab => synth_stab(rng),
            Preset::Zap => zap(rng),
            Preset::BassDrop => bass_drop(rng),
            Preset::Alarm => alarm(rng),
            Preset::Robot => robot(rng),
            Preset::Wobble => wobble(rng),
            Preset::Footstep => footstep(rng),
            Preset::Teleport => teleport(rng),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SynthError;

    /// Accepts snake_case (`pickup_coin`) and the legacy camelCase
    /// spelling (`pickupCoin`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name().replace('_', "") == wanted)
            .ok_or_else(|| SynthError::unknown_preset(s))
    }
}

/// Generates a preset by name.
pub fn preset<R: Rng + ?Sized>(name: &str, rng: &mut R) -> SynthResult<ParameterSet> {
    Ok(name.parse::<Preset>()?.generate(rng))
}

fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    unit(rng) > 0.5
}

/// One of square, sawtooth or sine.
fn tonal_wave<R: Rng + ?Sized>(rng: &mut R) -> WaveType {
    WaveType::from_index((unit(rng) * 3.0) as usize)
}

/// Bright sawtooth blip, sometimes with a quick arpeggio jump.
pub fn pickup_coin<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let base_freq = 0.4 + unit(rng) * 0.5;
    let sustain = unit(rng) * 0.1;
    let decay = 0.1 + unit(rng) * 0.4;
    let sustain_punch = 0.3 + unit(rng) * 0.3;
    let (arp_speed, arp_mod) = if coin(rng) {
        (0.5 + unit(rng) * 0.2, 0.2 + unit(rng) * 0.4)
    } else {
        (0.0, 0.0)
    };

    ParameterSet {
        wave_type: WaveType::Sawtooth,
        base_freq,
        attack: 0.0,
        sustain,
        decay,
        sustain_punch,
        arp_speed,
        arp_mod,
        ..ParameterSet::default()
    }
}

/// Fast downward sweep.
pub fn laser_shoot<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: tonal_wave(rng),
        base_freq: 0.3 + unit(rng) * 0.6,
        freq_ramp: -0.35 - unit(rng) * 0.3,
        attack: 0.0,
        sustain: 0.1 + unit(rng) * 0.2,
        decay: unit(rng) * 0.4,
        hpf_freq: unit(rng) * 0.3,
        ..ParameterSet::default()
    }
}

/// Punchy low noise burst.
///
/// `base_freq` is `(0.1 + 0.4u)^2`, so it lands in [0.01, 0.25).
pub fn explosion<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let base_freq = (0.1 + unit(rng) * 0.4).powi(2);
    let freq_ramp = -0.1 + unit(rng) * 0.4;
    let sustain = 0.1 + unit(rng) * 0.3;
    let decay = unit(rng) * 0.5;
    let sustain_punch = 0.2 + unit(rng) * 0.6;
    let (pha_offset, pha_ramp) = if coin(rng) {
        (-0.3 + unit(rng) * 0.9, -unit(rng) * 0.3)
    } else {
        (0.0, 0.0)
    };

    ParameterSet {
        wave_type: WaveType::Noise,
        base_freq,
        freq_ramp,
        attack: 0.0,
        sustain,
        decay,
        sustain_punch,
        pha_offset,
        pha_ramp,
        ..ParameterSet::default()
    }
}

/// Rising sweep on a square or sawtooth.
pub fn power_up<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let wave_type = if coin(rng) {
        WaveType::Sawtooth
    } else {
        WaveType::Square
    };
    ParameterSet {
        wave_type,
        base_freq: 0.2 + unit(rng) * 0.3,
        freq_ramp: 0.1 + unit(rng) * 0.4,
        attack: 0.0,
        sustain: unit(rng) * 0.4,
        decay: 0.1 + unit(rng) * 0.4,
        ..ParameterSet::default()
    }
}

/// Short falling hit; sine is swapped for noise.
pub fn hit_hurt<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let wave_type = match tonal_wave(rng) {
        WaveType::Sine => WaveType::Noise,
        other => other,
    };
    let base_freq = 0.2 + unit(rng) * 0.6;
    let freq_ramp = -0.3 - unit(rng) * 0.4;
    let sustain = unit(rng) * 0.1;
    let decay = 0.1 + unit(rng) * 0.2;
    let hpf_freq = if coin(rng) { unit(rng) * 0.3 } else { 0.0 };

    ParameterSet {
        wave_type,
        base_freq,
        freq_ramp,
        attack: 0.0,
        sustain,
        decay,
        hpf_freq,
        ..ParameterSet::default()
    }
}

/// Upward square chirp.
pub fn jump<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let duty = unit(rng) * 0.6;
    let base_freq = 0.3 + unit(rng) * 0.3;
    let freq_ramp = 0.1 + unit(rng) * 0.2;
    let sustain = 0.1 + unit(rng) * 0.3;
    let decay = 0.1 + unit(rng) * 0.2;
    let hpf_freq = if coin(rng) { unit(rng) * 0.3 } else { 0.0 };
    let lpf_freq = if coin(rng) { 1.0 - unit(rng) * 0.6 } else { 1.0 };

    ParameterSet {
        wave_type: WaveType::Square,
        duty,
        base_freq,
        freq_ramp,
        attack: 0.0,
        sustain,
        decay,
        hpf_freq,
        lpf_freq,
        ..ParameterSet::default()
    }
}

/// Tiny menu-select blip.
pub fn blip_select<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let wave_type = if coin(rng) {
        WaveType::Square
    } else {
        WaveType::Sawtooth
    };
    let duty = if wave_type == WaveType::Square {
        unit(rng) * 0.6
    } else {
        0.0
    };
    ParameterSet {
        wave_type,
        duty,
        base_freq: 0.2 + unit(rng) * 0.4,
        attack: 0.0,
        sustain: 0.1 + unit(rng) * 0.1,
        decay: unit(rng) * 0.2,
        hpf_freq: 0.1,
        ..ParameterSet::default()
    }
}

/// Anything goes.
///
/// Odd powers of `2u - 1` keep the sign while pulling most draws toward
/// zero, so extreme settings stay rare. Several fields can come out
/// negative; the renderer treats those as disabled.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::from_index((unit(rng) * 4.0) as usize),
        base_freq: unit(rng).powi(2),
        freq_ramp: signed_unit(rng).powi(5),
        attack: signed_unit(rng).powi(3),
        sustain: signed_unit(rng).powi(2),
        decay: signed_unit(rng),
        sustain_punch: (unit(rng) * 0.8).powi(2),
        duty: signed_unit(rng),
        duty_ramp: signed_unit(rng).powi(3),
        vib_strength: signed_unit(rng).powi(3),
        vib_speed: signed_unit(rng),
        arp_mod: signed_unit(rng),
        arp_speed: signed_unit(rng),
        lpf_freq: 1.0 - unit(rng).powi(3),
        lpf_ramp: signed_unit(rng).powi(3),
        hpf_freq: unit(rng).powi(5),
        hpf_ramp: signed_unit(rng).powi(5),
        ..ParameterSet::default()
    }
}

/// Steady sine tone between 220 and 440 Hz.
pub fn tone<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Sine,
        base_freq: 0.5 + unit(rng) * 0.5,
        attack: 0.0,
        sustain: 0.6 + unit(rng) * 0.2,
        decay: 0.1,
        ..ParameterSet::default()
    }
}

/// Very short high-passed white noise tick.
pub fn click<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Noise,
        noise_type: NoiseType::White,
        base_freq: 0.6 + unit(rng) * 0.4,
        attack: 0.0,
        sustain: 0.005 + unit(rng) * 0.01,
        decay: 0.02 + unit(rng) * 0.05,
        hpf_freq: 0.1 + unit(rng) * 0.2,
        ..ParameterSet::default()
    }
}

/// FM sine with a long ring-out.
pub fn bell<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Sine,
        base_freq: 0.6 + unit(rng) * 0.8,
        attack: 0.0,
        sustain: 0.05,
        decay: 0.6 + unit(rng) * 0.6,
        sustain_punch: unit(rng) * 0.2,
        fm_freq: 0.5 + unit(rng),
        fm_depth: 0.1 + unit(rng) * 0.3,
        ..ParameterSet::default()
    }
}

/// Filtered, chorused sawtooth hit.
pub fn synth_stab<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Sawtooth,
        base_freq: 0.2 + unit(rng) * 0.4,
        attack: 0.0,
        sustain: 0.1 + unit(rng) * 0.1,
        decay: 0.2 + unit(rng) * 0.2,
        lpf_freq: 0.3 + unit(rng) * 0.4,
        chorus_rate: 0.3 + unit(rng) * 0.5,
        chorus_depth: 0.3 + unit(rng) * 0.5,
        distortion: unit(rng) * 0.2,
        ..ParameterSet::default()
    }
}

/// High falling FM zap with some crush.
pub fn zap<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let wave_type = if coin(rng) {
        WaveType::Square
    } else {
        WaveType::Sawtooth
    };
    ParameterSet {
        wave_type,
        base_freq: 0.8 + unit(rng) * 0.6,
        freq_ramp: -0.6 - unit(rng) * 0.4,
        attack: 0.0,
        sustain: 0.05 + unit(rng) * 0.1,
        decay: 0.1 + unit(rng) * 0.2,
        fm_freq: 2.0 + unit(rng) * 4.0,
        fm_depth: 0.5 + unit(rng) * 0.5,
        bit_crush: unit(rng) * 0.3,
        ..ParameterSet::default()
    }
}

/// Falling sine with heavy sub-bass and drive.
pub fn bass_drop<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Sine,
        base_freq: 0.3 + unit(rng) * 0.3,
        freq_ramp: -0.2 - unit(rng) * 0.2,
        attack: 0.0,
        sustain: 0.2 + unit(rng) * 0.3,
        decay: 0.5 + unit(rng) * 0.5,
        sub_bass: 0.5 + unit(rng) * 0.5,
        distortion: 0.1 + unit(rng) * 0.3,
        ..ParameterSet::default()
    }
}

/// Retriggered, arpeggiated square siren.
pub fn alarm<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Square,
        base_freq: 0.8 + unit(rng) * 0.4,
        attack: 0.0,
        sustain: 0.6 + unit(rng) * 0.4,
        decay: 0.1,
        repeat_speed: 0.1 + unit(rng) * 0.3,
        arp_speed: 0.2 + unit(rng) * 0.3,
        arp_mod: 0.3 + unit(rng) * 0.3,
        ..ParameterSet::default()
    }
}

/// Ring-modulated, bit-crushed sawtooth voice.
pub fn robot<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Sawtooth,
        base_freq: 0.3 + unit(rng) * 0.3,
        attack: 0.0,
        sustain: 0.3 + unit(rng) * 0.3,
        decay: 0.2 + unit(rng) * 0.2,
        ring_mod_freq: 0.2 + unit(rng) * 0.6,
        ring_mod_depth: 0.5 + unit(rng) * 0.5,
        bit_crush: 0.3 + unit(rng) * 0.4,
        ..ParameterSet::default()
    }
}

/// Low LFO-swept bass with sub and low-pass.
pub fn wobble<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let wave_type = if coin(rng) {
        WaveType::Sawtooth
    } else {
        WaveType::Square
    };
    ParameterSet {
        wave_type,
        base_freq: 0.15 + unit(rng) * 0.2,
        attack: 0.0,
        sustain: 0.5 + unit(rng) * 0.5,
        decay: 0.2 + unit(rng) * 0.3,
        lfo_rate: 0.5 + unit(rng) * 1.5,
        lfo_depth: 0.5 + unit(rng),
        sub_bass: 0.3 + unit(rng) * 0.4,
        lpf_freq: 0.4 + unit(rng) * 0.4,
        ..ParameterSet::default()
    }
}

/// Dull low-passed brown noise thud.
pub fn footstep<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    ParameterSet {
        wave_type: WaveType::Noise,
        noise_type: NoiseType::Brown,
        base_freq: 0.1 + unit(rng) * 0.1,
        attack: 0.0,
        sustain: 0.02 + unit(rng) * 0.03,
        decay: 0.05 + unit(rng) * 0.1,
        sustain_punch: unit(rng) * 0.3,
        lpf_freq: 0.2 + unit(rng) * 0.3,
        ..ParameterSet::default()
    }
}

/// Rising vibrato sweep through flanger and echo.
pub fn teleport<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let wave_type = if coin(rng) {
        WaveType::Sine
    } else {
        WaveType::Square
    };
    ParameterSet {
        wave_type,
        base_freq: 0.3 + unit(rng) * 0.3,
        freq_ramp: 0.3 + unit(rng) * 0.4,
        attack: 0.0,
        sustain: 0.2 + unit(rng) * 0.3,
        decay: 0.3 + unit(rng) * 0.4,
        vib_strength: 0.3 + unit(rng) * 0.4,
        vib_speed: 0.3 + unit(rng) * 0.5,
        flanger_rate: 0.5 + unit(rng) * 1.5,
        flanger_depth: 0.5 + unit(rng) * 0.5,
        flanger_delay: 0.2 + unit(rng) * 0.6,
        delay_time: 0.3 + unit(rng) * 0.5,
        delay_feedback: 0.3 + unit(rng) * 0.4,
        ..ParameterSet::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_all_presets_have_unique_names() {
        let mut names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Preset::ALL.len());
    }

    #[test]
    fn test_preset_name_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_legacy_camel_case_names() {
        assert_eq!("pickupCoin".parse::<Preset>().unwrap(), Preset::PickupCoin);
        assert_eq!("laserShoot".parse::<Preset>().unwrap(), Preset::LaserShoot);
        assert_eq!("hitHurt".parse::<Preset>().unwrap(), Preset::HitHurt);
        assert_eq!("powerUp".parse::<Preset>().unwrap(), Preset::PowerUp);
    }

    #[test]
    fn test_unknown_preset() {
        let mut rng = create_rng(1);
        let err = preset("kaboom", &mut rng).unwrap_err();
        assert!(matches!(err, SynthError::UnknownPreset { .. }));
    }

    #[test]
    fn test_explosion_ranges() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let p = explosion(&mut rng);
            assert_eq!(p.wave_type, WaveType::Noise);
            assert!(p.base_freq >= 0.01 && p.base_freq < 0.25);
            assert!(p.decay >= 0.0 && p.decay < 0.5);
            assert!(p.sustain_punch >= 0.2 && p.sustain_punch < 0.8);
        }
    }

    #[test]
    fn test_hit_hurt_never_sine() {
        let mut rng = create_rng(3);
        for _ in 0..200 {
            assert_ne!(hit_hurt(&mut rng).wave_type, WaveType::Sine);
        }
    }

    #[test]
    fn test_pickup_coin_arpeggio_is_all_or_nothing() {
        let mut rng = create_rng(9);
        for _ in 0..200 {
            let p = pickup_coin(&mut rng);
            assert_eq!(p.wave_type, WaveType::Sawtooth);
            assert_eq!(p.arp_speed == 0.0, p.arp_mod == 0.0);
        }
    }

    #[test]
    fn test_random_curve_bounds() {
        let mut rng = create_rng(11);
        for _ in 0..500 {
            let p = random(&mut rng);
            assert!((0.0..=1.0).contains(&p.base_freq));
            assert!((-1.0..=1.0).contains(&p.freq_ramp));
            assert!(p.sustain >= 0.0);
            assert!(p.sustain_punch >= 0.0 && p.sustain_punch < 0.64);
            assert!(p.lpf_freq > 0.0 && p.lpf_freq <= 1.0);
            assert!((0.0..=1.0).contains(&p.hpf_freq));
        }
    }

    #[test]
    fn test_random_matches_closed_form_curves() {
        for seed in [1, 29, 4096] {
            let p = random(&mut create_rng(seed));

            // Replay the same stream: one uniform draw per field, in order.
            let mut replay = create_rng(seed);
            let u: Vec<f64> = (0..17).map(|_| replay.gen::<f64>()).collect();
            let s = |i: usize| u[i] * 2.0 - 1.0;

            assert_eq!(p.wave_type, WaveType::from_index((u[0] * 4.0) as usize));
            assert_eq!(p.base_freq, u[1].powi(2));
            assert_eq!(p.freq_ramp, s(2).powi(5));
            assert_eq!(p.attack, s(3).powi(3));
            assert_eq!(p.sustain, s(4).powi(2));
            assert_eq!(p.decay, s(5));
            assert_eq!(p.sustain_punch, (u[6] * 0.8).powi(2));
            assert_eq!(p.duty, s(7));
            assert_eq!(p.duty_ramp, s(8).powi(3));
            assert_eq!(p.vib_strength, s(9).powi(3));
            assert_eq!(p.vib_speed, s(10));
            assert_eq!(p.arp_mod, s(11));
            assert_eq!(p.arp_speed, s(12));
            assert_eq!(p.lpf_freq, 1.0 - u[13].powi(3));
            assert_eq!(p.lpf_ramp, s(14).powi(3));
            assert_eq!(p.hpf_freq, u[15].powi(5));
            assert_eq!(p.hpf_ramp, s(16).powi(5));

            // Nothing else is drawn.
            let mut after = create_rng(seed);
            random(&mut after);
            assert_eq!(after.gen::<u64>(), replay.gen::<u64>());
        }
    }

    #[test]
    fn test_presets_are_seed_deterministic() {
        for preset in Preset::ALL {
            let a = preset.generate(&mut create_rng(5));
            let b = preset.generate(&mut create_rng(5));
            assert_eq!(a, b, "{} not deterministic", preset);
        }
    }
}
