//! Enumerated table of every numeric field of a [`ParameterSet`].
//!
//! Validation, morphing, mutation and by-name access all walk this table, so
//! adding a field to the struct means adding one line here.

use super::ParameterSet;

/// Storage type behind a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A free `f64` control.
    Float,
    /// An integer output setting; writes are rounded and saturated.
    Integer,
}

/// Accessor pair for one numeric field.
#[derive(Clone, Copy)]
pub struct NumericField {
    /// Field name as it appears in preset documents.
    pub name: &'static str,
    /// Storage type.
    pub kind: FieldKind,
    get: fn(&ParameterSet) -> f64,
    set: fn(&mut ParameterSet, f64),
}

impl NumericField {
    /// Reads the field as `f64`.
    pub fn get(&self, params: &ParameterSet) -> f64 {
        (self.get)(params)
    }

    /// Writes the field.
    pub fn set(&self, params: &mut ParameterSet, value: f64) {
        (self.set)(params, value)
    }

    /// Looks up a field by name.
    pub fn find(name: &str) -> Option<&'static NumericField> {
        NUMERIC_FIELDS.iter().find(|f| f.name == name)
    }

    /// Whether `ParameterSet::mutated` may touch this field.
    pub(crate) fn is_mutable(&self) -> bool {
        self.kind == FieldKind::Float && self.name != "sound_vol"
    }
}

impl std::fmt::Debug for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericField")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

macro_rules! numeric_fields {
    (
        floats: [$($float:ident),* $(,)?],
        integers: [$($int:ident: $ty:ty),* $(,)?] $(,)?
    ) => {
        /// Every numeric field, in declaration order.
        pub const NUMERIC_FIELDS: &[NumericField] = &[
            $(
                NumericField {
                    name: stringify!($float),
                    kind: FieldKind::Float,
                    get: |p| p.$float,
                    set: |p, v| p.$float = v,
                },
            )*
            $(
                NumericField {
                    name: stringify!($int),
                    kind: FieldKind::Integer,
                    get: |p| p.$int as f64,
                    // `as` saturates and maps NaN to 0
                    set: |p, v| p.$int = v.round() as $ty,
                },
            )*
        ];
    };
}

numeric_fields! {
    floats: [
        base_freq,
        freq_ramp,
        freq_dramp,
        freq_limit,
        duty,
        duty_ramp,
        attack,
        sustain,
        decay,
        sustain_punch,
        repeat_speed,
        vib_strength,
        vib_speed,
        arp_mod,
        arp_speed,
        fm_freq,
        fm_depth,
        lfo_rate,
        lfo_depth,
        ring_mod_freq,
        ring_mod_depth,
        pha_offset,
        pha_ramp,
        lpf_freq,
        lpf_ramp,
        lpf_resonance,
        hpf_freq,
        hpf_ramp,
        distortion,
        bit_crush,
        sub_bass,
        chorus_rate,
        chorus_depth,
        delay_time,
        delay_feedback,
        flanger_rate,
        flanger_depth,
        flanger_delay,
        reverb_size,
        reverb_decay,
        sound_vol,
    ],
    integers: [
        sample_rate: u32,
        sample_size: u8,
    ],
}
