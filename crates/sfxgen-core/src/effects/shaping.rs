//! Memoryless waveshaping: tanh distortion and bit-crush quantization.

/// Soft-clips with `tanh(x * drive) / drive`, `drive = 1 + amount * 10`.
///
/// The division keeps small signals at unity gain, so the effect is mostly
/// heard on peaks. Non-positive amounts pass the sample through.
pub fn distort(sample: f64, amount: f64) -> f64 {
    if amount <= 0.0 {
        return sample;
    }
    let drive = 1.0 + amount * 10.0;
    (sample * drive).tanh() / drive
}

/// Bit depth used for a crush amount in [0, 1]: 16 bits at 0 down to 1 bit
/// at 1.
pub fn crush_bits(amount: f64) -> u32 {
    (16.0 - amount.clamp(0.0, 1.0) * 15.0).floor() as u32
}

/// Quantizes downward to multiples of `2^-bits`.
///
/// Non-positive amounts pass the sample through.
pub fn bit_crush(sample: f64, amount: f64) -> f64 {
    if amount <= 0.0 {
        return sample;
    }
    let scale = f64::from(1u32 << crush_bits(amount));
    (sample * scale).floor() / scale
}
