//! Mono PCM container format.

/// PCM sample width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcmWidth {
    /// Unsigned 8-bit, silence at 128.
    U8,
    /// Signed little-endian 16-bit.
    I16,
}

impl PcmWidth {
    /// Width for a buffer's bit-depth tag: 8-bit at 8 or below, else 16-bit.
    pub fn for_bit_depth(bit_depth: u8) -> Self {
        if bit_depth <= 8 {
            PcmWidth::U8
        } else {
            PcmWidth::I16
        }
    }

    /// Width from a header's bits-per-sample field.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            8 => Some(PcmWidth::U8),
            16 => Some(PcmWidth::I16),
            _ => None,
        }
    }

    /// Bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            PcmWidth::U8 => 8,
            PcmWidth::I16 => 16,
        }
    }

    /// Bytes per sample.
    pub fn bytes(self) -> u16 {
        self.bits() / 8
    }
}

/// Format parameters written to the `fmt ` chunk. Always one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample width.
    pub width: PcmWidth,
}

impl WavFormat {
    /// Channel count.
    pub const CHANNELS: u16 = 1;

    /// Creates a mono format.
    pub fn mono(sample_rate: u32, width: PcmWidth) -> Self {
        Self { sample_rate, width }
    }

    /// Bytes per sample frame.
    pub(crate) fn block_align(&self) -> u16 {
        Self::CHANNELS * self.width.bytes()
    }

    /// Bytes per second. Saturates for rates no engine produces.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }
}
