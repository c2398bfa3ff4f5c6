//! Error types for the synthesis engine.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while preparing or rendering a sound.
///
/// Out-of-range parameter values are never errors: they are clamped at
/// render time. Only malformed render requests end up here.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Duration is non-finite or not positive.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Engine sample rate outside the supported range.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// No preset generator with this name.
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// Requested preset name.
        name: String,
    },

    /// No numeric parameter with this name.
    #[error("unknown parameter '{name}'")]
    UnknownParameter {
        /// Requested parameter name.
        name: String,
    },
}

impl SynthError {
    /// Creates an unknown preset error.
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }

    /// Creates an unknown parameter error.
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidDuration { .. } => "SYNTH_001",
            SynthError::InvalidSampleRate { .. } => "SYNTH_002",
            SynthError::UnknownPreset { .. } => "SYNTH_003",
            SynthError::UnknownParameter { .. } => "SYNTH_004",
        }
    }
}

/// Errors raised while decoding a shared preset code.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload is not valid URL-safe base64.
    #[error("preset code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8 text.
    #[error("preset code is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Decoded text is not a parameter set document.
    #[error("preset code does not hold a parameter set: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::Base64(_) => "CODEC_001",
            CodecError::Utf8(_) => "CODEC_002",
            CodecError::Json(_) => "CODEC_003",
        }
    }
}
