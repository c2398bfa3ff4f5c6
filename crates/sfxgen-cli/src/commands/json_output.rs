//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints exactly one of these documents
//! to stdout, without colors, whether it succeeds or fails.

use serde::Serialize;
use sfxgen_core::{CodecError, SynthError};
use std::process::ExitCode;

use super::inspect::InvalidWavError;

/// Error codes for CLI-level failures. Library errors keep their own codes
/// (`SYNTH_xxx`, `CODEC_xxx`).
pub mod error_codes {
    /// File could not be read or written
    pub const FILE_IO: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Input is not a decodable WAV file
    pub const INVALID_WAV: &str = "CLI_003";
    /// Anything else
    pub const GENERAL: &str = "CLI_999";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code
    pub code: String,
    /// Human-readable error message (with context chain)
    pub message: String,
}

impl JsonError {
    /// Builds a JSON error from an anyhow error, picking the most specific
    /// code found in its chain.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self {
            code: error_code(err).to_string(),
            message: format!("{:#}", err),
        }
    }
}

/// Finds the stable code for an error.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<SynthError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<CodecError>() {
            return e.code();
        }
        if cause.downcast_ref::<InvalidWavError>().is_some() {
            return error_codes::INVALID_WAV;
        }
        if cause.downcast_ref::<serde_json::Error>().is_some() {
            return error_codes::JSON_PARSE;
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return error_codes::FILE_IO;
        }
    }
    error_codes::GENERAL
}

/// Envelope for every JSON document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    /// Whether the command succeeded
    pub success: bool,
    /// Result payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Errors on failure
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl<T: Serialize> JsonOutput<T> {
    /// Successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// Failed output.
    pub fn failure(err: &anyhow::Error) -> Self {
        Self {
            success: false,
            result: None,
            errors: vec![JsonError::from_anyhow(err)],
        }
    }
}

/// Summary of a rendered clip.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderSummary {
    /// Output file path (when written)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Seed used for noise and arpeggio draws
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Number of samples
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Peak absolute sample
    pub peak: f64,
    /// RMS level
    pub rms: f64,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

/// A parameter set together with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ParamsOutput {
    /// Preset name, if generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Seed, if generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Output file path, if written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// The parameters
    pub params: sfxgen_core::ParameterSet,
}

/// Preset generator names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PresetList {
    /// Names in menu order
    pub presets: Vec<&'static str>,
}

/// A share code.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CodeOutput {
    /// URL-safe share code
    pub code: String,
}

/// Prints a serializable document as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}

/// Prints the outcome of a `--json` command and picks its exit code.
pub fn emit<T: Serialize>(result: anyhow::Result<T>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(value) => {
            print_json(&JsonOutput::success(value))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            print_json(&JsonOutput::<T>::failure(&err))?;
            Ok(ExitCode::from(1))
        }
    }
}
