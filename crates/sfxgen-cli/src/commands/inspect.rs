//! Inspect command implementation
//!
//! Summarizes a mono PCM WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxgen_core::wav::compute_pcm_hash;
use sfxgen_core::{decode_wav, RenderedBuffer};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;

use super::json_output::{emit, RenderSummary};

/// The file is not a mono 8/16-bit PCM WAV.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a mono 8-bit or 16-bit PCM WAV file: {path}")]
pub struct InvalidWavError {
    /// Offending file
    pub path: String,
}

/// Reads and summarizes a WAV file.
pub fn inspect_file(path: &Path) -> Result<RenderSummary> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read WAV file: {}", path.display()))?;
    let buffer = decode_wav(&bytes).ok_or_else(|| InvalidWavError {
        path: path.display().to_string(),
    })?;
    Ok(summarize(&buffer, compute_pcm_hash(&bytes), path))
}

fn summarize(buffer: &RenderedBuffer, pcm_hash: Option<String>, path: &Path) -> RenderSummary {
    RenderSummary {
        output: Some(path.display().to_string()),
        seed: None,
        sample_rate: buffer.sample_rate,
        bits_per_sample: u16::from(buffer.bit_depth),
        num_samples: buffer.len(),
        duration_seconds: buffer.duration_seconds(),
        peak: buffer.peak(),
        rms: buffer.rms(),
        pcm_hash,
    }
}

/// Run the inspect command
pub fn run(path: &str, json: bool) -> Result<ExitCode> {
    let path = Path::new(path);
    if json {
        return emit(inspect_file(path));
    }

    println!("{} {}", "Inspecting:".cyan().bold(), path.display());
    let summary = inspect_file(path)?;
    super::render::print_summary(&summary);
    Ok(ExitCode::SUCCESS)
}
