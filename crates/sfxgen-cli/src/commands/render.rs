//! Render command implementation
//!
//! Renders a parameter set to a mono WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxgen_core::{encode_wav, render_seeded, RenderedBuffer, WavResult};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{emit, RenderSummary};
use crate::input::{apply_overrides, resolve_options, OptionOverrides, ParamsSource};

/// Everything the render command needs.
#[derive(Debug, Clone)]
pub struct RenderArgs<'a> {
    /// Parameter source
    pub source: ParamsSource,
    /// Seed for noise and arpeggio draws
    pub seed: u32,
    /// `RenderOptions` JSON file
    pub config: Option<&'a Path>,
    /// Render option flags
    pub options: OptionOverrides,
    /// `--set` parameter overrides
    pub overrides: &'a [(String, f64)],
    /// Output WAV path
    pub output: &'a Path,
}

/// Builds the summary of an encoded render.
pub fn summarize(
    buffer: &RenderedBuffer,
    encoded: &WavResult,
    output: Option<&Path>,
    seed: Option<u32>,
) -> RenderSummary {
    RenderSummary {
        output: output.map(|p| p.display().to_string()),
        seed,
        sample_rate: encoded.sample_rate,
        bits_per_sample: encoded.bits_per_sample,
        num_samples: encoded.num_samples,
        duration_seconds: encoded.duration_seconds(),
        peak: buffer.peak(),
        rms: buffer.rms(),
        pcm_hash: Some(encoded.pcm_hash.clone()),
    }
}

/// Renders and writes the WAV file.
pub fn render_to_file(args: &RenderArgs<'_>) -> Result<RenderSummary> {
    let mut params = args.source.load()?;
    apply_overrides(&mut params, args.overrides)?;
    let options = resolve_options(&params, args.config, &args.options)?;

    let buffer = render_seeded(&params, &options, args.seed)
        .with_context(|| format!("Failed to render {}", args.source.describe()))?;
    let encoded = encode_wav(&buffer);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(args.output, &encoded.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", args.output.display()))?;

    Ok(summarize(&buffer, &encoded, Some(args.output), Some(args.seed)))
}

/// Prints the human-readable summary lines.
pub fn print_summary(summary: &RenderSummary) {
    println!(
        "  {} {} Hz, {}-bit, {} samples ({:.3} s)",
        "Format:".dimmed(),
        summary.sample_rate,
        summary.bits_per_sample,
        summary.num_samples,
        summary.duration_seconds
    );
    println!(
        "  {} peak {:.4}, rms {:.4}",
        "Level:".dimmed(),
        summary.peak,
        summary.rms
    );
    if let Some(hash) = &summary.pcm_hash {
        println!("  {} {}", "PCM hash:".dimmed(), hash);
    }
    if summary.peak == 0.0 {
        println!("{} Output is silent", "!".yellow().bold());
    }
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &RenderArgs<'_>, json: bool) -> Result<ExitCode> {
    if json {
        return emit(render_to_file(args));
    }

    println!(
        "{} {}",
        "Rendering:".cyan().bold(),
        args.source.describe()
    );
    let summary = render_to_file(args)?;
    print_summary(&summary);
    println!(
        "{} Wrote WAV to: {} (seed {})",
        "SUCCESS".green().bold(),
        args.output.display(),
        args.seed
    );
    Ok(ExitCode::SUCCESS)
}
