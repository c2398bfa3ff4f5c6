//! Morph command implementation
//!
//! Interpolates between two preset files.

use anyhow::{bail, Result};
use colored::Colorize;
use sfxgen_core::ParameterSet;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{emit, ParamsOutput};
use crate::input::{load_params_file, write_params_file};

/// Morphs `from` toward `to` by `amount`.
///
/// Amounts outside [0, 1] extrapolate; the renderer clamps the result.
pub fn morph_files(from: &Path, to: &Path, amount: f64) -> Result<ParameterSet> {
    if !amount.is_finite() {
        bail!("morph amount must be finite, got {}", amount);
    }
    let source = load_params_file(from)?;
    let target = load_params_file(to)?;
    Ok(source.morph_to(&target, amount))
}

fn morph_output(from: &str, to: &str, amount: f64, output: Option<&str>) -> Result<ParamsOutput> {
    let params = morph_files(Path::new(from), Path::new(to), amount)?;
    if let Some(path) = output {
        write_params_file(Path::new(path), &params)?;
    }
    Ok(ParamsOutput {
        preset: None,
        seed: None,
        output: output.map(str::to_string),
        params,
    })
}

/// Run the morph command
///
/// # Arguments
/// * `from` - Start preset file
/// * `to` - Target preset file
/// * `amount` - Interpolation amount, 0 = `from`, 1 = `to`
/// * `output` - Output preset file (default: print to stdout)
/// * `json` - Print a JSON document instead of status lines
pub fn run(from: &str, to: &str, amount: f64, output: Option<&str>, json: bool) -> Result<ExitCode> {
    if json {
        return emit(morph_output(from, to, amount, output));
    }

    let result = morph_output(from, to, amount, output)?;
    let Some(path) = &result.output else {
        println!("{}", result.params.to_json_pretty()?);
        return Ok(ExitCode::SUCCESS);
    };

    println!(
        "{} {} -> {} ({:.0}%)",
        "Morphing:".cyan().bold(),
        from,
        to,
        amount * 100.0
    );
    println!(
        "{} Wrote preset to: {}",
        "SUCCESS".green().bold(),
        path
    );
    Ok(ExitCode::SUCCESS)
}
