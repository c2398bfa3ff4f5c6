//! Encode command implementation
//!
//! Turns a preset file into a share code.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxgen_core::codec;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{emit, CodeOutput};
use crate::input::load_params_file;

/// Reads a preset file and encodes it.
pub fn encode_file(path: &Path) -> Result<CodeOutput> {
    let params = load_params_file(path)?;
    let code = codec::encode(&params).context("Failed to encode parameters")?;
    Ok(CodeOutput { code })
}

/// Run the encode command
pub fn run(params_path: &str, json: bool) -> Result<ExitCode> {
    let path = Path::new(params_path);
    if json {
        return emit(encode_file(path));
    }

    let output = encode_file(path)?;
    eprintln!("{} {}", "Encoded:".cyan().bold(), params_path);
    println!("{}", output.code);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::write_params_file;
    use pretty_assertions::assert_eq;
    use sfxgen_core::rng::create_rng;
    use sfxgen_core::Preset;
    use tempfile::tempdir;

    #[test]
    fn test_encode_file_matches_codec() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("bell.json");
        let params = Preset::Bell.generate(&mut create_rng(3));
        write_params_file(&path, &params).unwrap();

        let output = encode_file(&path).unwrap();
        assert_eq!(output.code, codec::encode(&params).unwrap());
        assert_eq!(codec::decode(&output.code).unwrap(), params);
    }
}
