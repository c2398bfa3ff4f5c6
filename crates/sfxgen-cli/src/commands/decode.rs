//! Decode command implementation
//!
//! Turns a share code back into a preset file.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxgen_core::codec;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{emit, ParamsOutput};
use crate::input::write_params_file;

/// Decodes a share code, writing the preset file when `output` is given.
pub fn decode_code(code: &str, output: Option<&str>) -> Result<ParamsOutput> {
    let params = codec::decode(code).context("Failed to decode share code")?;
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

/// Run the decode command
pub fn run(code: &str, output: Option<&str>, json: bool) -> Result<ExitCode> {
    if json {
        return emit(decode_code(code, output));
    }

    let result = decode_code(code, output)?;
    match &result.output {
        Some(path) => println!(
            "{} Wrote preset to: {}",
            "SUCCESS".green().bold(),
            path
        ),
        None => println!("{}", result.params.to_json_pretty()?),
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::json_output::error_code;
    use crate::input::load_params_file;
    use sfxgen_core::rng::create_rng;
    use sfxgen_core::Preset;
    use tempfile::tempdir;

    #[test]
    fn test_decode_to_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("robot.json");
        let params = Preset::Robot.generate(&mut create_rng(8));
        let code = codec::encode(&params).unwrap();

        let result = decode_code(&code, path.to_str()).unwrap();
        assert_eq!(result.params, params);
        assert_eq!(load_params_file(&path).unwrap(), params);
    }

    #[test]
    fn test_decode_malformed_code() {
        let err = decode_code("not a code!", None).unwrap_err();
        assert_eq!(error_code(&err), "CODEC_001");
    }
}
