//! Loading parameter sets and render options from the command line.
//!
//! A parameter set can come from a JSON preset file, a named generator plus
//! a seed, or a share code. Render options start from a `--config` file (or
//! from the parameter set's own output fields) and explicit flags win.

use anyhow::{bail, Context, Result};
use sfxgen_core::rng::create_rng;
use sfxgen_core::{codec, ParameterSet, Preset, RenderOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a parameter set comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsSource {
    /// A JSON preset file.
    File(PathBuf),
    /// A preset generator run with a seed.
    Preset {
        /// Generator to run.
        preset: Preset,
        /// Seed for its random draws.
        seed: u32,
    },
    /// A share code.
    Code(String),
}

impl ParamsSource {
    /// Picks the single source given on the command line.
    ///
    /// `seed` is only used for presets.
    pub fn from_args(
        params: Option<&str>,
        preset: Option<&str>,
        code: Option<&str>,
        seed: u32,
    ) -> Result<Self> {
        match (params, preset, code) {
            (Some(path), None, None) => Ok(ParamsSource::File(PathBuf::from(path))),
            (None, Some(name), None) => {
                let preset: Preset = name.parse()?;
                Ok(ParamsSource::Preset { preset, seed })
            }
            (None, None, Some(code)) => Ok(ParamsSource::Code(code.to_string())),
            (None, None, None) => bail!("one of --params, --preset or --code is required"),
            _ => bail!("--params, --preset and --code are mutually exclusive"),
        }
    }

    /// Loads the parameter set.
    pub fn load(&self) -> Result<ParameterSet> {
        match self {
            ParamsSource::File(path) => load_params_file(path),
            ParamsSource::Preset { preset, seed } => {
                Ok(preset.generate(&mut create_rng(*seed)))
            }
            ParamsSource::Code(code) => {
                codec::decode(code).context("Failed to decode share code")
            }
        }
    }

    /// Short description for status lines.
    pub fn describe(&self) -> String {
        match self {
            ParamsSource::File(path) => path.display().to_string(),
            ParamsSource::Preset { preset, seed } => format!("{} (seed {})", preset, seed),
            ParamsSource::Code(_) => "share code".to_string(),
        }
    }
}

/// Returns the given seed, or a fresh random one.
pub fn resolve_seed(seed: Option<u32>) -> u32 {
    seed.unwrap_or_else(rand::random)
}

/// Reads a JSON preset file.
pub fn load_params_file(path: &Path) -> Result<ParameterSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset file: {}", path.display()))?;
    let params = ParameterSet::from_json(&content)
        .with_context(|| format!("Failed to parse preset file: {}", path.display()))?;
    Ok(params)
}

/// Writes a parameter set as pretty JSON.
pub fn write_params_file(path: &Path, params: &ParameterSet) -> Result<()> {
    let json = params
        .to_json_pretty()
        .context("Failed to serialize parameters")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write preset file: {}", path.display()))
}

/// Parses a `key=value` override. Used as a clap value parser.
pub fn parse_override(s: &str) -> std::result::Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in '{}'", s));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((key.to_string(), value))
}

/// Applies `--set` overrides in order.
pub fn apply_overrides(params: &mut ParameterSet, overrides: &[(String, f64)]) -> Result<()> {
    for (name, value) in overrides {
        params
            .set(name, *value)
            .with_context(|| format!("Invalid override: {}={}", name, value))?;
    }
    Ok(())
}

/// Render option flags given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionOverrides {
    /// `--duration`
    pub duration: Option<f64>,
    /// `--sample-rate`
    pub sample_rate: Option<u32>,
    /// `--target-sample-rate`
    pub target_sample_rate: Option<u32>,
    /// `--bit-depth`
    pub bit_depth: Option<u8>,
}

/// Reads a `RenderOptions` JSON document.
pub fn load_config(path: &Path) -> Result<RenderOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let options: RenderOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(options)
}

/// Builds the render options for `params`.
///
/// Without a config file the post-processing targets come from the
/// parameter set's `sample_rate` and `sample_size` fields.
pub fn resolve_options(
    params: &ParameterSet,
    config: Option<&Path>,
    overrides: &OptionOverrides,
) -> Result<RenderOptions> {
    let mut options = match config {
        Some(path) => load_config(path)?,
        None => RenderOptions::for_params(params),
    };
    if let Some(duration) = overrides.duration {
        options.duration = duration;
    }
    if let Some(rate) = overrides.sample_rate {
        options.sample_rate = rate;
    }
    if let Some(rate) = overrides.target_sample_rate {
        options.target_sample_rate = Some(rate);
    }
    if let Some(bits) = overrides.bit_depth {
        options.bit_depth = Some(bits);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sfxgen_core::WaveType;
    use tempfile::tempdir;

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("base_freq=0.25").unwrap(),
            ("base_freq".to_string(), 0.25)
        );
        assert_eq!(
            parse_override(" sustain = 1 ").unwrap(),
            ("sustain".to_string(), 1.0)
        );
        assert!(parse_override("base_freq").is_err());
        assert!(parse_override("=1").is_err());
        assert!(parse_override("decay=loud").is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut params = ParameterSet::default();
        apply_overrides(
            &mut params,
            &[("decay".to_string(), 0.9), ("sample_size".to_string(), 8.0)],
        )
        .unwrap();
        assert_eq!(params.decay, 0.9);
        assert_eq!(params.sample_size, 8);

        let err = apply_overrides(&mut params, &[("loudness".to_string(), 1.0)]).unwrap_err();
        assert!(format!("{:#}", err).contains("loudness"));
    }

    #[test]
    fn test_source_from_args() {
        assert_eq!(
            ParamsSource::from_args(None, Some("pickupCoin"), None, 4).unwrap(),
            ParamsSource::Preset {
                preset: Preset::PickupCoin,
                seed: 4
            }
        );
        assert!(ParamsSource::from_args(None, Some("kaboom"), None, 4).is_err());
        assert!(ParamsSource::from_args(None, None, None, 4).is_err());
        assert!(ParamsSource::from_args(Some("a.json"), None, Some("abc"), 4).is_err());
    }

    #[test]
    fn test_preset_source_is_deterministic() {
        let source = ParamsSource::Preset {
            preset: Preset::Explosion,
            seed: 9,
        };
        let a = source.load().unwrap();
        let b = source.load().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.wave_type, WaveType::Noise);
    }

    #[test]
    fn test_params_file_round_trip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("coin.json");
        let params = Preset::PickupCoin.generate(&mut create_rng(1));

        write_params_file(&path, &params).unwrap();
        let loaded = ParamsSource::File(path).load().unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_missing_params_file() {
        let tmp = tempdir().unwrap();
        let err = load_params_file(&tmp.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read preset file"));
    }

    #[test]
    fn test_code_source() {
        let params = Preset::Zap.generate(&mut create_rng(2));
        let code = codec::encode(&params).unwrap();
        assert_eq!(ParamsSource::Code(code).load().unwrap(), params);
        assert!(ParamsSource::Code("%%%".to_string()).load().is_err());
    }

    #[test]
    fn test_resolve_options_from_params() {
        let params = ParameterSet {
            sample_rate: 22050,
            sample_size: 8,
            ..ParameterSet::default()
        };
        let options = resolve_options(&params, None, &OptionOverrides::default()).unwrap();
        assert_eq!(options.target_sample_rate, Some(22050));
        assert_eq!(options.bit_depth, Some(8));
        assert_eq!(options.duration, 1.5);
    }

    #[test]
    fn test_flags_override_config() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("render.json");
        fs::write(&path, r#"{"duration": 3.0, "sample_rate": 48000, "bit_depth": 12}"#).unwrap();

        let overrides = OptionOverrides {
            duration: Some(0.5),
            ..OptionOverrides::default()
        };
        let options = resolve_options(&ParameterSet::default(), Some(&path), &overrides).unwrap();
        assert_eq!(options.duration, 0.5);
        assert_eq!(options.sample_rate, 48000);
        assert_eq!(options.bit_depth, Some(12));
        assert_eq!(options.target_sample_rate, None);
    }

    #[test]
    fn test_bad_config_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("render.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
