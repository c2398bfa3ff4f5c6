//! sfxgen CLI - procedural retro sound effects from the command line
//!
//! Generates preset parameter files, renders them to WAV and converts them
//! to and from share codes.

use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use sfxgen_cli::commands;
use sfxgen_cli::input::{parse_override, resolve_seed, OptionOverrides, ParamsSource};

/// sfxgen - sfxr-style sound effect generator
#[derive(Parser)]
#[command(name = "sfxgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the preset generators
    Presets {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a parameter set from a preset
    Preset {
        /// Preset name (e.g. pickup_coin, explosion)
        #[arg(short, long)]
        name: String,

        /// Seed for the generator (random when omitted)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Nudge the generated parameters by up to this amount
        #[arg(short, long)]
        mutate: Option<f64>,

        /// Output preset file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a parameter set to a WAV file
    Render {
        /// Preset file to render
        #[arg(short, long, conflicts_with_all = ["preset", "code"])]
        params: Option<String>,

        /// Preset generator to run before rendering
        #[arg(long, conflicts_with = "code")]
        preset: Option<String>,

        /// Share code to render
        #[arg(long)]
        code: Option<String>,

        /// Seed for the preset generator, noise and arpeggio (random when omitted)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Render options file (JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Duration in seconds (clamped to 0.1..=10)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Engine sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Decimate to this sample rate after rendering
        #[arg(long)]
        target_sample_rate: Option<u32>,

        /// Quantize to this many bits after rendering
        #[arg(long)]
        bit_depth: Option<u8>,

        /// Override a parameter (repeatable), e.g. --set base_freq=0.4
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
        overrides: Vec<(String, f64)>,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Encode a preset file as a share code
    Encode {
        /// Preset file
        #[arg(short, long)]
        params: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a share code into a preset file
    Decode {
        /// Share code
        code: String,

        /// Output preset file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Interpolate between two preset files
    Morph {
        /// Start preset file
        #[arg(long)]
        from: String,

        /// Target preset file
        #[arg(long)]
        to: String,

        /// Interpolation amount (0 = from, 1 = to)
        #[arg(short, long, default_value_t = 0.5)]
        amount: f64,

        /// Output preset file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Summarize a WAV file
    Inspect {
        /// WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Preset {
            name,
            seed,
            mutate,
            output,
            json,
        } => commands::preset::run(&name, seed, mutate, output.as_deref(), json),
        Commands::Render {
            params,
            preset,
            code,
            seed,
            config,
            duration,
            sample_rate,
            target_sample_rate,
            bit_depth,
            overrides,
            output,
            json,
        } => {
            let seed = resolve_seed(seed);
            match ParamsSource::from_args(
                params.as_deref(),
                preset.as_deref(),
                code.as_deref(),
                seed,
            ) {
                Ok(source) => {
                    let args = commands::render::RenderArgs {
                        source,
                        seed,
                        config: config.as_deref().map(Path::new),
                        options: OptionOverrides {
                            duration,
                            sample_rate,
                            target_sample_rate,
                            bit_depth,
                        },
                        overrides: &overrides,
                        output: Path::new(&output),
                    };
                    commands::render::run(&args, json)
                }
                Err(e) if json => commands::json_output::emit::<()>(Err(e)),
                Err(e) => Err(e),
            }
        }
        Commands::Encode { params, json } => commands::encode::run(&params, json),
        Commands::Decode { code, output, json } => {
            commands::decode::run(&code, output.as_deref(), json)
        }
        Commands::Morph {
            from,
            to,
            amount,
            output,
            json,
        } => commands::morph::run(&from, &to, amount, output.as_deref(), json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
