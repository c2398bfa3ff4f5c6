//! Presets command implementation
//!
//! Lists the preset generator names.

use anyhow::Result;
use colored::Colorize;
use sfxgen_core::Preset;
use std::process::ExitCode;

use super::json_output::{emit, PresetList};

/// Names of every preset generator, in menu order.
pub fn preset_names() -> Vec<&'static str> {
    Preset::ALL.iter().map(|p| p.name()).collect()
}

/// Run the presets command
pub fn run(json: bool) -> Result<ExitCode> {
    if json {
        return emit(Ok(PresetList {
            presets: preset_names(),
        }));
    }

    println!("{}", "Presets:".cyan().bold());
    for name in preset_names() {
        println!("  {}", name);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        let names = preset_names();
        assert_eq!(names.len(), 19);
        assert_eq!(names[0], "pickup_coin");
        assert!(names.contains(&"teleport"));
    }
}
