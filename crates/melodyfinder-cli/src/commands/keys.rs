//! Keys command implementation
//!
//! Lists the keys the melody generator draws from.

use anyhow::Result;
use colored::Colorize;
use melodyfinder_theory::{Key, Mode, TheoryError, SUPPORTED_KEYS};
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::{print_json, CommandOutput};

/// One supported key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyOutput {
    pub token: &'static str,
    pub header_key: String,
    pub mode: Mode,
}

/// Lists every supported key.
pub fn list() -> Result<Vec<KeyOutput>, TheoryError> {
    SUPPORTED_KEYS
        .into_iter()
        .map(|token| {
            let key = Key::parse(token)?;
            Ok(KeyOutput {
                token,
                header_key: key.header_name(),
                mode: key.mode(),
            })
        })
        .collect()
}

/// Run the keys command
pub fn run(json: bool) -> Result<ExitCode> {
    let keys = list()?;

    if json {
        print_json(&CommandOutput::success(None, keys))?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Supported keys:".cyan().bold(), keys.len());
    for key in &keys {
        println!("  {:<4} {:<4} {:?}", key.token, key.header_key, key.mode);
    }
    Ok(ExitCode::SUCCESS)
}
