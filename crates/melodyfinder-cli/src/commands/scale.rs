//! Scale command implementation
//!
//! Prints the 8-letter scale for a key token.

use anyhow::Result;
use colored::Colorize;
use melodyfinder_theory::{try_scale, Mode, Spelling, TheoryError};
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::{print_json, CommandOutput, JsonError};

/// Scale command result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleOutput {
    /// Key token as given
    pub key: String,
    /// Key as written in a notation header
    pub header_key: String,
    pub mode: Mode,
    pub spelling: Spelling,
    pub notes: Vec<&'static str>,
}

/// Builds the scale output for a key token.
pub fn build(key: &str) -> Result<ScaleOutput, TheoryError> {
    let scale = try_scale(key)?;
    Ok(ScaleOutput {
        key: key.to_string(),
        header_key: scale.key.header_name(),
        mode: scale.key.mode(),
        spelling: scale.key.spelling(),
        notes: scale.notes,
    })
}

/// Run the scale command
///
/// # Arguments
/// * `key` - Key token (e.g. "C", "Am", "_B")
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 unknown key
pub fn run(key: &str, json: bool) -> Result<ExitCode> {
    match build(key) {
        Ok(output) => {
            if json {
                print_json(&CommandOutput::success(None, output))?;
            } else {
                println!(
                    "{} {} ({:?})",
                    "Scale:".cyan().bold(),
                    output.header_key,
                    output.mode
                );
                println!("{}", output.notes.join(" "));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json {
                let error = JsonError::new(e.code(), e.to_string());
                print_json(&CommandOutput::<ScaleOutput>::failure(None, error))?;
            } else {
                eprintln!("{} {} [{}]", "FAILED".red().bold(), e, e.code());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_minor_sharp_key() {
        let output = build("^Fm").unwrap();
        assert_eq!(output.header_key, "F#m");
        assert_eq!(output.mode, Mode::Minor);
        assert_eq!(output.spelling, Spelling::Sharp);
        assert_eq!(output.notes.len(), 8);
    }

    #[test]
    fn test_build_unknown_key() {
        let err = build("Z").unwrap_err();
        assert_eq!(err.code(), "THEORY_001");
    }
}
