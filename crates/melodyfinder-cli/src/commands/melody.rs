//! Melody command implementation
//!
//! Generates a melody and prints (or writes) its ABC document.

use anyhow::Result;
use colored::Colorize;
use melodyfinder_backend::{ConfigError, Generator, Melody, MelodyConfig};
use serde::Serialize;
use std::fs;
use std::process::ExitCode;
use thiserror::Error;

use super::json_output::{error_codes, print_json, CommandOutput, JsonError};
use super::resolve_seed;

/// Error type for the melody command.
#[derive(Debug, Error)]
pub enum MelodyCommandError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not a valid melody config.
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Config parsed but describes no renderable melody.
    #[error("Invalid melody config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The drawn key produced no scale.
    #[error("Melody generation produced no scale")]
    NoScale,

    /// Output file could not be written.
    #[error("Failed to write to {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MelodyCommandError {
    /// Returns the stable error code reported in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            MelodyCommandError::ConfigRead { .. } => error_codes::CONFIG_READ,
            MelodyCommandError::ConfigParse { .. } => error_codes::CONFIG_PARSE,
            MelodyCommandError::InvalidConfig(err) => err.code(),
            MelodyCommandError::NoScale => error_codes::GENERATION_FAILED,
            MelodyCommandError::OutputWrite { .. } => error_codes::OUTPUT_WRITE,
        }
    }
}

/// Melody command result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MelodyOutput {
    /// Key as written on the `K:` line
    pub key: String,
    /// Complete ABC document
    pub abc: String,
    pub melody: Melody,
}

/// Loads a melody config from a JSON file, or the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<MelodyConfig, MelodyCommandError> {
    let Some(path) = path else {
        return Ok(MelodyConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|source| MelodyCommandError::ConfigRead {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| MelodyCommandError::ConfigParse {
        path: path.to_string(),
        source,
    })
}

/// Generates one melody with the given seed and config.
pub fn generate(seed: u32, config: MelodyConfig) -> Result<MelodyOutput, MelodyCommandError> {
    let mut generator = Generator::with_config(seed, config)?;
    let melody = generator.melody().ok_or(MelodyCommandError::NoScale)?;
    Ok(MelodyOutput {
        key: melody.header_key(),
        abc: melody.to_abc(),
        melody,
    })
}

/// Loads the config, generates the melody and writes it to `output_path` if given.
pub fn execute(
    seed: u32,
    config_path: Option<&str>,
    output_path: Option<&str>,
) -> Result<MelodyOutput, MelodyCommandError> {
    let output = generate(seed, load_config(config_path)?)?;
    if let Some(path) = output_path {
        fs::write(path, format!("{}\n", output.abc)).map_err(|source| {
            MelodyCommandError::OutputWrite {
                path: path.to_string(),
                source,
            }
        })?;
    }
    Ok(output)
}

/// Builds the `--json` document for a run.
pub fn json_output(
    seed: u32,
    config_path: Option<&str>,
    output_path: Option<&str>,
) -> CommandOutput<MelodyOutput> {
    match execute(seed, config_path, output_path) {
        Ok(output) => CommandOutput::success(Some(seed), output),
        Err(e) => CommandOutput::failure(Some(seed), JsonError::new(e.code(), e.to_string())),
    }
}

/// Run the melody command
///
/// # Arguments
/// * `seed` - Seed for the run (random when absent)
/// * `config_path` - Optional JSON melody config
/// * `output_path` - Optional file to write the ABC document to
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    seed: Option<u32>,
    config_path: Option<&str>,
    output_path: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let seed = resolve_seed(seed);

    if json {
        let output = json_output(seed, config_path, output_path);
        print_json(&output)?;
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let output = match execute(seed, config_path, output_path) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{} {} [{}]", "FAILED".red().bold(), e, e.code());
            return Ok(ExitCode::FAILURE);
        }
    };

    eprintln!(
        "{} key {} (seed {})",
        "Melody:".cyan().bold(),
        output.key,
        seed
    );
    match output_path {
        Some(path) => println!("{} Written to: {}", "SUCCESS".green().bold(), path),
        None => println!("{}", output.abc),
    }
    Ok(ExitCode::SUCCESS)
}
