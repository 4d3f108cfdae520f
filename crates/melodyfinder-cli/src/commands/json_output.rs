//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; the document printed is always a
//! [`CommandOutput`] wrapping the command's own result type.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Library errors pass their own codes through (`THEORY_xxx`, `CONFIG_xxx`).
pub mod error_codes {
    /// Config file could not be read
    pub const CONFIG_READ: &str = "CLI_001";
    /// Config file is not valid JSON for a melody config
    pub const CONFIG_PARSE: &str = "CLI_002";
    /// Generation produced no result
    pub const GENERATION_FAILED: &str = "CLI_003";
    /// Output file could not be written
    pub const OUTPUT_WRITE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "THEORY_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Top-level JSON document for a command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandOutput<T: Serialize> {
    /// Whether the command succeeded
    pub success: bool,
    /// Seed used by generating commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Command result (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl<T: Serialize> CommandOutput<T> {
    /// A successful output.
    pub fn success(seed: Option<u32>, result: T) -> Self {
        Self {
            success: true,
            seed,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    /// A failed output.
    pub fn failure(seed: Option<u32>, error: JsonError) -> Self {
        Self {
            success: false,
            seed,
            result: None,
            errors: vec![error],
        }
    }
}

/// Pretty-prints a JSON document to stdout.
pub fn print_json<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
