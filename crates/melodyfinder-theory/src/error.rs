//! Error types for key parsing and scale construction.

use thiserror::Error;

/// Error type for theory lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The key root is not a token of the chromatic row for its spelling.
    #[error("Unknown key root '{root}' in key '{key}'")]
    UnknownRoot { key: String, root: String },

    /// The key token was empty (or only a mode marker).
    #[error("Empty key token")]
    EmptyKey,
}

impl TheoryError {
    /// Returns the stable error code (e.g., "THEORY_001").
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::UnknownRoot { .. } => "THEORY_001",
            TheoryError::EmptyKey => "THEORY_002",
        }
    }
}
