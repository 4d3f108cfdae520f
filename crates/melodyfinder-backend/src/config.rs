//! Melody generation parameters.
//!
//! Every field defaults to the fixed shape of a generated melody, so an empty
//! JSON object (or no config at all) reproduces the standard output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tempo written to the `Q:` header line.
pub const DEFAULT_TEMPO: u32 = 100;

/// Default piece title written to the `T:` header line.
pub const DEFAULT_TITLE: &str = "Random Melody";

/// Default meter written to the `M:` header line.
pub const DEFAULT_METER: &str = "4/4";

/// Default number of bars.
pub const DEFAULT_BARS: usize = 2;

/// Default notes per bar.
pub const DEFAULT_NOTES_PER_BAR: usize = 4;

/// Default largest scale-degree jump between consecutive notes.
pub const DEFAULT_MAX_STEP: u32 = 3;

/// Error type for invalid melody parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Tempo of zero.
    #[error("Tempo must be at least 1")]
    ZeroTempo,

    /// No bars requested.
    #[error("Melody must have at least one bar")]
    ZeroBars,

    /// No notes per bar requested.
    #[error("Bars must have at least one note")]
    ZeroNotesPerBar,

    /// Blank title or meter.
    #[error("Header field '{0}' must not be empty")]
    EmptyHeaderField(&'static str),
}

impl ConfigError {
    /// Returns the stable error code (e.g., "CONFIG_001").
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroTempo => "CONFIG_001",
            ConfigError::ZeroBars => "CONFIG_002",
            ConfigError::ZeroNotesPerBar => "CONFIG_003",
            ConfigError::EmptyHeaderField(_) => "CONFIG_004",
        }
    }
}

/// Parameters for the melody generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MelodyConfig {
    pub tempo: u32,
    pub title: String,
    pub meter: String,
    pub bars: usize,
    pub notes_per_bar: usize,
    /// Steps are drawn from `[-max_step, max_step]`.
    pub max_step: u32,
}

impl Default for MelodyConfig {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            title: DEFAULT_TITLE.to_string(),
            meter: DEFAULT_METER.to_string(),
            bars: DEFAULT_BARS,
            notes_per_bar: DEFAULT_NOTES_PER_BAR,
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

impl MelodyConfig {
    /// Checks that the parameters describe a renderable melody.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tempo == 0 {
            return Err(ConfigError::ZeroTempo);
        }
        if self.bars == 0 {
            return Err(ConfigError::ZeroBars);
        }
        if self.notes_per_bar == 0 {
            return Err(ConfigError::ZeroNotesPerBar);
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyHeaderField("title"));
        }
        if self.meter.trim().is_empty() {
            return Err(ConfigError::EmptyHeaderField("meter"));
        }
        Ok(())
    }

    /// Total notes across all bars.
    pub fn total_notes(&self) -> usize {
        self.bars * self.notes_per_bar
    }
}
