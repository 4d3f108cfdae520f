//! MelodyFinder Theory - Pitch Model, Keys, Scales and Chord Tables
//!
//! This crate holds the fixed music-theory tables the generators slice into,
//! expressed as ABC notation tokens. Nothing in here is random: every function
//! is a pure lookup or walk over a fixed table.
//!
//! # Module Structure
//!
//! - [`pitch`]: Chromatic rows (12 and 36 entries, sharp and flat spelling)
//!   and the shared token display formatter
//! - [`key`]: Key tokens, the supported key list and header normalization
//! - [`scale`]: The scale builder
//! - [`chord`]: Chord qualities, inversions and their step tables
//! - [`error`]: Error types with stable codes

pub mod chord;
pub mod error;
pub mod key;
pub mod pitch;
pub mod scale;

// Re-export main types
pub use chord::{ChordQuality, Inversion, MAX_REACH, MAX_TONES, ROOT_HEADROOM};
pub use error::TheoryError;
pub use key::{Key, Mode, SUPPORTED_KEYS};
pub use pitch::{display_name, strip_accidental, Accidental, Octave, Spelling};
pub use scale::{get_scale, try_scale, Scale, MAJOR_STEPS, MINOR_STEPS, SCALE_LEN};

/// Crate version for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
