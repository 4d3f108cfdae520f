//! Scale builder.
//!
//! Walks a 7-step interval table from the key root around the circular
//! 12-entry chromatic row, emitting bare letter names. The accidental spelling
//! is dropped here; it travels in the key signature instead.

use serde::Serialize;

use crate::error::TheoryError;
use crate::key::{Key, Mode};
use crate::pitch::{strip_accidental, OCTAVE_LEN};

/// Semitone steps of the major scale.
pub const MAJOR_STEPS: [usize; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Semitone steps of the natural minor scale.
pub const MINOR_STEPS: [usize; 7] = [2, 1, 2, 2, 1, 2, 2];

/// Entries in a built scale (root + 7 steps).
pub const SCALE_LEN: usize = MAJOR_STEPS.len() + 1;

impl Mode {
    /// Interval table for this mode.
    pub fn steps(self) -> &'static [usize; 7] {
        match self {
            Mode::Major => &MAJOR_STEPS,
            Mode::Minor => &MINOR_STEPS,
        }
    }
}

/// A built scale: the key it came from and its 8 bare letter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub key: Key,
    pub notes: Vec<&'static str>,
}

impl Scale {
    /// Builds the scale for a parsed key.
    pub fn for_key(key: Key) -> Self {
        let row = key.spelling().row();
        let mut idx = key.root_index();
        let mut notes = Vec::with_capacity(SCALE_LEN);
        notes.push(strip_accidental(row[idx]));
        for step in key.mode().steps() {
            idx = (idx + step) % OCTAVE_LEN;
            notes.push(strip_accidental(row[idx]));
        }
        Self { key, notes }
    }

    /// Number of entries (always [`SCALE_LEN`]).
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Entry at a scale degree (0-based).
    pub fn get(&self, degree: usize) -> Option<&'static str> {
        self.notes.get(degree).copied()
    }

    /// Whether a letter name belongs to this scale.
    pub fn contains(&self, note: &str) -> bool {
        self.notes.iter().any(|n| *n == note)
    }
}

/// Builds the scale for a key token, reporting why it failed.
pub fn try_scale(key: &str) -> Result<Scale, TheoryError> {
    Key::parse(key).map(Scale::for_key)
}

/// Builds the scale for a key token.
///
/// Returns an empty vec when the root is not in the chromatic row; there is
/// no partial result.
///
/// # Examples
/// ```
/// use melodyfinder_theory::get_scale;
///
/// assert_eq!(get_scale("C"), vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
/// assert_eq!(get_scale("Am"), vec!["A", "B", "C", "D", "E", "F", "G", "A"]);
/// assert!(get_scale("Z").is_empty());
/// ```
pub fn get_scale(key: &str) -> Vec<&'static str> {
    try_scale(key).map(|scale| scale.notes).unwrap_or_default()
}
