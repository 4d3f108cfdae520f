//! Pitch tokens and chromatic rows in ABC notation.
//!
//! Tokens carry an optional leading accidental marker (`^` sharp, `_` flat)
//! and an octave register: uppercase with a trailing `,` for the sub octave,
//! plain uppercase for the middle octave and lowercase for the upper octave.

mod format;
mod rows;

#[cfg(test)]
mod tests;

pub use format::{display_name, strip_accidental, strip_octave};
pub use rows::{
    EXTENDED_LEN, FLAT_EXTENDED, FLAT_ROW, OCTAVE_LEN, SHARP_EXTENDED, SHARP_ROW,
};

use serde::Serialize;

/// Accidental spelling of a chromatic row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    Sharp,
    Flat,
}

impl Spelling {
    /// Both spellings, in draw order.
    pub const ALL: [Spelling; 2] = [Spelling::Sharp, Spelling::Flat];

    /// The 12-entry single-octave row in this spelling.
    pub fn row(self) -> &'static [&'static str; OCTAVE_LEN] {
        match self {
            Spelling::Sharp => &SHARP_ROW,
            Spelling::Flat => &FLAT_ROW,
        }
    }

    /// The 36-entry three-octave row in this spelling.
    pub fn extended_row(self) -> &'static [&'static str; EXTENDED_LEN] {
        match self {
            Spelling::Sharp => &SHARP_EXTENDED,
            Spelling::Flat => &FLAT_EXTENDED,
        }
    }
}

/// Accidental carried by a pitch token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    Sharp,
    Flat,
    Natural,
}

impl Accidental {
    /// Reads the leading accidental marker of a token.
    pub fn of(token: &str) -> Self {
        match token.chars().next() {
            Some('^') => Accidental::Sharp,
            Some('_') => Accidental::Flat,
            _ => Accidental::Natural,
        }
    }

    /// The leading ABC marker for this accidental.
    pub fn marker(self) -> &'static str {
        match self {
            Accidental::Sharp => "^",
            Accidental::Flat => "_",
            Accidental::Natural => "",
        }
    }

    /// The trailing display suffix (`#`, `b` or nothing).
    pub fn suffix(self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::Natural => "",
        }
    }

    /// Row spelling implied by this accidental. Naturals read the sharp row.
    pub fn spelling(self) -> Spelling {
        match self {
            Accidental::Flat => Spelling::Flat,
            Accidental::Sharp | Accidental::Natural => Spelling::Sharp,
        }
    }
}

/// Octave register of a pitch token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Octave {
    Sub,
    Middle,
    Upper,
}

impl Octave {
    /// Reads the octave register of a token.
    pub fn of(token: &str) -> Self {
        if token.ends_with(',') {
            return Octave::Sub;
        }
        match token.chars().find(|c| c.is_ascii_alphabetic()) {
            Some(letter) if letter.is_ascii_lowercase() => Octave::Upper,
            _ => Octave::Middle,
        }
    }
}
