//! Key tokens.
//!
//! A key token is a root pitch-class token (optionally with a leading `^` or
//! `_` marker) followed by an optional `m` for minor, e.g. `C`, `^Fm`, `_B`.

use serde::Serialize;

use crate::error::TheoryError;
use crate::pitch::{display_name, Accidental, Spelling};

/// Keys the melody generator draws from.
///
/// Flat minor keys (`_Bm`, `_Em`, `_Am`, `_Dm`) are left out because their
/// header spelling is not representable in the output notation.
pub const SUPPORTED_KEYS: [&str; 19] = [
    "C", "G", "D", "A", "E", "B", "^F", "F", "_B", "_E", "_A", "_D", "Am", "Em", "Bm", "^Fm",
    "^Cm", "Dm", "Gm",
];

/// Trailing mode marker for minor keys.
const MINOR_MARKER: char = 'm';

/// Key mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Minor,
}

/// A parsed key: root token, mode and accidental notation.
///
/// Only [`Key::parse`] builds keys, so the root is always an entry of its
/// chromatic row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Key {
    root: &'static str,
    root_index: usize,
    mode: Mode,
    accidental: Accidental,
}

impl Key {
    /// Parses a key token.
    ///
    /// The root must match an entry of the 12-entry row selected by its
    /// accidental marker: flat-marked roots read the flat row, everything
    /// else reads the sharp row.
    ///
    /// # Examples
    /// ```
    /// use melodyfinder_theory::{Key, Mode};
    ///
    /// let key = Key::parse("^Fm").unwrap();
    /// assert_eq!(key.root(), "^F");
    /// assert_eq!(key.mode(), Mode::Minor);
    /// assert!(Key::parse("Z").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, TheoryError> {
        let (root, mode) = match token.strip_suffix(MINOR_MARKER) {
            Some(root) => (root, Mode::Minor),
            None => (token, Mode::Major),
        };
        if root.is_empty() {
            return Err(TheoryError::EmptyKey);
        }

        let accidental = Accidental::of(root);
        let row = accidental.spelling().row();
        let root_index = row
            .iter()
            .position(|candidate| *candidate == root)
            .ok_or_else(|| TheoryError::UnknownRoot {
                key: token.to_string(),
                root: root.to_string(),
            })?;

        Ok(Self {
            root: row[root_index],
            root_index,
            mode,
            accidental,
        })
    }

    /// Root token exactly as it appears in the chromatic row (e.g. `_B`).
    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Spelling of the chromatic row this key reads from.
    pub fn spelling(&self) -> Spelling {
        self.accidental.spelling()
    }

    /// Position of the root in its 12-entry row.
    pub fn root_index(&self) -> usize {
        self.root_index
    }

    /// The key as written in a notation header: `_B` becomes `Bb`,
    /// `^Fm` becomes `F#m`.
    pub fn header_name(&self) -> String {
        let mut name = display_name(self.root);
        if self.mode == Mode::Minor {
            name.push(MINOR_MARKER);
        }
        name
    }

    /// The key back in token form (e.g. `^Fm`).
    pub fn token(&self) -> String {
        match self.mode {
            Mode::Major => self.root.to_string(),
            Mode::Minor => format!("{}{}", self.root, MINOR_MARKER),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.header_name())
    }
}
