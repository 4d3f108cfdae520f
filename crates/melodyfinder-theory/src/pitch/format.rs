//! Token formatting shared by the key header, chord root and note display.

use super::Accidental;

/// Strips the leading accidental marker, leaving octave marks intact.
///
/// # Examples
/// ```
/// use melodyfinder_theory::strip_accidental;
///
/// assert_eq!(strip_accidental("^F"), "F");
/// assert_eq!(strip_accidental("_b,"), "b,");
/// assert_eq!(strip_accidental("C"), "C");
/// ```
pub fn strip_accidental(token: &str) -> &str {
    token.trim_start_matches(['^', '_'])
}

/// Strips octave marks (`,` and `'`) from a token.
pub fn strip_octave(token: &str) -> String {
    token.chars().filter(|c| !matches!(c, ',' | '\'')).collect()
}

/// Formats a token as a display name: octave marks removed, letter
/// uppercased, and the leading `^`/`_` marker turned into a trailing `#`/`b`.
///
/// # Examples
/// ```
/// use melodyfinder_theory::display_name;
///
/// assert_eq!(display_name("^c"), "C#");
/// assert_eq!(display_name("_B,"), "Bb");
/// assert_eq!(display_name("e"), "E");
/// ```
pub fn display_name(token: &str) -> String {
    let accidental = Accidental::of(token);
    let mut name = strip_octave(strip_accidental(token)).to_uppercase();
    name.push_str(accidental.suffix());
    name
}
