//! Fixed chromatic rows.

/// Entries in a single-octave row.
pub const OCTAVE_LEN: usize = 12;

/// Entries in a three-octave row.
pub const EXTENDED_LEN: usize = OCTAVE_LEN * 3;

/// Single-octave row, sharp spelling.
pub const SHARP_ROW: [&str; OCTAVE_LEN] = [
    "C", "^C", "D", "^D", "E", "F", "^F", "G", "^G", "A", "^A", "B",
];

/// Single-octave row, flat spelling.
pub const FLAT_ROW: [&str; OCTAVE_LEN] = [
    "C", "_D", "D", "_E", "E", "F", "_G", "G", "_A", "A", "_B", "B",
];

/// Three-octave row (sub, middle, upper), sharp spelling.
pub const SHARP_EXTENDED: [&str; EXTENDED_LEN] = [
    "C,", "^C,", "D,", "^D,", "E,", "F,", "^F,", "G,", "^G,", "A,", "^A,", "B,",
    "C", "^C", "D", "^D", "E", "F", "^F", "G", "^G", "A", "^A", "B",
    "c", "^c", "d", "^d", "e", "f", "^f", "g", "^g", "a", "^a", "b",
];

/// Three-octave row (sub, middle, upper), flat spelling.
pub const FLAT_EXTENDED: [&str; EXTENDED_LEN] = [
    "C,", "_D,", "D,", "_E,", "E,", "F,", "_G,", "G,", "_A,", "A,", "_B,", "B,",
    "C", "_D", "D", "_E", "E", "F", "_G", "G", "_A", "A", "_B", "B",
    "c", "_d", "d", "_e", "e", "f", "_g", "g", "_a", "a", "_b", "b",
];
