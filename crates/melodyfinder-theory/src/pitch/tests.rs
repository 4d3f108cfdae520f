//! Tests for chromatic rows and token formatting.

use super::*;

#[test]
fn test_rows_have_expected_lengths() {
    assert_eq!(SHARP_ROW.len(), 12);
    assert_eq!(FLAT_ROW.len(), 12);
    assert_eq!(SHARP_EXTENDED.len(), 36);
    assert_eq!(FLAT_EXTENDED.len(), 36);
}

#[test]
fn test_extended_rows_repeat_the_octave_row() {
    for spelling in Spelling::ALL {
        let row = spelling.row();
        let extended = spelling.extended_row();
        for (i, token) in extended.iter().enumerate() {
            let class = strip_octave(token).to_uppercase();
            let expected = row[i % OCTAVE_LEN].to_uppercase();
            assert_eq!(class, expected, "{:?} row mismatch at {}", spelling, i);
        }
    }
}

#[test]
fn test_octave_of() {
    assert_eq!(Octave::of("C,"), Octave::Sub);
    assert_eq!(Octave::of("^F,"), Octave::Sub);
    assert_eq!(Octave::of("_B"), Octave::Middle);
    assert_eq!(Octave::of("c"), Octave::Upper);
    assert_eq!(Octave::of("^a"), Octave::Upper);
}

#[test]
fn test_extended_row_registers() {
    for spelling in Spelling::ALL {
        let extended = spelling.extended_row();
        assert!(extended[..12].iter().all(|t| Octave::of(t) == Octave::Sub));
        assert!(extended[12..24].iter().all(|t| Octave::of(t) == Octave::Middle));
        assert!(extended[24..].iter().all(|t| Octave::of(t) == Octave::Upper));
    }
}

#[test]
fn test_accidental_of() {
    assert_eq!(Accidental::of("^C"), Accidental::Sharp);
    assert_eq!(Accidental::of("_e"), Accidental::Flat);
    assert_eq!(Accidental::of("G,"), Accidental::Natural);
    assert_eq!(Accidental::of(""), Accidental::Natural);
}

#[test]
fn test_accidental_spelling() {
    assert_eq!(Accidental::Flat.spelling(), Spelling::Flat);
    assert_eq!(Accidental::Sharp.spelling(), Spelling::Sharp);
    assert_eq!(Accidental::Natural.spelling(), Spelling::Sharp);
}

#[test]
fn test_display_name() {
    assert_eq!(display_name("C"), "C");
    assert_eq!(display_name("C,"), "C");
    assert_eq!(display_name("c"), "C");
    assert_eq!(display_name("^f"), "F#");
    assert_eq!(display_name("^F,"), "F#");
    assert_eq!(display_name("_B"), "Bb");
    assert_eq!(display_name("_e"), "Eb");
}

#[test]
fn test_display_name_never_keeps_markers() {
    for spelling in Spelling::ALL {
        for token in spelling.extended_row() {
            let name = display_name(token);
            assert!(!name.contains(['^', '_', ',', '\'']), "{} -> {}", token, name);
            assert!(name.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }
}

#[test]
fn test_strip_accidental() {
    assert_eq!(strip_accidental("^C,"), "C,");
    assert_eq!(strip_accidental("_d"), "d");
    assert_eq!(strip_accidental("E"), "E");
}
