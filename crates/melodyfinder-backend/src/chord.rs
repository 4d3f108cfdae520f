//! Chord generator.
//!
//! Picks a spelling, a root position in the three-octave row, a weighted
//! quality and (for major and minor) an inversion, then walks the quality's
//! step table up the row. The row never wraps: roots are drawn only from
//! positions that leave [`ROOT_HEADROOM`] slots above them.
//!
//! Two renderings are produced from the same pitches. The chord token plays
//! every tone at once (`[CEG]` style with a fixed length); the arpeggio block
//! gives each tone its own voice, delayed by one rest per voice and shortened
//! by one unit per voice:
//!
//! ```text
//! [V:1] C4|
//! [V:2] zE3|
//! [V:3] zzG2|
//! ```

use melodyfinder_theory::pitch::EXTENDED_LEN;
use melodyfinder_theory::{
    display_name, ChordQuality, Inversion, Spelling, MAX_REACH, ROOT_HEADROOM,
};
use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;
use std::fmt::Write;

use crate::rng::pick_index;

/// Note length used by the chord token and the first arpeggio voice.
pub const CHORD_DURATION: usize = 4;

/// Rest character padding later arpeggio voices.
pub const REST_FILLER: char = 'z';

/// Number of root positions a chord may start on.
pub const ROOT_RANGE: usize = EXTENDED_LEN - ROOT_HEADROOM;

// Every root in range walks every table without leaving the row.
const _: () = assert!(ROOT_RANGE - 1 + MAX_REACH < EXTENDED_LEN);

/// A generated chord and its two renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    /// Root display name (e.g. "F#", "Bb").
    pub root: String,
    pub quality: ChordQuality,
    pub inversion: Inversion,
    pub spelling: Spelling,
    /// Position of the root in the three-octave row.
    pub root_index: usize,
    /// Tones from lowest to highest.
    pub pitches: Vec<&'static str>,
    /// Bracketed simultaneous chord token.
    pub token: String,
    /// Multi-voice arpeggio block.
    pub arpeggio: String,
}

impl Chord {
    /// Splits into (root name, quality tag, inversion index, (chord token, arpeggio)).
    pub fn into_parts(self) -> (String, &'static str, u8, (String, String)) {
        (
            self.root,
            self.quality.tag(),
            self.inversion.index(),
            (self.token, self.arpeggio),
        )
    }
}

/// Builds a chord from explicit choices.
///
/// Returns `None` when `root_index` is not below [`ROOT_RANGE`], where the
/// step walk could run past the top of the row.
pub fn build_chord(
    spelling: Spelling,
    root_index: usize,
    quality: ChordQuality,
    inversion: Inversion,
) -> Option<Chord> {
    if root_index >= ROOT_RANGE {
        return None;
    }
    Some(voice_chord(spelling, root_index, quality, inversion))
}

/// Walks the step table from a root already known to be below [`ROOT_RANGE`].
fn voice_chord(
    spelling: Spelling,
    root_index: usize,
    quality: ChordQuality,
    inversion: Inversion,
) -> Chord {
    let row = spelling.extended_row();
    let inversion = if quality.has_inversions() {
        inversion
    } else {
        Inversion::Root
    };

    let mut idx = root_index;
    let pitches: Vec<&'static str> = quality
        .steps(inversion)
        .iter()
        .map(|step| {
            idx += step;
            row[idx]
        })
        .collect();

    Chord {
        root: display_name(row[root_index]),
        quality,
        inversion,
        spelling,
        root_index,
        token: render_chord_token(&pitches),
        arpeggio: render_arpeggio(&pitches),
        pitches,
    }
}

/// Draws a random chord.
pub fn generate_chord(rng: &mut Pcg32) -> Chord {
    let spelling = Spelling::ALL[pick_index(rng, Spelling::ALL.len())];
    let root_index = pick_index(rng, ROOT_RANGE);
    let quality = ChordQuality::from_roll(rng.gen_range(0..ChordQuality::total_weight()));
    let inversion = if quality.has_inversions() {
        Inversion::ALL[pick_index(rng, Inversion::ALL.len())]
    } else {
        Inversion::Root
    };
    voice_chord(spelling, root_index, quality, inversion)
}

/// Renders all tones as one bracketed chord, e.g. `[C4E4G4]`.
pub fn render_chord_token(pitches: &[&str]) -> String {
    let mut token = String::from("[");
    for pitch in pitches {
        // Writing into a String cannot fail.
        let _ = write!(token, "{}{}", pitch, CHORD_DURATION);
    }
    token.push(']');
    token
}

/// Renders one voice line per tone.
///
/// Voice `i` (0-based) is padded with `i` rests and plays for
/// `CHORD_DURATION - i` units.
pub fn render_arpeggio(pitches: &[&str]) -> String {
    let mut block = String::new();
    for (i, pitch) in pitches.iter().enumerate() {
        let _ = write!(block, "[V:{}] ", i + 1);
        block.extend(std::iter::repeat(REST_FILLER).take(i));
        let _ = writeln!(block, "{}{}|", pitch, CHORD_DURATION - i);
    }
    block
}
