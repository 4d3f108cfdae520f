//! Chord qualities, inversions and their step tables.
//!
//! A step table lists absolute semitone steps accumulated from the chord
//! root's position in a three-octave row. Root-position tables start with a
//! 0 step so the root itself is the lowest tone; inversion tables start from
//! the third or fifth and climb past the octave.

use serde::Serialize;

const MAJ_ROOT: &[usize] = &[0, 4, 3];
const MAJ_FIRST: &[usize] = &[4, 3, 5];
const MAJ_SECOND: &[usize] = &[7, 5, 4];
const MIN_ROOT: &[usize] = &[0, 3, 4];
const MIN_FIRST: &[usize] = &[3, 4, 5];
const MIN_SECOND: &[usize] = &[7, 5, 3];
const DOM7: &[usize] = &[0, 4, 3, 3];
const MIN7: &[usize] = &[0, 3, 4, 3];
const MAJ7: &[usize] = &[0, 4, 3, 4];
const DIM: &[usize] = &[0, 3, 3];

const ALL_TABLES: [&[usize]; 10] = [
    MAJ_ROOT, MAJ_FIRST, MAJ_SECOND, MIN_ROOT, MIN_FIRST, MIN_SECOND, DOM7, MIN7, MAJ7, DIM,
];

/// Largest number of tones any table produces.
pub const MAX_TONES: usize = 4;

/// Furthest position any step table reaches above the root.
pub const MAX_REACH: usize = max_reach(&ALL_TABLES);

/// Number of trailing row positions a chord root may not start on.
pub const ROOT_HEADROOM: usize = MAX_REACH + 1;

const fn max_reach(tables: &[&[usize]]) -> usize {
    let mut best = 0;
    let mut i = 0;
    while i < tables.len() {
        let table = tables[i];
        let mut reach = 0;
        let mut j = 0;
        while j < table.len() {
            reach += table[j];
            j += 1;
        }
        if reach > best {
            best = reach;
        }
        i += 1;
    }
    best
}

/// Chord quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Dominant7,
    Minor7,
    Major7,
    Diminished,
}

impl ChordQuality {
    /// All qualities, in weighted-draw order.
    pub const ALL: [ChordQuality; 6] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Dominant7,
        ChordQuality::Minor7,
        ChordQuality::Major7,
        ChordQuality::Diminished,
    ];

    /// Short tag (e.g. "maj", "dim").
    pub fn tag(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
            ChordQuality::Dominant7 => "dom7",
            ChordQuality::Minor7 => "min7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Diminished => "dim",
        }
    }

    /// Relative draw weight.
    pub fn weight(self) -> u32 {
        match self {
            ChordQuality::Major => 6,
            ChordQuality::Minor => 5,
            ChordQuality::Dominant7 => 3,
            ChordQuality::Minor7 | ChordQuality::Major7 | ChordQuality::Diminished => 1,
        }
    }

    /// Sum of all weights.
    pub fn total_weight() -> u32 {
        Self::ALL.iter().map(|q| q.weight()).sum()
    }

    /// Picks the quality a roll in `[0, total_weight())` lands on.
    pub fn from_roll(roll: u32) -> Self {
        let mut roll = roll;
        for quality in Self::ALL {
            if roll < quality.weight() {
                return quality;
            }
            roll -= quality.weight();
        }
        ChordQuality::Diminished
    }

    /// Whether inversions are drawn for this quality.
    pub fn has_inversions(self) -> bool {
        matches!(self, ChordQuality::Major | ChordQuality::Minor)
    }

    /// Step table for this quality voiced with `inversion`.
    ///
    /// Qualities without inversions always use their root-position table.
    pub fn steps(self, inversion: Inversion) -> &'static [usize] {
        match (self, inversion) {
            (ChordQuality::Major, Inversion::Root) => MAJ_ROOT,
            (ChordQuality::Major, Inversion::First) => MAJ_FIRST,
            (ChordQuality::Major, Inversion::Second) => MAJ_SECOND,
            (ChordQuality::Minor, Inversion::Root) => MIN_ROOT,
            (ChordQuality::Minor, Inversion::First) => MIN_FIRST,
            (ChordQuality::Minor, Inversion::Second) => MIN_SECOND,
            (ChordQuality::Dominant7, _) => DOM7,
            (ChordQuality::Minor7, _) => MIN7,
            (ChordQuality::Major7, _) => MAJ7,
            (ChordQuality::Diminished, _) => DIM,
        }
    }

    /// Absolute offsets above the root for this voicing.
    pub fn offsets(self, inversion: Inversion) -> Vec<usize> {
        self.steps(inversion)
            .iter()
            .scan(0, |acc, step| {
                *acc += step;
                Some(*acc)
            })
            .collect()
    }
}

impl std::fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Chord inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inversion {
    Root,
    First,
    Second,
}

impl Inversion {
    pub const ALL: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

    /// Index (0, 1 or 2).
    pub fn index(self) -> u8 {
        match self {
            Inversion::Root => 0,
            Inversion::First => 1,
            Inversion::Second => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weights_total_seventeen() {
        assert_eq!(ChordQuality::total_weight(), 17);
    }

    #[test]
    fn test_from_roll_matches_weight_ranges() {
        let counts: Vec<usize> = ChordQuality::ALL
            .iter()
            .map(|q| {
                (0..ChordQuality::total_weight())
                    .filter(|roll| ChordQuality::from_roll(*roll) == *q)
                    .count()
            })
            .collect();
        assert_eq!(counts, vec![6, 5, 3, 1, 1, 1]);
    }

    #[test]
    fn test_max_reach_is_derived_from_tables() {
        assert_eq!(MAX_REACH, 16);
        assert_eq!(ROOT_HEADROOM, 17);
        for quality in ChordQuality::ALL {
            for inversion in Inversion::ALL {
                let reach = *quality.offsets(inversion).last().unwrap();
                assert!(reach <= MAX_REACH);
            }
        }
    }

    #[test]
    fn test_root_position_tables() {
        assert_eq!(ChordQuality::Major.offsets(Inversion::Root), vec![0, 4, 7]);
        assert_eq!(ChordQuality::Minor.offsets(Inversion::Root), vec![0, 3, 7]);
        assert_eq!(ChordQuality::Dominant7.steps(Inversion::Root), &[0, 4, 3, 3]);
        assert_eq!(ChordQuality::Minor7.steps(Inversion::Root), &[0, 3, 4, 3]);
        assert_eq!(ChordQuality::Major7.steps(Inversion::Root), &[0, 4, 3, 4]);
        assert_eq!(ChordQuality::Diminished.steps(Inversion::Root), &[0, 3, 3]);
    }

    #[test]
    fn test_inversions_reorder_the_same_pitch_classes() {
        for quality in [ChordQuality::Major, ChordQuality::Minor] {
            let mut root: Vec<usize> = quality
                .offsets(Inversion::Root)
                .iter()
                .map(|o| o % 12)
                .collect();
            root.sort();
            for inversion in [Inversion::First, Inversion::Second] {
                assert_ne!(quality.steps(inversion)[0], 0);
                let mut classes: Vec<usize> =
                    quality.offsets(inversion).iter().map(|o| o % 12).collect();
                classes.sort();
                assert_eq!(classes, root, "{:?} {:?}", quality, inversion);
            }
        }
    }

    #[test]
    fn test_non_invertible_qualities_ignore_inversion() {
        for quality in ChordQuality::ALL.into_iter().filter(|q| !q.has_inversions()) {
            assert_eq!(quality.steps(Inversion::Second), quality.steps(Inversion::Root));
        }
    }

    #[test]
    fn test_tables_fit_max_tones() {
        assert!(ALL_TABLES.iter().all(|t| t.len() <= MAX_TONES));
    }

    #[test]
    fn test_tags() {
        let tags: Vec<&str> = ChordQuality::ALL.iter().map(|q| q.tag()).collect();
        assert_eq!(tags, vec!["maj", "min", "dom7", "min7", "maj7", "dim"]);
        assert_eq!(Inversion::Second.index(), 2);
    }
}
