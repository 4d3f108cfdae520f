//! Random note generator.

use melodyfinder_theory::pitch::SHARP_EXTENDED;
use rand_pcg::Pcg32;

use crate::rng::pick_index;

/// Pool of notes the generator draws from: three sharp-spelled octaves.
pub const NOTE_POOL: &[&str] = &SHARP_EXTENDED;

/// Draws one note token uniformly from [`NOTE_POOL`].
pub fn random_note(rng: &mut Pcg32) -> &'static str {
    NOTE_POOL[pick_index(rng, NOTE_POOL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_pool_is_three_octaves() {
        assert_eq!(NOTE_POOL.len(), 36);
        assert!(NOTE_POOL.iter().all(|t| !t.starts_with('_')));
    }

    #[test]
    fn test_random_note_in_pool() {
        let mut rng = create_rng(12);
        for _ in 0..1000 {
            assert!(NOTE_POOL.contains(&random_note(&mut rng)));
        }
    }

    #[test]
    fn test_random_note_covers_pool() {
        let mut rng = create_rng(99);
        let seen: HashSet<&str> = (0..5000).map(|_| random_note(&mut rng)).collect();
        assert_eq!(seen.len(), NOTE_POOL.len());
    }
}
