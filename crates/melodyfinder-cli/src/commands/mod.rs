//! Command implementations for the MelodyFinder CLI

pub mod chord;
pub mod json_output;
pub mod keys;
pub mod melody;
pub mod note;
pub mod scale;

/// Uses the given seed, or draws one so the run can be reproduced later.
pub fn resolve_seed(seed: Option<u32>) -> u32 {
    seed.unwrap_or_else(rand::random)
}
