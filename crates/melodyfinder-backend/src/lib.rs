//! MelodyFinder Backend - Seeded Melody, Note and Chord Generation
//!
//! This crate produces random musical artifacts as ABC notation text: complete
//! melody documents, single note tokens, and chords with a multi-voice
//! arpeggio rendering. The theory tables live in `melodyfinder-theory`.
//!
//! # Determinism
//!
//! Given the same seed, a [`Generator`] produces the same sequence of outputs.
//! Each component (melody, note, chord) owns a PCG32 stream seeded from a
//! BLAKE3 derivation of the base seed, so calls to one component never shift
//! another component's output.
//!
//! # Example
//!
//! ```
//! use melodyfinder_backend::Generator;
//!
//! let mut generator = Generator::new(42);
//! let abc = generator.melody_abc();
//! assert!(abc.starts_with("X:1\n"));
//! assert!(abc.ends_with("||"));
//!
//! let chord = generator.chord();
//! assert_eq!(chord.arpeggio.lines().count(), chord.pitches.len());
//! ```
//!
//! # Module Structure
//!
//! - [`generator`]: The seeded [`Generator`] facade
//! - [`melody`]: Melody generation and ABC document rendering
//! - [`note`]: Random note generation
//! - [`chord`]: Chord generation, chord token and arpeggio rendering
//! - [`config`]: Melody parameters
//! - [`rng`]: Deterministic RNG construction

pub mod chord;
pub mod config;
pub mod generator;
pub mod melody;
pub mod note;
pub mod rng;

// Re-export main types
pub use chord::{build_chord, generate_chord, Chord};
pub use config::{ConfigError, MelodyConfig};
pub use generator::Generator;
pub use melody::{
    generate_melody, generate_melody_abc, generate_melody_abc_in_key, generate_melody_in_key,
    Duration, Melody, MelodyNote,
};
pub use note::{random_note, NOTE_POOL};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier.
pub const BACKEND_ID: &str = "melodyfinder-backend";
