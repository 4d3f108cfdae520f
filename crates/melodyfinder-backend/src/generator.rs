//! The generator: one seeded instance owning a random stream per component.
//!
//! A `Generator` is not shared between threads; give each caller its own
//! instance (seeds can be derived per caller).

use melodyfinder_theory::{get_scale, try_scale, Scale, TheoryError};
use rand_pcg::Pcg32;

use crate::chord::{generate_chord, Chord};
use crate::config::{ConfigError, MelodyConfig};
use crate::melody::{generate_melody, generate_melody_in_key, render_or_empty, Melody};
use crate::note::random_note;
use crate::rng::{create_component_rng, CHORD_COMPONENT, MELODY_COMPONENT, NOTE_COMPONENT};

/// Seeded melody, note and chord generator.
#[derive(Debug, Clone)]
pub struct Generator {
    seed: u32,
    config: MelodyConfig,
    melody_rng: Pcg32,
    note_rng: Pcg32,
    chord_rng: Pcg32,
}

impl Generator {
    /// Creates a generator with the default melody parameters.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            config: MelodyConfig::default(),
            melody_rng: create_component_rng(seed, MELODY_COMPONENT),
            note_rng: create_component_rng(seed, NOTE_COMPONENT),
            chord_rng: create_component_rng(seed, CHORD_COMPONENT),
        }
    }

    /// Creates a generator with custom melody parameters.
    pub fn with_config(seed: u32, config: MelodyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(seed)
        })
    }

    /// Base seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn config(&self) -> &MelodyConfig {
        &self.config
    }

    /// Scale letters for a key token; empty if the root is unknown.
    pub fn scale(&self, key: &str) -> Vec<&'static str> {
        get_scale(key)
    }

    /// Scale for a key token with a typed error.
    pub fn try_scale(&self, key: &str) -> Result<Scale, TheoryError> {
        try_scale(key)
    }

    /// Next melody in a random supported key.
    pub fn melody(&mut self) -> Option<Melody> {
        generate_melody(&mut self.melody_rng, &self.config)
    }

    /// Next melody in a given key token.
    pub fn melody_in_key(&mut self, key: &str) -> Option<Melody> {
        generate_melody_in_key(&mut self.melody_rng, key, &self.config)
    }

    /// Next melody as an ABC document; empty if generation failed.
    pub fn melody_abc(&mut self) -> String {
        render_or_empty(self.melody())
    }

    /// Next melody in a given key as an ABC document; empty for an unknown key.
    pub fn melody_abc_in_key(&mut self, key: &str) -> String {
        render_or_empty(self.melody_in_key(key))
    }

    /// Next random note token.
    pub fn note(&mut self) -> &'static str {
        random_note(&mut self.note_rng)
    }

    /// Next random chord.
    pub fn chord(&mut self) -> Chord {
        generate_chord(&mut self.chord_rng)
    }
}
