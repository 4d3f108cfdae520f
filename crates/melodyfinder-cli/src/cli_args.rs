//! CLI argument definitions for the MelodyFinder command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// MelodyFinder - Random scales, melodies, notes and chords in ABC notation
#[derive(Parser)]
#[command(name = "melodyfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the scale for a key token (e.g. C, Am, _B, ^Fm)
    Scale {
        /// Key token: optional ^/_ marker, root letter, optional trailing m
        key: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a random melody as an ABC document
    Melody {
        /// Seed for deterministic output (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Path to a JSON melody config file
        #[arg(short, long)]
        config: Option<String>,

        /// Write the ABC document to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a random note token
    Note {
        /// Seed for deterministic output (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Number of notes to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a random chord with its arpeggio rendering
    Chord {
        /// Seed for deterministic output (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the keys melodies are drawn from
    Keys {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
