//! Chord command implementation

use anyhow::Result;
use colored::Colorize;
use melodyfinder_backend::{Chord, Generator};
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::{print_json, CommandOutput};
use super::resolve_seed;

/// Chord command result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordOutput {
    /// Chord symbol, e.g. "Bb min"
    pub symbol: String,
    /// Quality tag, e.g. "min"
    pub tag: &'static str,
    /// Inversion index (0, 1 or 2)
    pub inversion_index: u8,
    pub chord: Chord,
}

/// Draws one chord from a generator seeded with `seed`.
pub fn generate(seed: u32) -> ChordOutput {
    let chord = Generator::new(seed).chord();
    ChordOutput {
        symbol: format!("{} {}", chord.root, chord.quality.tag()),
        tag: chord.quality.tag(),
        inversion_index: chord.inversion.index(),
        chord,
    }
}

/// Run the chord command
pub fn run(seed: Option<u32>, json: bool) -> Result<ExitCode> {
    let seed = resolve_seed(seed);
    let output = generate(seed);

    if json {
        print_json(&CommandOutput::success(Some(seed), output))?;
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!("{} seed {}", "Chord:".cyan().bold(), seed);
    println!(
        "{} (inversion {})",
        output.symbol.bold(),
        output.inversion_index
    );
    println!("{}", output.chord.token);
    print!("{}", output.chord.arpeggio);
    Ok(ExitCode::SUCCESS)
}
