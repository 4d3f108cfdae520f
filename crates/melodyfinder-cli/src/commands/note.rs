//! Note command implementation

use anyhow::Result;
use colored::Colorize;
use melodyfinder_backend::Generator;
use melodyfinder_theory::{display_name, Octave};
use serde::Serialize;
use std::process::ExitCode;

use super::json_output::{print_json, CommandOutput};
use super::resolve_seed;

/// One drawn note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteOutput {
    /// ABC token (e.g. "^c")
    pub token: &'static str,
    /// Display name (e.g. "C#")
    pub name: String,
    pub octave: Octave,
}

/// Draws `count` notes from a generator seeded with `seed`.
pub fn generate(seed: u32, count: usize) -> Vec<NoteOutput> {
    let mut generator = Generator::new(seed);
    (0..count)
        .map(|_| {
            let token = generator.note();
            NoteOutput {
                token,
                name: display_name(token),
                octave: Octave::of(token),
            }
        })
        .collect()
}

/// Run the note command
pub fn run(seed: Option<u32>, count: usize, json: bool) -> Result<ExitCode> {
    let seed = resolve_seed(seed);
    let notes = generate(seed, count);

    if json {
        print_json(&CommandOutput::success(Some(seed), notes))?;
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!("{} seed {}", "Note:".cyan().bold(), seed);
    for note in &notes {
        println!("{}\t{}", note.token, note.name.dimmed());
    }
    Ok(ExitCode::SUCCESS)
}
