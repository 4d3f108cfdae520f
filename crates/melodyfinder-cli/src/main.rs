//! MelodyFinder CLI - Command-line interface for random music generation
//!
//! This binary prints scales and generates melodies, notes and chords as ABC
//! notation text, for pasting into any ABC renderer.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use melodyfinder_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scale { key, json } => commands::scale::run(&key, json),
        Commands::Melody {
            seed,
            config,
            output,
            json,
        } => commands::melody::run(seed, config.as_deref(), output.as_deref(), json),
        Commands::Note { seed, count, json } => commands::note::run(seed, count, json),
        Commands::Chord { seed, json } => commands::chord::run(seed, json),
        Commands::Keys { json } => commands::keys::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
