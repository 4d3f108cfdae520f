//! MelodyFinder CLI library.
//!
//! This crate provides the command implementations behind the `melodyfinder`
//! binary: scale lookup and melody, note and chord generation, each with a
//! colored text rendering and a `--json` rendering.

pub mod commands;
