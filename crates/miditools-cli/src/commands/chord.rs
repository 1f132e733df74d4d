//! Chord command implementation

use anyhow::{Context, Result};
use miditools::{generate_chord_with_shape, ChordShape};
use serde::Serialize;
use std::process::ExitCode;

use crate::output::{bracketed, to_json};

/// JSON report for the chord command.
#[derive(Debug, Serialize)]
pub struct ChordReport {
    pub root: String,
    pub octave: i32,
    pub mode: String,
    pub shape: ChordShape,
    pub notes: Vec<i32>,
}

/// Run the chord command
///
/// # Arguments
/// * `root` - Root pitch name
/// * `octave` - Octave of the root
/// * `mode` - Mode name
/// * `shape` - Chord shape name (e.g. "triad")
/// * `count` - Number of chord tones
/// * `json` - Emit JSON instead of plain text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    root: &str,
    octave: i32,
    mode: &str,
    shape: &str,
    count: i32,
    json: bool,
) -> Result<ExitCode> {
    let shape = ChordShape::from_name(shape)?;
    let chord = generate_chord_with_shape(root, octave, mode, shape, count)
        .with_context(|| format!("Failed to build {} {} {}", root, mode, shape))?;

    if json {
        let report = ChordReport {
            root: root.to_string(),
            octave,
            mode: mode.to_string(),
            shape,
            notes: chord,
        };
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", bracketed(&chord));
    }

    Ok(ExitCode::SUCCESS)
}
