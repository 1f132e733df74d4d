//! Note command implementation
//!
//! Resolves a pitch name and octave to a MIDI note number.

use anyhow::Result;
use colored::Colorize;
use miditools::note::midi_note_to_name;
use miditools::{midi_note, pitch_class, try_midi_note};
use serde::Serialize;
use std::process::ExitCode;

use crate::output::to_json;

/// JSON report for the note command.
#[derive(Debug, Serialize)]
pub struct NoteReport {
    pub name: String,
    pub octave: i32,
    pub midi: u8,
    /// Scientific pitch name of the resolved note (after clamping).
    pub resolved: String,
    /// Whether `name` was a known pitch name.
    pub valid: bool,
}

/// Resolve a note into a report.
///
/// Unknown names clamp unless `strict` is set, in which case they fail.
pub fn resolve(name: &str, octave: i32, strict: bool) -> Result<NoteReport> {
    let midi = if strict {
        try_midi_note(name, octave)?
    } else {
        midi_note(name, octave)
    };
    Ok(NoteReport {
        name: name.to_string(),
        octave,
        midi,
        resolved: midi_note_to_name(midi),
        valid: pitch_class(name).is_some(),
    })
}

/// Run the note command
///
/// # Arguments
/// * `name` - Pitch name (e.g. "C#")
/// * `octave` - Octave in scientific pitch notation
/// * `strict` - Reject unknown pitch names instead of clamping
/// * `json` - Emit JSON instead of plain text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(name: &str, octave: i32, strict: bool, json: bool) -> Result<ExitCode> {
    let report = resolve(name, octave, strict)?;

    if json {
        println!("{}", to_json(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    if !report.valid {
        eprintln!(
            "{} unknown pitch name '{}', result is clamped",
            "warning:".yellow().bold(),
            name
        );
    }
    println!("{}", report.midi);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let report = resolve("C", 4, false).unwrap();
        assert_eq!(report.midi, 60);
        assert_eq!(report.resolved, "C4");
        assert!(report.valid);
    }

    #[test]
    fn test_resolve_unknown_name_clamps() {
        let report = resolve("H", -1, false).unwrap();
        assert_eq!(report.midi, 0);
        assert!(!report.valid);
    }

    #[test]
    fn test_resolve_strict_rejects_unknown_name() {
        let err = resolve("H", 4, true).unwrap_err();
        assert!(err.to_string().contains("invalid pitch name 'H'"));
    }
}
