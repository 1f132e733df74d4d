//! Modes command implementation
//!
//! Lists the mode table with each mode's semitone offsets.

use anyhow::Result;
use colored::Colorize;
use miditools::Mode;
use serde::Serialize;
use std::process::ExitCode;

use crate::output::{bracketed, to_json};

#[derive(Debug, Serialize)]
pub struct ModeEntry {
    pub name: Mode,
    pub offsets: [i32; 7],
    pub diatonic: bool,
}

/// All modes in table order.
pub fn entries() -> Vec<ModeEntry> {
    Mode::ALL
        .iter()
        .map(|&mode| ModeEntry {
            name: mode,
            offsets: mode.offsets(),
            diatonic: mode.is_diatonic(),
        })
        .collect()
}

/// Run the modes command
///
/// # Returns
/// Exit code: always 0
pub fn run(json: bool) -> Result<ExitCode> {
    let entries = entries();

    if json {
        println!("{}", to_json(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Modes:".cyan().bold());
    for entry in &entries {
        let kind = if entry.diatonic { "" } else { " (non-diatonic)" };
        println!(
            "  {:<12}{}{}",
            entry.name.name(),
            bracketed(&entry.offsets),
            kind.dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_all_modes() {
        let entries = entries();
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[5].name, Mode::Aeolian);
        assert_eq!(entries[5].offsets, [0, 2, 3, 5, 7, 8, 10]);
        assert_eq!(entries.iter().filter(|e| e.diatonic).count(), 7);
    }
}
