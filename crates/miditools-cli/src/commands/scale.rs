//! Scale command implementation

use anyhow::{Context, Result};
use miditools::generate_scale;
use serde::Serialize;
use std::process::ExitCode;

use crate::output::{bracketed, to_json};

/// JSON report for the scale command.
#[derive(Debug, Serialize)]
pub struct ScaleReport {
    pub root: String,
    pub octave: i32,
    pub mode: String,
    pub notes: Vec<i32>,
}

/// Run the scale command
///
/// # Arguments
/// * `root` - Root pitch name
/// * `octave` - Octave of the root
/// * `mode` - Mode name (e.g. "aeolian", "minor")
/// * `json` - Emit JSON instead of plain text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(root: &str, octave: i32, mode: &str, json: bool) -> Result<ExitCode> {
    let scale = generate_scale(root, octave, mode)
        .with_context(|| format!("Failed to build {} {} scale", root, mode))?;

    if json {
        let report = ScaleReport {
            root: root.to_string(),
            octave,
            mode: mode.to_string(),
            notes: scale.to_vec(),
        };
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", bracketed(&scale));
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_reports_context() {
        let err = run("A", 4, "bebop", false).unwrap_err();
        assert_eq!(err.to_string(), "Failed to build A bebop scale");
        assert_eq!(err.root_cause().to_string(), "unknown mode 'bebop'");
    }
}
