//! Demo command implementation
//!
//! Prints the A minor scale and triad in bracketed form. Runs when no
//! subcommand is given.

use anyhow::Result;
use miditools::{generate_chord, generate_scale};
use std::process::ExitCode;

use crate::output::bracketed;

/// Build the demo lines without printing them.
pub fn render() -> Result<Vec<String>> {
    let scale = generate_scale("A", 4, "aeolian")?;
    let chord = generate_chord("A", 4, "aeolian", 3)?;
    Ok(vec![
        format!("The A minor scale: {}", bracketed(&scale)),
        format!("The A minor chord: {}", bracketed(&chord)),
    ])
}

/// Run the demo command
///
/// # Returns
/// Exit code: always 0
pub fn run() -> Result<ExitCode> {
    for line in render()? {
        println!("{}", line);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_output() {
        assert_eq!(
            render().unwrap(),
            vec![
                "The A minor scale: [69 71 72 74 76 77 79]".to_string(),
                "The A minor chord: [69 72 76]".to_string(),
            ]
        );
    }
}
