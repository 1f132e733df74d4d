//! Shared output formatting for CLI commands.

use anyhow::{Context, Result};
use serde::Serialize;

/// Format notes as bracketed, space-separated integers, e.g. `[69 72 76]`.
pub fn bracketed(notes: &[i32]) -> String {
    let inner: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
    format!("[{}]", inner.join(" "))
}

/// Serialize a report as pretty JSON.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize JSON output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed(&[69, 72, 76]), "[69 72 76]");
        assert_eq!(bracketed(&[60]), "[60]");
        assert_eq!(bracketed(&[]), "[]");
    }

    #[test]
    fn test_to_json() {
        #[derive(Serialize)]
        struct Report {
            notes: Vec<i32>,
        }
        let json = to_json(&Report { notes: vec![1, 2] }).unwrap();
        assert!(json.contains("\"notes\""));
    }
}
