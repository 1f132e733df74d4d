//! Error types for scale and chord generation.

use thiserror::Error;

/// Errors returned by the strict resolver and the scale/chord generators.
///
/// The plain resolvers ([`crate::note::lowest_midi_note`] and
/// [`crate::note::midi_note`]) never fail; they report unknown names through
/// the `-1` sentinel and clamping instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("invalid pitch name '{name}' (expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B)")]
    InvalidPitchName { name: String },
    #[error("unknown mode '{name}'")]
    UnknownMode { name: String },
    #[error("unknown chord shape '{name}'")]
    UnknownChordShape { name: String },
    #[error("invalid note count {count} (must be 0 or greater)")]
    InvalidNoteCount { count: i32 },
}

impl TheoryError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::InvalidPitchName { .. } => "THEORY_001",
            TheoryError::UnknownMode { .. } => "THEORY_002",
            TheoryError::UnknownChordShape { .. } => "THEORY_003",
            TheoryError::InvalidNoteCount { .. } => "THEORY_004",
        }
    }

    /// Error category for reporting.
    pub fn category(&self) -> &'static str {
        "theory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            TheoryError::InvalidPitchName { name: "H".into() },
            TheoryError::UnknownMode { name: "bebop".into() },
            TheoryError::UnknownChordShape { name: "cluster".into() },
            TheoryError::InvalidNoteCount { count: -1 },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| e.category() == "theory"));
    }

    #[test]
    fn test_error_messages() {
        let err = TheoryError::UnknownMode {
            name: "bebop".into(),
        };
        assert_eq!(err.to_string(), "unknown mode 'bebop'");

        let err = TheoryError::InvalidNoteCount { count: -2 };
        assert_eq!(err.to_string(), "invalid note count -2 (must be 0 or greater)");
    }
}
