//! Mode (scale pattern) table.
//!
//! Each mode is a 7-note pattern of semitone offsets from its root. The seven
//! diatonic modes are followed by two non-diatonic heptatonic scales
//! (harmonic minor and ascending melodic minor).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Semitone offsets from the root to each of the 7 scale degrees.
pub type ModeOffsets = [i32; 7];

/// A named mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Major. W-W-H-W-W-W-H
    Ionian,
    /// W-H-W-W-W-H-W
    Dorian,
    /// H-W-W-W-H-W-W
    Phrygian,
    /// W-W-W-H-W-W-H
    Lydian,
    /// W-W-H-W-W-H-W
    Mixolydian,
    /// Natural minor. W-H-W-W-H-W-W
    Aeolian,
    /// H-W-W-H-W-W-W
    Locrian,
    /// Harmonic minor (aeolian with a raised 7th). W-H-W-W-H-Aug2nd-H
    Harmonic,
    /// Ascending melodic minor, aka jazz minor (ionian with a flat 3rd). W-H-W-W-W-W-H
    Melodic,
}

/// Mode names in table order.
pub const MODE_NAMES: [&str; 9] = [
    "ionian",
    "dorian",
    "phrygian",
    "lydian",
    "mixolydian",
    "aeolian",
    "locrian",
    "harmonic",
    "melodic",
];

/// Alternative names accepted by [`Mode::from_name`].
const MODE_ALIASES: [(&str, Mode); 3] = [
    ("major", Mode::Ionian),
    ("minor", Mode::Aeolian),
    ("jazz", Mode::Melodic),
];

/// Mode used when none is given.
pub const DEFAULT_MODE: Mode = Mode::Ionian;

impl Mode {
    /// All modes, in the same order as [`MODE_NAMES`].
    pub const ALL: [Mode; 9] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
        Mode::Harmonic,
        Mode::Melodic,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        MODE_NAMES[self as usize]
    }

    /// Semitone offsets of the 7 degrees from the root.
    pub fn offsets(self) -> ModeOffsets {
        match self {
            Mode::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            Mode::Locrian => [0, 1, 3, 5, 6, 8, 10],
            Mode::Harmonic => [0, 2, 3, 5, 7, 8, 11],
            Mode::Melodic => [0, 2, 3, 5, 7, 9, 11],
        }
    }

    /// Look up a mode by canonical name or alias (`major`, `minor`, `jazz`).
    ///
    /// # Examples
    /// ```
    /// use miditools::Mode;
    ///
    /// assert_eq!(Mode::from_name("aeolian").unwrap(), Mode::Aeolian);
    /// assert_eq!(Mode::from_name("minor").unwrap(), Mode::Aeolian);
    /// assert!(Mode::from_name("bebop").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Mode, TheoryError> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .or_else(|| {
                MODE_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|(_, m)| *m)
            })
            .ok_or_else(|| TheoryError::UnknownMode {
                name: name.to_string(),
            })
    }

    /// Whether the mode is one of the seven rotations of the major scale.
    pub fn is_diatonic(self) -> bool {
        !matches!(self, Mode::Harmonic | Mode::Melodic)
    }

    /// Build a 7-note scale on an already-resolved root MIDI note.
    pub fn scale(self, root: i32) -> [i32; 7] {
        self.offsets().map(|offset| root + offset)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s)
    }
}
