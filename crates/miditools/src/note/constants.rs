//! Constants for pitch name lookup and MIDI note resolution.

/// The 12 pitch names from C through B, uppercase with sharps.
///
/// A name's position in the table is its semitone index above C.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Sentinel returned by [`super::lowest_midi_note`] for an unknown name.
pub const PITCH_NOT_FOUND: i32 = -1;

/// Lowest valid MIDI note (C-1).
pub const MIDI_NOTE_MIN: u8 = 0;

/// Highest valid MIDI note (G9).
pub const MIDI_NOTE_MAX: u8 = 127;

/// Semitones in one octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Default root pitch name.
pub const DEFAULT_ROOT: &str = "C";

/// Default octave (the middle octave, so C4 = MIDI 60).
pub const DEFAULT_OCTAVE: i32 = 4;
