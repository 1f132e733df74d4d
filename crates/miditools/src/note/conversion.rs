//! Pitch name plus octave to MIDI note conversion.

use super::constants::{MIDI_NOTE_MAX, MIDI_NOTE_MIN, NOTE_NAMES, SEMITONES_PER_OCTAVE};
use super::pitch::{lowest_midi_note, pitch_class};
use crate::error::TheoryError;

/// Clamp a raw note value into the MIDI range.
fn clamp_midi(note: i64) -> u8 {
    note.clamp(MIDI_NOTE_MIN as i64, MIDI_NOTE_MAX as i64) as u8
}

/// Raw, unclamped note value. Computed in `i64` so any `i32` octave is safe.
fn raw_note(index: i32, octave: i32) -> i64 {
    index as i64 + (octave as i64 + 1) * SEMITONES_PER_OCTAVE as i64
}

/// Given a pitch name, e.g. "C#", and an octave, e.g. `4`, return the MIDI
/// note number.
///
/// This never fails. An unknown name counts as index -1, and the result is
/// clamped to 0 (C-1) at the bottom and 127 (G9) at the top. Use
/// [`try_midi_note`] to reject unknown names instead.
///
/// # Examples
/// ```
/// use miditools::note::midi_note;
///
/// assert_eq!(midi_note("C", 4), 60);  // Middle C
/// assert_eq!(midi_note("A", 4), 69);  // A440
/// assert_eq!(midi_note("C", -1), 0);
/// assert_eq!(midi_note("B", 12), 127); // Clamped
/// assert_eq!(midi_note("H", 4), 59);   // Unknown name counts as -1
/// ```
pub fn midi_note(name: &str, octave: i32) -> u8 {
    clamp_midi(raw_note(lowest_midi_note(name), octave))
}

/// Strict form of [`midi_note`]: unknown pitch names are an error.
///
/// Out-of-range octaves still clamp.
///
/// # Examples
/// ```
/// use miditools::note::try_midi_note;
///
/// assert_eq!(try_midi_note("G", 9).unwrap(), 127);
/// assert!(try_midi_note("Gb", 4).is_err());
/// ```
pub fn try_midi_note(name: &str, octave: i32) -> Result<u8, TheoryError> {
    let index = pitch_class(name).ok_or_else(|| TheoryError::InvalidPitchName {
        name: name.to_string(),
    })?;
    Ok(clamp_midi(raw_note(index as i32, octave)))
}

/// Name a MIDI note in scientific pitch notation (e.g. 60 -> "C4").
///
/// Values above 127 are clamped first.
///
/// # Examples
/// ```
/// use miditools::note::midi_note_to_name;
///
/// assert_eq!(midi_note_to_name(60), "C4");
/// assert_eq!(midi_note_to_name(0), "C-1");
/// assert_eq!(midi_note_to_name(127), "G9");
/// ```
pub fn midi_note_to_name(note: u8) -> String {
    let note = note.min(MIDI_NOTE_MAX) as i32;
    let octave = note / SEMITONES_PER_OCTAVE - 1;
    let semitone = note % SEMITONES_PER_OCTAVE;
    format!("{}{}", NOTE_NAMES[semitone as usize], octave)
}
