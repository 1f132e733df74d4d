//! Pitch name lookup.

use super::constants::{NOTE_NAMES, PITCH_NOT_FOUND};

/// Look up the pitch class (0-11) of a pitch name.
///
/// Names must match [`NOTE_NAMES`] exactly: uppercase, sharps only.
///
/// # Examples
/// ```
/// use miditools::note::pitch_class;
///
/// assert_eq!(pitch_class("C"), Some(0));
/// assert_eq!(pitch_class("A#"), Some(10));
/// assert_eq!(pitch_class("Bb"), None);
/// ```
pub fn pitch_class(name: &str) -> Option<u8> {
    NOTE_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as u8)
}

/// Given a pitch name, e.g. "C#", return the lowest MIDI note with that
/// pitch (its index in octave -1), or [`PITCH_NOT_FOUND`] if the name is
/// invalid.
///
/// # Examples
/// ```
/// use miditools::note::{lowest_midi_note, PITCH_NOT_FOUND};
///
/// assert_eq!(lowest_midi_note("C#"), 1);
/// assert_eq!(lowest_midi_note("B"), 11);
/// assert_eq!(lowest_midi_note("H"), PITCH_NOT_FOUND);
/// ```
pub fn lowest_midi_note(name: &str) -> i32 {
    pitch_class(name)
        .map(i32::from)
        .unwrap_or(PITCH_NOT_FOUND)
}
