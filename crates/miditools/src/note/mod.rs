//! Pitch names and MIDI note resolution.
//!
//! This module maps the 12 chromatic pitch names plus an octave number onto
//! MIDI note numbers, clamped to the valid MIDI range.

mod constants;
mod conversion;
mod pitch;


pub use constants::{
    DEFAULT_OCTAVE, DEFAULT_ROOT, MIDI_NOTE_MAX, MIDI_NOTE_MIN, NOTE_NAMES, PITCH_NOT_FOUND,
    SEMITONES_PER_OCTAVE,
};

pub use conversion::{midi_note, midi_note_to_name, try_midi_note};

pub use pitch::{lowest_midi_note, pitch_class};
