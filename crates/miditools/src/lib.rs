//! miditools - Music Theory to MIDI Note Numbers
//!
//! This crate turns note names, octave numbers and mode names into MIDI note
//! numbers, and builds scales and stacked-third chords from them.
//!
//! Octave designations use scientific pitch notation with the MIDI standard
//! and equal temperament throughout: C4 is middle C, MIDI note 60. Some hosts
//! (Ableton, for one) call the same note C3.
//!
//! # Example
//!
//! ```
//! use miditools::{generate_chord, generate_scale, midi_note};
//!
//! assert_eq!(midi_note("C", 4), 60);
//!
//! let scale = generate_scale("A", 4, "aeolian")?;
//! assert_eq!(scale, [69, 71, 72, 74, 76, 77, 79]);
//!
//! let chord = generate_chord("A", 4, "aeolian", 3)?;
//! assert_eq!(chord, vec![69, 72, 76]);
//! # Ok::<(), miditools::TheoryError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: Pitch name table and the clamping MIDI note resolver
//! - [`mode`]: Mode table (ionian through melodic minor)
//! - [`scale`]: Scale generation from a root and a mode
//! - [`chord`]: Chord shape table and chord generation
//! - [`error`]: Error types for the fallible entry points

pub mod chord;
pub mod error;
pub mod mode;
pub mod note;
pub mod scale;

// Re-export main types
pub use chord::{
    generate_chord, generate_chord_with_shape, Chord, ChordShape, DEFAULT_CHORD_SIZE,
};
pub use error::TheoryError;
pub use mode::{Mode, DEFAULT_MODE, MODE_NAMES};
pub use note::{
    lowest_midi_note, midi_note, pitch_class, try_midi_note, DEFAULT_OCTAVE, DEFAULT_ROOT,
    MIDI_NOTE_MAX, MIDI_NOTE_MIN, NOTE_NAMES, PITCH_NOT_FOUND,
};
pub use scale::{generate_scale, Scale};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
