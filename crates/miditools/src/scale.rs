//! Scale generation.

use crate::error::TheoryError;
use crate::mode::Mode;
use crate::note::midi_note;

/// A scale: 7 MIDI note numbers in ascending degree order.
pub type Scale = [i32; 7];

/// Number of degrees in every scale.
pub const SCALE_DEGREES: usize = 7;

/// Given a root pitch name, an octave and a mode name, return the scale as 7
/// MIDI note numbers.
///
/// The root goes through [`midi_note`], so an unknown root name clamps
/// rather than failing. An unknown mode name is an error.
///
/// # Examples
/// ```
/// use miditools::generate_scale;
///
/// assert_eq!(generate_scale("A", 4, "aeolian")?, [69, 71, 72, 74, 76, 77, 79]);
/// assert_eq!(generate_scale("C", 4, "major")?, [60, 62, 64, 65, 67, 69, 71]);
/// assert!(generate_scale("C", 4, "bebop").is_err());
/// # Ok::<(), miditools::TheoryError>(())
/// ```
pub fn generate_scale(root: &str, octave: i32, mode: &str) -> Result<Scale, TheoryError> {
    let mode = Mode::from_name(mode)?;
    let root_note = midi_note(root, octave) as i32;
    Ok(mode.scale(root_note))
}
