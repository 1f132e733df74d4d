//! Chord shapes and chord generation.
//!
//! A chord shape lists the scale degrees stacked to form the base chord.
//! Asking for more notes than the shape has repeats the shape an octave
//! higher (7 scale degrees up) for each further repetition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::SEMITONES_PER_OCTAVE;
use crate::scale::{generate_scale, Scale, SCALE_DEGREES};

/// A chord: MIDI note numbers from the bottom up.
pub type Chord = Vec<i32>;

/// Number of notes in the default chord (a plain triad).
pub const DEFAULT_CHORD_SIZE: i32 = 3;

/// A named chord shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordShape {
    /// Root, third, fifth.
    Triad,
    /// Triad plus the seventh.
    Seventh,
    /// Seventh chord plus the ninth.
    Ninth,
}

/// Shape table: name and scale degrees (0-based) for each shape.
const CHORD_SHAPES: [(ChordShape, &str, &[i32]); 3] = [
    (ChordShape::Triad, "triad", &[0, 2, 4]),
    (ChordShape::Seventh, "seventh", &[0, 2, 4, 6]),
    (ChordShape::Ninth, "ninth", &[0, 2, 4, 6, 8]),
];

impl ChordShape {
    /// All shapes, in table order.
    pub const ALL: [ChordShape; 3] = [ChordShape::Triad, ChordShape::Seventh, ChordShape::Ninth];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        CHORD_SHAPES[self as usize].1
    }

    /// Scale degrees stacked by this shape.
    pub fn degrees(self) -> &'static [i32] {
        CHORD_SHAPES[self as usize].2
    }

    /// Look up a chord shape by name.
    pub fn from_name(name: &str) -> Result<ChordShape, TheoryError> {
        CHORD_SHAPES
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(shape, _, _)| *shape)
            .ok_or_else(|| TheoryError::UnknownChordShape {
                name: name.to_string(),
            })
    }

    /// Scale degree of the `step`th chord tone.
    ///
    /// Walks the shape repeatedly; each full repetition is shifted up by
    /// one octave's worth of scale degrees. Saturates at `i64::MAX`.
    pub fn degree_at(self, step: usize) -> i64 {
        let degrees = self.degrees();
        let repetition = i64::try_from(step / degrees.len()).unwrap_or(i64::MAX);
        (SCALE_DEGREES as i64)
            .saturating_mul(repetition)
            .saturating_add(degrees[step % degrees.len()] as i64)
    }

    /// Build `count` chord tones from an already-generated scale.
    pub fn voice(self, scale: &Scale, count: usize) -> Chord {
        (0..count)
            .map(|step| note_for_degree(scale, self.degree_at(step)))
            .collect()
    }
}

impl fmt::Display for ChordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordShape {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChordShape::from_name(s)
    }
}

/// MIDI note of a scale degree, wrapping degrees outside 0..7 into other
/// octaves. Notes beyond the `i32` range saturate.
fn note_for_degree(scale: &Scale, degree: i64) -> i32 {
    let len = SCALE_DEGREES as i64;
    let octave_offset = degree.div_euclid(len);
    let index = degree.rem_euclid(len) as usize;
    let note = (SEMITONES_PER_OCTAVE as i64)
        .saturating_mul(octave_offset)
        .saturating_add(scale[index] as i64);
    note.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Given a root pitch name, an octave, a mode name and a number of notes,
/// return a triad-based chord as MIDI note numbers.
///
/// Three notes give the triad itself; more notes stack further triads an
/// octave up each time. Zero notes give an empty chord, and a negative count
/// is an error.
///
/// # Examples
/// ```
/// use miditools::generate_chord;
///
/// assert_eq!(generate_chord("A", 4, "aeolian", 3)?, vec![69, 72, 76]);
/// assert_eq!(generate_chord("C", 4, "ionian", 5)?, vec![60, 64, 67, 72, 76]);
/// assert!(generate_chord("A", 4, "aeolian", 0)?.is_empty());
/// # Ok::<(), miditools::TheoryError>(())
/// ```
pub fn generate_chord(
    root: &str,
    octave: i32,
    mode: &str,
    count: i32,
) -> Result<Chord, TheoryError> {
    generate_chord_with_shape(root, octave, mode, ChordShape::Triad, count)
}

/// Like [`generate_chord`], with an explicit chord shape.
///
/// # Examples
/// ```
/// use miditools::{generate_chord_with_shape, ChordShape};
///
/// let chord = generate_chord_with_shape("A", 4, "aeolian", ChordShape::Ninth, 5)?;
/// assert_eq!(chord, vec![69, 72, 76, 79, 83]);
/// # Ok::<(), miditools::TheoryError>(())
/// ```
pub fn generate_chord_with_shape(
    root: &str,
    octave: i32,
    mode: &str,
    shape: ChordShape,
    count: i32,
) -> Result<Chord, TheoryError> {
    let count = usize::try_from(count).map_err(|_| TheoryError::InvalidNoteCount { count })?;
    let scale = generate_scale(root, octave, mode)?;
    Ok(shape.voice(&scale, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shape_table() {
        for shape in ChordShape::ALL {
            assert_eq!(ChordShape::from_name(shape.name()).unwrap(), shape);
            assert_eq!(shape.degrees()[0], 0);
        }
        assert_eq!(ChordShape::Triad.degrees(), &[0, 2, 4]);
        assert_eq!(
            ChordShape::from_name("cluster"),
            Err(TheoryError::UnknownChordShape {
                name: "cluster".to_string()
            })
        );
    }

    #[test]
    fn test_degree_at_wraps_by_octave() {
        let degrees: Vec<i64> = (0..7).map(|s| ChordShape::Triad.degree_at(s)).collect();
        assert_eq!(degrees, vec![0, 2, 4, 7, 9, 11, 14]);

        let degrees: Vec<i64> = (0..5).map(|s| ChordShape::Seventh.degree_at(s)).collect();
        assert_eq!(degrees, vec![0, 2, 4, 6, 7]);
    }

    #[test]
    fn test_degree_at_large_steps_do_not_overflow() {
        // 1e9 = 3 * 333_333_333 + 1, so shape index 1 (degree 2)
        assert_eq!(
            ChordShape::Triad.degree_at(1_000_000_000),
            2 + 7 * 333_333_333
        );
        assert!(ChordShape::Ninth.degree_at(usize::MAX) > 0);
    }

    #[test]
    fn test_far_degrees_saturate_to_i32() {
        let scale = Mode::Ionian.scale(60);
        let degree = ChordShape::Triad.degree_at(1_000_000_000);
        assert_eq!(note_for_degree(&scale, degree), i32::MAX);
        assert_eq!(note_for_degree(&scale, i64::MAX), i32::MAX);
        assert_eq!(note_for_degree(&scale, i64::MIN), i32::MIN);
    }

    #[test]
    fn test_chord_matches_generated_scale() {
        for mode in Mode::ALL {
            let scale = generate_scale("E", 3, mode.name()).unwrap();
            let chord = generate_chord("E", 3, mode.name(), 3).unwrap();
            assert_eq!(chord, vec![scale[0], scale[2], scale[4]], "{}", mode);
        }
    }

    #[test]
    fn test_note_for_degree() {
        let scale = Mode::Aeolian.scale(69);
        assert_eq!(note_for_degree(&scale, 0), 69);
        assert_eq!(note_for_degree(&scale, 6), 79);
        assert_eq!(note_for_degree(&scale, 7), 81);
        assert_eq!(note_for_degree(&scale, 9), 84);
        // Negative degrees wrap down an octave
        assert_eq!(note_for_degree(&scale, -1), 67);
        assert_eq!(note_for_degree(&scale, -7), 57);
    }

    #[test]
    fn test_a_minor_triad() {
        assert_eq!(generate_chord("A", 4, "aeolian", 3).unwrap(), vec![69, 72, 76]);
    }

    #[test]
    fn test_extended_triad() {
        assert_eq!(
            generate_chord("A", 4, "aeolian", 7).unwrap(),
            vec![69, 72, 76, 81, 84, 88, 93]
        );
        assert_eq!(generate_chord("C", 4, "ionian", 1).unwrap(), vec![60]);
        assert_eq!(generate_chord("C", 4, "ionian", 2).unwrap(), vec![60, 64]);
    }

    #[test]
    fn test_zero_notes() {
        assert_eq!(generate_chord("C", 4, "ionian", 0).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_negative_count_is_an_error() {
        assert_eq!(
            generate_chord("C", 4, "ionian", -1),
            Err(TheoryError::InvalidNoteCount { count: -1 })
        );
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        assert_eq!(
            generate_chord("C", 4, "bebop", 3),
            Err(TheoryError::UnknownMode {
                name: "bebop".to_string()
            })
        );
    }

    #[test]
    fn test_seventh_and_ninth_shapes() {
        assert_eq!(
            generate_chord_with_shape("C", 4, "ionian", ChordShape::Seventh, 4).unwrap(),
            vec![60, 64, 67, 71]
        );
        // Ninth shape reaches past the scale into the next octave
        assert_eq!(
            generate_chord_with_shape("C", 4, "ionian", ChordShape::Ninth, 5).unwrap(),
            vec![60, 64, 67, 71, 74]
        );
        // Second repetition of the seventh shape starts an octave up
        assert_eq!(
            generate_chord_with_shape("D", 4, "dorian", ChordShape::Seventh, 6).unwrap(),
            vec![62, 65, 69, 72, 74, 77]
        );
    }
}
