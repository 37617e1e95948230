//! Equal-tempered note → frequency conversion.

use super::pitch::{Note, BASE_OCTAVE};
use crate::error::ChordError;

/// Concert pitch A4 in Hz.
pub const A4_HZ: f64 = 440.0;

/// Semitones from C to A within one octave.
const A_INDEX: i32 = 9;

impl Note {
    /// Frequency in Hz, 12-TET tuned to A4 = 440 Hz.
    ///
    /// The pitch-class ratio and the octave factor are computed separately;
    /// the octave factor is an exact power of two, so moving a note up an
    /// octave doubles its frequency bit-for-bit.
    pub fn frequency(self) -> f64 {
        let class_ratio = 2f64.powf((self.pitch.index() as i32 - A_INDEX) as f64 / 12.0);
        let octave_ratio = 2f64.powi(self.octave as i32 - BASE_OCTAVE as i32);
        A4_HZ * class_ratio * octave_ratio
    }
}

/// Convert a note string such as `"C#4"` into its frequency.
///
/// # Examples
/// ```
/// use chordplay::note_to_frequency;
///
/// assert_eq!(note_to_frequency("A4").unwrap(), 440.0);
/// assert!((note_to_frequency("C4").unwrap() - 261.6256).abs() < 1e-4);
/// assert!(note_to_frequency("Q4").is_err());
/// ```
///
/// # Errors
/// [`ChordError::InvalidNoteFormat`] if the string is not `<pitch class><octave>`.
pub fn note_to_frequency(note: &str) -> Result<f64, ChordError> {
    let note: Note = note.parse()?;
    Ok(note.frequency())
}

/// Frequencies for a run of notes, in order.
pub fn frequencies(notes: &[Note]) -> Vec<f64> {
    notes.iter().map(|note| note.frequency()).collect()
}
