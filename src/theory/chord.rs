//! Chord spelling and inversion drills
//!
//! Turns a (root, quality) pair into octave-qualified notes and expands a
//! spelled chord into the "every inversion up, then back down" practice run.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::pitch::{Note, PitchClass, BASE_OCTAVE};
use crate::error::ChordError;

/// The interval pattern that gives a chord its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Sus4,
    Augmented,
    Diminished,
    Major7,
    Minor7,
    Dominant7,
    Diminished7,
    HalfDiminished7,
}

impl ChordQuality {
    /// All qualities, in drill order.
    pub const ALL: [ChordQuality; 10] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Sus4,
        ChordQuality::Augmented,
        ChordQuality::Diminished,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Dominant7,
        ChordQuality::Diminished7,
        ChordQuality::HalfDiminished7,
    ];

    /// Semitone offsets from the root, root first.
    ///
    /// - Triads: root, 3rd/4th, 5th
    /// - Sevenths: triad + minor/major/diminished 7th
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
        }
    }

    /// Label shown to the student. Case matters: `Major` vs `minor`.
    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "minor",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Augmented => "aug",
            ChordQuality::Diminished => "dim",
            ChordQuality::Major7 => "Major7",
            ChordQuality::Minor7 => "minor7",
            ChordQuality::Dominant7 => "Dominant7",
            ChordQuality::Diminished7 => "Diminished7",
            ChordQuality::HalfDiminished7 => "Half Diminished7",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChordQuality {
    type Err = ChordError;

    /// Parse a drill label. `HalfDiminished7` is accepted as a spelling of
    /// `Half Diminished7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "HalfDiminished7" => Ok(ChordQuality::HalfDiminished7),
            trimmed => Self::ALL
                .iter()
                .copied()
                .find(|q| q.label() == trimmed)
                .ok_or_else(|| ChordError::InvalidQuality(s.to_string())),
        }
    }
}

impl Serialize for ChordQuality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Spell a chord in root position starting at octave 4.
///
/// Each tone is `(root + offset) mod 12`; the octave is bumped by one when
/// `root + offset` reaches 12, so tones above B4 land in octave 5.
///
/// # Examples
/// ```
/// use chordplay::{chord_tones, ChordQuality, PitchClass};
///
/// let notes = chord_tones(PitchClass::A, ChordQuality::Minor7);
/// let names: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
/// assert_eq!(names, ["A4", "C5", "E5", "G5"]);
/// ```
pub fn chord_tones(root: PitchClass, quality: ChordQuality) -> Vec<Note> {
    quality
        .intervals()
        .iter()
        .map(|offset| {
            let raw = root.index() + offset;
            let octave = BASE_OCTAVE + (raw / 12) as i8;
            Note::new(PitchClass::from_index(raw), octave)
        })
        .collect()
}

/// Spell a chord from its textual key and chord type (e.g. `"C#"`, `"minor7"`).
///
/// # Errors
/// - [`ChordError::InvalidPitchClass`] if `key` is not one of the 12 names
/// - [`ChordError::InvalidQuality`] if `chord_type` is not a known quality
pub fn spell_chord(key: &str, chord_type: &str) -> Result<Vec<Note>, ChordError> {
    let root: PitchClass = key.parse()?;
    let quality: ChordQuality = chord_type.parse()?;
    Ok(chord_tones(root, quality))
}

/// Build the inversion arpeggio for a spelled chord.
///
/// For every rotation `i`, the voicing is `notes[i..]` followed by
/// `notes[..i]` raised an octave. The voicings are flattened into one
/// ascending run and the run is mirrored, so the result is
/// `ascending ++ reverse(ascending)` with length `2 * n * n`.
///
/// ```text
/// C4 E4 G4 | E4 G4 C5 | G4 C5 E5 || E5 C5 G4 | C5 G4 E4 | G4 E4 C4
/// ```
///
/// # Errors
/// [`ChordError::OctaveOutOfRange`] if a rotated note cannot be raised.
pub fn inversion_sequence(chord_notes: &[Note]) -> Result<Vec<Note>, ChordError> {
    let n = chord_notes.len();
    let mut ascending = Vec::with_capacity(n * n);

    for i in 0..n {
        ascending.extend_from_slice(&chord_notes[i..]);
        for note in &chord_notes[..i] {
            ascending.push(note.raise_octave()?);
        }
    }

    let mut sequence = ascending.clone();
    sequence.extend(ascending.iter().rev());
    Ok(sequence)
}
