//! Pitch classes and octave-qualified notes.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ChordError;

/// Octave used for the root of every spelled chord.
pub const BASE_OCTAVE: i8 = 4;

/// Lowest octave a [`Note`] may carry (C-1 is MIDI 0).
pub const MIN_OCTAVE: i8 = -1;

/// Highest octave a [`Note`] may carry.
pub const MAX_OCTAVE: i8 = 10;

/// One of the 12 equal-tempered note names, octave-independent.
///
/// Only sharp spellings are used; ordering is cyclic from C (index 0) to B (index 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PitchClass {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitones above C (0..=11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at `index` semitones above C, wrapping mod 12.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    /// Exact match against the 12 names; no whitespace allowed.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|pc| pc.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    /// Parse one of the 12 sharp-spelled names ("C", "C#", ... "B").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| ChordError::InvalidPitchClass(s.to_string()))
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A pitch class in a specific octave, e.g. `C#4`.
///
/// Two notes are equal iff both pitch class and octave match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub pitch: PitchClass,
    pub octave: i8,
}

impl Note {
    pub fn new(pitch: PitchClass, octave: i8) -> Self {
        Self { pitch, octave }
    }

    /// Same pitch class, one octave up.
    ///
    /// # Errors
    /// [`ChordError::OctaveOutOfRange`] if the result would pass [`MAX_OCTAVE`].
    pub fn raise_octave(self) -> Result<Self, ChordError> {
        self.shift_octave(1)
    }

    /// Same pitch class, one octave down.
    ///
    /// # Errors
    /// [`ChordError::OctaveOutOfRange`] if the result would pass [`MIN_OCTAVE`].
    pub fn lower_octave(self) -> Result<Self, ChordError> {
        self.shift_octave(-1)
    }

    fn shift_octave(self, by: i8) -> Result<Self, ChordError> {
        self.octave
            .checked_add(by)
            .filter(|octave| (MIN_OCTAVE..=MAX_OCTAVE).contains(octave))
            .map(|octave| Self { octave, ..self })
            .ok_or_else(|| {
                ChordError::OctaveOutOfRange(format!(
                    "{} shifted by {} octave(s) leaves {}..={}",
                    self, by, MIN_OCTAVE, MAX_OCTAVE
                ))
            })
    }

    /// Signed semitone distance from C4.
    pub fn semitones_from_c4(self) -> i32 {
        self.pitch.index() as i32 + 12 * (self.octave as i32 - BASE_OCTAVE as i32)
    }

    /// MIDI note number (C4 = 60). `None` outside 0..=127.
    pub fn midi_number(self) -> Option<u8> {
        u8::try_from(60 + self.semitones_from_c4())
            .ok()
            .filter(|n| *n <= 127)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for Note {
    type Err = ChordError;

    /// Parse `<pitch class><octave>`, e.g. `"A4"`, `"F#5"`, `"C-1"`.
    ///
    /// Only surrounding whitespace is ignored; the octave must lie in
    /// [`MIN_OCTAVE`]..=[`MAX_OCTAVE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChordError::InvalidNoteFormat(s.to_string());
        let trimmed = s.trim();

        // Octave starts at the first digit or minus sign after the letter
        let split = trimmed
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_digit() || *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;
        let (name, octave) = trimmed.split_at(split);

        let pitch = PitchClass::from_name(name).ok_or_else(invalid)?;
        let octave: i8 = octave.parse().map_err(|_| invalid())?;
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(invalid());
        }
        Ok(Note { pitch, octave })
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_parsing() {
        assert_eq!("C".parse::<PitchClass>().unwrap(), PitchClass::C);
        assert_eq!("F#".parse::<PitchClass>().unwrap(), PitchClass::FSharp);
        assert_eq!("A#".parse::<PitchClass>().unwrap(), PitchClass::ASharp);
        assert_eq!(
            "H".parse::<PitchClass>(),
            Err(ChordError::InvalidPitchClass("H".to_string()))
        );
        // Flat spellings are not part of the drill vocabulary
        assert!("Bb".parse::<PitchClass>().is_err());
        assert!("".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_pitch_class_index_wraps() {
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.index() as usize, i);
            assert_eq!(PitchClass::from_index(i as u8 + 12), *pc);
        }
    }

    #[test]
    fn test_note_parsing() {
        assert_eq!("C4".parse::<Note>().unwrap(), Note::new(PitchClass::C, 4));
        assert_eq!("G#5".parse::<Note>().unwrap(), Note::new(PitchClass::GSharp, 5));
        assert_eq!("A-1".parse::<Note>().unwrap(), Note::new(PitchClass::A, -1));
        assert_eq!("B10".parse::<Note>().unwrap(), Note::new(PitchClass::B, 10));
    }

    #[test]
    fn test_note_parsing_rejects_malformed() {
        for bad in [
            "", "4", "C", "C#", "X4", "C#x", "Cb4", "C4.5", "C 4", "C# 4", "C  4", "C#\t4", "C4 5",
            "B11", "C-2", "B127",
        ] {
            assert_eq!(
                bad.parse::<Note>(),
                Err(ChordError::InvalidNoteFormat(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_note_display_round_trips() {
        let note = Note::new(PitchClass::DSharp, 3);
        assert_eq!(note.to_string(), "D#3");
        assert_eq!(note.to_string().parse::<Note>().unwrap(), note);
    }

    #[test]
    fn test_octave_shifts_keep_pitch_class() {
        let note = Note::new(PitchClass::E, 4);
        assert_eq!(note.raise_octave().unwrap(), Note::new(PitchClass::E, 5));
        assert_eq!(note.lower_octave().unwrap(), Note::new(PitchClass::E, 3));
        assert_eq!(note.raise_octave().unwrap().lower_octave().unwrap(), note);
    }

    #[test]
    fn test_octave_shifts_stop_at_range_edges() {
        let top: Note = "B10".parse().unwrap();
        assert!(matches!(top.raise_octave(), Err(ChordError::OctaveOutOfRange(_))));
        assert_eq!(top.lower_octave().unwrap(), Note::new(PitchClass::B, 9));

        let bottom: Note = "C-1".parse().unwrap();
        assert!(matches!(bottom.lower_octave(), Err(ChordError::OctaveOutOfRange(_))));

        // Hand-built notes outside the range must not overflow either
        let extreme = Note::new(PitchClass::B, i8::MAX);
        assert!(matches!(extreme.raise_octave(), Err(ChordError::OctaveOutOfRange(_))));
        let extreme = Note::new(PitchClass::C, i8::MIN);
        assert!(matches!(extreme.lower_octave(), Err(ChordError::OctaveOutOfRange(_))));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(" C#4\n".parse::<Note>().unwrap(), Note::new(PitchClass::CSharp, 4));
        assert_eq!(" F# ".parse::<PitchClass>().unwrap(), PitchClass::FSharp);
    }

    #[test]
    fn test_midi_number() {
        assert_eq!(Note::new(PitchClass::C, 4).midi_number(), Some(60));
        assert_eq!(Note::new(PitchClass::A, 4).midi_number(), Some(69));
        assert_eq!(Note::new(PitchClass::C, -1).midi_number(), Some(0));
        assert_eq!(Note::new(PitchClass::C, -2).midi_number(), None);
        assert_eq!(Note::new(PitchClass::GSharp, 9).midi_number(), None);
    }

    #[test]
    fn test_note_serializes_as_string() {
        let json = serde_json::to_string(&Note::new(PitchClass::CSharp, 5)).unwrap();
        assert_eq!(json, "\"C#5\"");
    }
}
