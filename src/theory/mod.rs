//! # Theory Engine
//!
//! Pure functions that spell chords, build inversion drills and tune notes.
//!
//! ## Sub-modules
//! - `pitch` - [`PitchClass`] and octave-qualified [`Note`] types
//! - `chord` - [`ChordQuality`], chord spelling and the inversion arpeggio
//! - `frequency` - 12-TET conversion from notes to Hz (A4 = 440 Hz)
//!
//! ## Data Flow
//! ```text
//! (PitchClass, ChordQuality)
//!   └─ chord_tones ──────────► Vec<Note>        e.g. [C4, E4, G4]
//!        └─ inversion_sequence ► Vec<Note>      2·n·n notes, up then down
//!             └─ frequencies ──► Vec<f64>       Hz, fed to the synthesizer
//! ```
//!
//! ## Octave Rule
//! Roots are always spelled in octave 4. A chord tone moves to octave 5 when
//! `root index + offset >= 12`, i.e. when it passes B4. Inversions raise the
//! rotated-out notes by exactly one octave.
//!
//! Nothing in this module has side effects: the same input always yields the
//! same notes and bit-identical frequencies.

mod chord;
mod frequency;
mod pitch;

pub use chord::{chord_tones, inversion_sequence, spell_chord, ChordQuality};
pub use frequency::{frequencies, note_to_frequency, A4_HZ};
pub use pitch::{Note, PitchClass, BASE_OCTAVE, MAX_OCTAVE, MIN_OCTAVE};
