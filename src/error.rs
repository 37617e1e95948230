//! # Error Types
//!
//! This module defines all error types for the chord drill engine.
//!
//! Every failure is a local validation failure: the engine rejects bad input
//! immediately and never returns a partially built result.
//!
//! ## Error Types
//! - `InvalidPitchClass` - Root name is not one of the 12 pitch classes
//! - `InvalidQuality` - Chord type is not one of the 10 supported qualities
//! - `InvalidNoteFormat` - Note string is not `<pitch class><octave>`
//! - `DegenerateSynthesisInput` - Empty frequency list, bad duration, BPM or sample rate
//! - `OctaveOutOfRange` - An octave shift left the supported range
//! - `ConfigError` - Invalid YAML drill configuration
//! - `EncodeError` - The WAV writer failed
//!
//! ## Usage
//! ```rust
//! use chordplay::{spell_chord, ChordError};
//!
//! match spell_chord("H", "Major") {
//!     Ok(notes) => println!("{:?}", notes),
//!     Err(ChordError::InvalidPitchClass(name)) => eprintln!("no such key: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// Root is not one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B.
    ///
    /// # Example
    /// ```
    /// # use chordplay::ChordError;
    /// let err = ChordError::InvalidPitchClass("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch class: H");
    /// ```
    #[error("Invalid pitch class: {0}")]
    InvalidPitchClass(String),

    /// Chord type is not one of the supported qualities.
    ///
    /// # Example
    /// ```
    /// # use chordplay::ChordError;
    /// let err = ChordError::InvalidQuality("sus2".to_string());
    /// assert_eq!(err.to_string(), "Invalid chord quality: sus2");
    /// ```
    #[error("Invalid chord quality: {0}")]
    InvalidQuality(String),

    /// Note string could not be split into a pitch class and an integer octave.
    ///
    /// # Example
    /// ```
    /// # use chordplay::ChordError;
    /// let err = ChordError::InvalidNoteFormat("C#".to_string());
    /// assert_eq!(err.to_string(), "Invalid note format: C#");
    /// ```
    #[error("Invalid note format: {0}")]
    InvalidNoteFormat(String),

    /// Synthesis was asked to render nothing, or to render with a
    /// non-positive duration, tempo or sample rate.
    ///
    /// # Example
    /// ```
    /// # use chordplay::ChordError;
    /// let err = ChordError::DegenerateSynthesisInput("no frequencies to render".to_string());
    /// assert_eq!(err.to_string(), "Degenerate synthesis input: no frequencies to render");
    /// ```
    #[error("Degenerate synthesis input: {0}")]
    DegenerateSynthesisInput(String),

    /// Invalid drill configuration.
    ///
    /// Occurs when the YAML document is malformed or holds out-of-range values.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A note was shifted past the supported octave range.
    ///
    /// Occurs when building an inversion run from notes already at the top octave.
    ///
    /// # Example
    /// ```
    /// # use chordplay::Note;
    /// # use chordplay::ChordError;
    /// let top: Note = "B10".parse().unwrap();
    /// assert!(matches!(top.raise_octave(), Err(ChordError::OctaveOutOfRange(_))));
    /// ```
    #[error("Octave out of range: {0}")]
    OctaveOutOfRange(String),

    /// The WAV writer rejected the buffer.
    ///
    /// Should not occur for in-memory buffers of well-formed samples.
    ///
    /// # Example
    /// ```
    /// # use chordplay::ChordError;
    /// let err = ChordError::EncodeError("header write failed".to_string());
    /// assert_eq!(err.to_string(), "WAV encoding failed: header write failed");
    /// ```
    #[error("WAV encoding failed: {0}")]
    EncodeError(String),
}
