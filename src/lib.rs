pub mod config;
pub mod drill;
pub mod error;
pub mod synth;
pub mod theory;
pub mod wav;

pub use config::DrillConfig;
pub use drill::{generate_answer, Answer, PlaybackMode, Question};
pub use error::*;
pub use synth::{render_arpeggio, render_chord};
pub use theory::*;

/// Spell and render a chord named by its key and chord type.
/// This is the main entry point for the library.
///
/// ```
/// let answer = chordplay::answer_for("A", "minor7", &chordplay::DrillConfig::default()).unwrap();
/// let names: Vec<String> = answer.notes.iter().map(|n| n.to_string()).collect();
/// assert_eq!(names, ["A4", "C5", "E5", "G5"]);
/// ```
pub fn answer_for(key: &str, chord_type: &str, config: &DrillConfig) -> Result<Answer, ChordError> {
    let question = Question::parse(key, chord_type)?;
    generate_answer(&question, config)
}
