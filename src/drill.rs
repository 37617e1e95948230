//! Drill questions and their rendered answers
//!
//! A [`Question`] is one (key, chord type) pair with its spelled notes. It
//! lives until the caller asks for the next one; nothing is persisted.
//! [`generate_answer`] runs the whole pipeline for a question and hands back
//! the notes, frequencies and a playable WAV.

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::config::DrillConfig;
use crate::error::ChordError;
use crate::synth::{render_arpeggio, render_chord};
use crate::theory::{chord_tones, frequencies, inversion_sequence, ChordQuality, Note, PitchClass};
use crate::wav;

/// One drill prompt: a root, a quality and the chord they spell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub key: PitchClass,
    pub quality: ChordQuality,
    pub notes: Vec<Note>,
}

impl Question {
    pub fn new(key: PitchClass, quality: ChordQuality) -> Self {
        Self {
            key,
            quality,
            notes: chord_tones(key, quality),
        }
    }

    /// Build a question from user-facing names, e.g. `("A", "minor7")`.
    pub fn parse(key: &str, chord_type: &str) -> Result<Self, ChordError> {
        Ok(Self::new(key.parse()?, chord_type.parse()?))
    }

    /// Uniformly random key and quality.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let key = PitchClass::ALL[rng.gen_range(0..PitchClass::ALL.len())];
        let quality = ChordQuality::ALL[rng.gen_range(0..ChordQuality::ALL.len())];
        Self::new(key, quality)
    }

    /// Use the key/quality pinned in `config`, picking the rest at random.
    pub fn from_config<R: Rng>(config: &DrillConfig, rng: &mut R) -> Self {
        let random = Self::random(rng);
        Self::new(
            config.key.unwrap_or(random.key),
            config.quality.unwrap_or(random.quality),
        )
    }

    /// Prompt text, e.g. `"C# Half Diminished7"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.key, self.quality)
    }

    /// Chord tones without octaves, e.g. `"A C E G"`.
    pub fn note_names(&self) -> String {
        self.notes
            .iter()
            .map(|note| note.pitch.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How an answer is voiced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackMode {
    /// All chord tones at once
    Chord,
    /// Chord tones as sixteenth notes, root first
    Arpeggio,
    /// Every inversion as sixteenth notes, up then down
    InversionArpeggio,
}

impl PlaybackMode {
    /// Inversions take precedence over the plain arpeggio.
    pub fn for_config(config: &DrillConfig) -> Self {
        if config.include_inversions {
            PlaybackMode::InversionArpeggio
        } else if config.arpeggio {
            PlaybackMode::Arpeggio
        } else {
            PlaybackMode::Chord
        }
    }
}

/// Everything the caller needs to show and play an answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub mode: PlaybackMode,
    pub notes: Vec<Note>,
    pub frequencies: Vec<f64>,
    pub sample_rate: u32,
    pub sample_count: usize,
    #[serde(skip)]
    pub wav: Vec<u8>,
}

impl Answer {
    /// Playing time in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.sample_count as f64 / self.sample_rate as f64
    }
}

/// Render a question in the [`PlaybackMode`] selected by `config`.
///
/// Both arpeggio modes play sixteenth notes at `config.bpm`; the block chord
/// lasts `config.chord_duration` seconds.
///
/// # Example
/// ```
/// use chordplay::{generate_answer, DrillConfig, Question};
///
/// let question = Question::parse("C", "Major").unwrap();
/// let answer = generate_answer(&question, &DrillConfig::default()).unwrap();
///
/// assert_eq!(answer.notes.len(), 3);
/// assert_eq!(answer.sample_count, 44100);
/// assert_eq!(&answer.wav[..4], b"RIFF");
/// ```
pub fn generate_answer(question: &Question, config: &DrillConfig) -> Result<Answer, ChordError> {
    let mode = PlaybackMode::for_config(config);
    let notes = match mode {
        PlaybackMode::InversionArpeggio => inversion_sequence(&question.notes)?,
        PlaybackMode::Chord | PlaybackMode::Arpeggio => question.notes.clone(),
    };
    let freqs = frequencies(&notes);

    let pcm = match mode {
        PlaybackMode::Chord => render_chord(&freqs, config.chord_duration, config.sample_rate)?,
        PlaybackMode::Arpeggio | PlaybackMode::InversionArpeggio => {
            render_arpeggio(&freqs, config.bpm, config.sample_rate)?
        }
    };
    let wav = wav::encode(&pcm, config.sample_rate)?;

    debug!(
        "answer for {}: {:?}, {} notes, {} samples, {} bytes",
        question.label(),
        mode,
        notes.len(),
        pcm.len(),
        wav.len()
    );

    Ok(Answer {
        mode,
        notes,
        frequencies: freqs,
        sample_rate: config.sample_rate,
        sample_count: pcm.len(),
        wav,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::segment_len;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_question_parse() {
        let question = Question::parse("A", "minor7").unwrap();
        assert_eq!(question.key, PitchClass::A);
        assert_eq!(question.quality, ChordQuality::Minor7);
        assert_eq!(question.label(), "A minor7");
        assert_eq!(question.note_names(), "A C E G");
    }

    #[test]
    fn test_question_parse_errors() {
        assert_eq!(
            Question::parse("Z", "Major"),
            Err(ChordError::InvalidPitchClass("Z".to_string()))
        );
        assert_eq!(
            Question::parse("C", "major"),
            Err(ChordError::InvalidQuality("major".to_string()))
        );
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(Question::random(&mut a), Question::random(&mut b));
        }
    }

    #[test]
    fn test_random_covers_every_key_and_quality() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut keys = std::collections::HashSet::new();
        let mut qualities = std::collections::HashSet::new();
        for _ in 0..2000 {
            let question = Question::random(&mut rng);
            assert_eq!(question.notes, chord_tones(question.key, question.quality));
            keys.insert(question.key);
            qualities.insert(question.quality);
        }
        assert_eq!(keys.len(), 12);
        assert_eq!(qualities.len(), 10);
    }

    #[test]
    fn test_from_config_respects_pinned_values() {
        let config = DrillConfig {
            key: Some(PitchClass::DSharp),
            quality: Some(ChordQuality::Sus4),
            ..DrillConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let question = Question::from_config(&config, &mut rng);
        assert_eq!(question.label(), "D# sus4");
        assert_eq!(question.note_names(), "D# G# A#");
    }

    #[test]
    fn test_chord_answer() {
        let question = Question::parse("C", "Major").unwrap();
        let config = DrillConfig {
            chord_duration: 0.5,
            ..DrillConfig::default()
        };
        let answer = generate_answer(&question, &config).unwrap();
        assert_eq!(answer.mode, PlaybackMode::Chord);
        assert_eq!(answer.notes, question.notes);
        assert_eq!(answer.sample_count, 22050);
        assert_eq!(answer.wav.len(), 44 + 22050 * 2);
        assert_eq!(answer.duration_secs(), 0.5);
    }

    #[test]
    fn test_plain_arpeggio_answer() {
        let question = Question::parse("A", "minor7").unwrap();
        let config = DrillConfig {
            arpeggio: true,
            bpm: 120,
            ..DrillConfig::default()
        };
        let answer = generate_answer(&question, &config).unwrap();
        assert_eq!(answer.mode, PlaybackMode::Arpeggio);
        assert_eq!(answer.notes, question.notes);
        assert_eq!(answer.frequencies.len(), 4);
        assert_eq!(answer.sample_count, 4 * segment_len(120, 44100));
        assert_eq!(answer.sample_count, 4 * 5513);
    }

    #[test]
    fn test_inversions_override_plain_arpeggio() {
        let config = DrillConfig {
            arpeggio: true,
            include_inversions: true,
            ..DrillConfig::default()
        };
        assert_eq!(PlaybackMode::for_config(&config), PlaybackMode::InversionArpeggio);
        assert_eq!(PlaybackMode::for_config(&DrillConfig::default()), PlaybackMode::Chord);
    }

    #[test]
    fn test_inversion_arpeggio_answer() {
        let question = Question::parse("G", "Dominant7").unwrap();
        let config = DrillConfig {
            include_inversions: true,
            bpm: 60,
            ..DrillConfig::default()
        };
        let answer = generate_answer(&question, &config).unwrap();
        assert_eq!(answer.mode, PlaybackMode::InversionArpeggio);
        assert_eq!(answer.notes.len(), 32);
        assert_eq!(answer.frequencies.len(), 32);
        assert_eq!(answer.sample_count, 32 * 11025);
    }

    #[test]
    fn test_answer_json_omits_wav() {
        let question = Question::parse("C", "Major").unwrap();
        let answer = generate_answer(&question, &DrillConfig::default()).unwrap();
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["mode"], "chord");
        assert_eq!(json["notes"], serde_json::json!(["C4", "E4", "G4"]));
        assert_eq!(json["sampleRate"], 44100);
        assert!(json.get("wav").is_none());

        let config = DrillConfig {
            include_inversions: true,
            ..DrillConfig::default()
        };
        let answer = generate_answer(&question, &config).unwrap();
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["mode"], "inversion-arpeggio");
    }
}
