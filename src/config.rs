//! # Drill Configuration
//!
//! Settings for one drill session, optionally loaded from a YAML document.
//!
//! ## Format
//! ```yaml
//! sample-rate: 44100      # Hz
//! bpm: 120                # arpeggio tempo, 60-240
//! chord-duration: 1.0     # seconds the block chord sounds, at most 10
//! arpeggio: false         # play the chord tones one at a time
//! inversions: false       # play the inversion arpeggio instead of the chord
//! key: C                  # optional, fixes the root instead of picking one
//! chord-type: minor7      # optional, fixes the quality
//! ```
//!
//! Every field is optional; missing fields take the values of
//! [`DrillConfig::default()`]. When both `inversions` and `arpeggio` are set
//! the inversion arpeggio wins.

use serde::Deserialize;

use crate::error::ChordError;
use crate::synth::{MAX_BPM, MAX_CHORD_DURATION, MIN_BPM};
use crate::theory::{ChordQuality, PitchClass};

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_CHORD_DURATION: f64 = 1.0;
pub const DEFAULT_BPM: u16 = 120;

/// Validated drill settings
#[derive(Debug, Clone, PartialEq)]
pub struct DrillConfig {
    pub sample_rate: u32,
    pub chord_duration: f64,
    pub bpm: u16,
    pub arpeggio: bool,
    pub include_inversions: bool,
    pub key: Option<PitchClass>,
    pub quality: Option<ChordQuality>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            chord_duration: DEFAULT_CHORD_DURATION,
            bpm: DEFAULT_BPM,
            arpeggio: false,
            include_inversions: false,
            key: None,
            quality: None,
        }
    }
}

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub sample_rate: Option<u32>,
    pub chord_duration: Option<f64>,
    pub bpm: Option<u16>,
    pub arpeggio: Option<bool>,
    pub inversions: Option<bool>,
    pub key: Option<String>,
    pub chord_type: Option<String>,
}

impl DrillConfig {
    /// Parse and validate a YAML config document.
    ///
    /// # Example
    /// ```
    /// use chordplay::DrillConfig;
    ///
    /// let config = DrillConfig::from_yaml("bpm: 90\ninversions: true").unwrap();
    /// assert_eq!(config.bpm, 90);
    /// assert!(config.include_inversions);
    /// assert_eq!(config.sample_rate, 44100);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ChordError::ConfigError(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Apply raw values over the defaults, then validate.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ChordError> {
        let defaults = Self::default();

        let key = match raw.key {
            Some(ref key) => Some(key.parse::<PitchClass>().map_err(|e| {
                ChordError::ConfigError(e.to_string())
            })?),
            None => None,
        };
        let quality = match raw.chord_type {
            Some(ref chord_type) => Some(chord_type.parse::<ChordQuality>().map_err(|e| {
                ChordError::ConfigError(e.to_string())
            })?),
            None => None,
        };

        let config = Self {
            sample_rate: raw.sample_rate.unwrap_or(defaults.sample_rate),
            chord_duration: raw.chord_duration.unwrap_or(defaults.chord_duration),
            bpm: raw.bpm.unwrap_or(defaults.bpm),
            arpeggio: raw.arpeggio.unwrap_or(defaults.arpeggio),
            include_inversions: raw.inversions.unwrap_or(defaults.include_inversions),
            key,
            quality,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check ranges: positive sample rate, duration in (0, 10] seconds, BPM within 60..=240.
    pub fn validate(&self) -> Result<(), ChordError> {
        if self.sample_rate == 0 {
            return Err(ChordError::ConfigError(
                "sample-rate must be > 0".to_string(),
            ));
        }
        if !(self.chord_duration.is_finite() && self.chord_duration > 0.0) {
            return Err(ChordError::ConfigError(format!(
                "chord-duration must be positive, got {}",
                self.chord_duration
            )));
        }
        if self.chord_duration > MAX_CHORD_DURATION {
            return Err(ChordError::ConfigError(format!(
                "chord-duration must be at most {} s, got {}",
                MAX_CHORD_DURATION, self.chord_duration
            )));
        }
        if !(MIN_BPM..=MAX_BPM).contains(&self.bpm) {
            return Err(ChordError::ConfigError(format!(
                "bpm must be between {} and {}, got {}",
                MIN_BPM, MAX_BPM, self.bpm
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_drill_tool() {
        let config = DrillConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.chord_duration, 1.0);
        assert_eq!(config.bpm, 120);
        assert!(!config.arpeggio);
        assert!(!config.include_inversions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(DrillConfig::from_yaml("").unwrap(), DrillConfig::default());
        assert_eq!(DrillConfig::from_yaml("  \n").unwrap(), DrillConfig::default());
    }

    #[test]
    fn test_full_document() {
        let yaml = r#"
sample-rate: 22050
chord-duration: 0.5
bpm: 200
arpeggio: true
inversions: true
key: F#
chord-type: Half Diminished7
"#;
        let config = DrillConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.chord_duration, 0.5);
        assert_eq!(config.bpm, 200);
        assert!(config.arpeggio);
        assert!(config.include_inversions);
        assert_eq!(config.key, Some(PitchClass::FSharp));
        assert_eq!(config.quality, Some(ChordQuality::HalfDiminished7));
    }

    #[test]
    fn test_out_of_range_bpm() {
        let result = DrillConfig::from_yaml("bpm: 300");
        assert!(matches!(result, Err(ChordError::ConfigError(_))));
        let result = DrillConfig::from_yaml("bpm: 59");
        assert!(matches!(result, Err(ChordError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            DrillConfig::from_yaml("chord-duration: 0"),
            Err(ChordError::ConfigError(_))
        ));
        assert!(matches!(
            DrillConfig::from_yaml("sample-rate: 0"),
            Err(ChordError::ConfigError(_))
        ));
        assert!(matches!(
            DrillConfig::from_yaml("key: H"),
            Err(ChordError::ConfigError(_))
        ));
        assert!(matches!(
            DrillConfig::from_yaml("chord-type: sus2"),
            Err(ChordError::ConfigError(_))
        ));
    }

    #[test]
    fn test_arpeggio_flag() {
        let config = DrillConfig::from_yaml("arpeggio: true").unwrap();
        assert!(config.arpeggio);
        assert!(!config.include_inversions);
        assert!(matches!(
            DrillConfig::from_yaml("arpeggio: sometimes"),
            Err(ChordError::ConfigError(_))
        ));
    }

    #[test]
    fn test_chord_duration_upper_bound() {
        let config = DrillConfig::from_yaml("chord-duration: 10").unwrap();
        assert_eq!(config.chord_duration, MAX_CHORD_DURATION);
        assert!(matches!(
            DrillConfig::from_yaml("chord-duration: 10.5"),
            Err(ChordError::ConfigError(_))
        ));
        assert!(matches!(
            DrillConfig::from_yaml("chord-duration: 1e12"),
            Err(ChordError::ConfigError(_))
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            DrillConfig::from_yaml("bpm: [fast"),
            Err(ChordError::ConfigError(_))
        ));
        assert!(matches!(
            DrillConfig::from_yaml("tempo: 120"),
            Err(ChordError::ConfigError(_))
        ));
    }
}
