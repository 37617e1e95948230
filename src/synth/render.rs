//! Sine rendering for chords and arpeggios

use std::f64::consts::PI;

use log::{debug, warn};

use crate::error::ChordError;

/// Largest absolute sample value after normalization.
pub const PEAK_AMPLITUDE: i16 = i16::MAX;

/// Slowest tempo accepted by [`render_arpeggio`].
pub const MIN_BPM: u16 = 60;

/// Fastest tempo accepted by [`render_arpeggio`].
pub const MAX_BPM: u16 = 240;

/// Longest block chord accepted by [`render_chord`], in seconds.
pub const MAX_CHORD_DURATION: f64 = 10.0;

/// Length in seconds of one sixteenth note at `bpm` (quarter note = beat).
pub fn sixteenth_duration(bpm: u16) -> f64 {
    60.0 / bpm as f64 / 4.0
}

/// Samples per arpeggio segment: `round(sample_rate × 60 / bpm / 4)`, at least 1.
pub fn segment_len(bpm: u16, sample_rate: u32) -> usize {
    sample_count(sixteenth_duration(bpm), sample_rate)
}

/// Render all frequencies simultaneously for `duration_secs` seconds.
///
/// # Errors
/// [`ChordError::DegenerateSynthesisInput`] if `frequencies` is empty, any
/// frequency is negative or not finite, the duration is not a positive finite
/// number no longer than [`MAX_CHORD_DURATION`], or `sample_rate` is zero.
pub fn render_chord(
    frequencies: &[f64],
    duration_secs: f64,
    sample_rate: u32,
) -> Result<Vec<i16>, ChordError> {
    check_frequencies(frequencies)?;
    check_sample_rate(sample_rate)?;
    if !(duration_secs.is_finite() && duration_secs > 0.0) {
        return Err(ChordError::DegenerateSynthesisInput(format!(
            "chord duration must be positive, got {} s",
            duration_secs
        )));
    }
    if duration_secs > MAX_CHORD_DURATION {
        return Err(ChordError::DegenerateSynthesisInput(format!(
            "chord duration must be at most {} s, got {} s",
            MAX_CHORD_DURATION, duration_secs
        )));
    }

    let len = sample_count(duration_secs, sample_rate);
    let mut mix = vec![0.0f64; len];
    for &freq in frequencies {
        for (sample, tone) in mix.iter_mut().zip(sine_wave(freq, len, sample_rate)) {
            *sample += tone;
        }
    }

    debug!(
        "rendered chord: {} tones, {} samples @ {} Hz",
        frequencies.len(),
        len,
        sample_rate
    );
    Ok(normalize(&mix))
}

/// Render frequencies one after another as sixteenth notes at `bpm`.
///
/// Each segment is `segment_len(bpm, sample_rate)` samples long and is
/// normalized on its own before being appended.
///
/// # Errors
/// [`ChordError::DegenerateSynthesisInput`] if `frequencies` is empty, any
/// frequency is negative or not finite, `bpm` lies outside
/// [`MIN_BPM`]..=[`MAX_BPM`], or `sample_rate` is zero.
pub fn render_arpeggio(
    frequencies: &[f64],
    bpm: u16,
    sample_rate: u32,
) -> Result<Vec<i16>, ChordError> {
    check_frequencies(frequencies)?;
    check_sample_rate(sample_rate)?;
    if !(MIN_BPM..=MAX_BPM).contains(&bpm) {
        return Err(ChordError::DegenerateSynthesisInput(format!(
            "BPM must be between {} and {}, got {}",
            MIN_BPM, MAX_BPM, bpm
        )));
    }

    let len = segment_len(bpm, sample_rate);
    let mut pcm = Vec::with_capacity(len * frequencies.len());
    for &freq in frequencies {
        let segment: Vec<f64> = sine_wave(freq, len, sample_rate).collect();
        pcm.extend(normalize(&segment));
    }

    debug!(
        "rendered arpeggio: {} notes x {} samples at {} BPM",
        frequencies.len(),
        len,
        bpm
    );
    Ok(pcm)
}

fn sample_count(seconds: f64, sample_rate: u32) -> usize {
    ((sample_rate as f64 * seconds).round() as usize).max(1)
}

fn sine_wave(freq: f64, len: usize, sample_rate: u32) -> impl Iterator<Item = f64> {
    let step = 2.0 * PI * freq / sample_rate as f64;
    (0..len).map(move |i| (step * i as f64).sin())
}

/// Scale so the loudest sample hits [`PEAK_AMPLITUDE`].
fn normalize(samples: &[f64]) -> Vec<i16> {
    let max_abs = samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
    if max_abs == 0.0 {
        warn!("waveform is silent; skipping normalization");
        return vec![0; samples.len()];
    }

    let scale = PEAK_AMPLITUDE as f64 / max_abs;
    samples
        .iter()
        .map(|s| (s * scale).round().clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect()
}

fn check_frequencies(frequencies: &[f64]) -> Result<(), ChordError> {
    if frequencies.is_empty() {
        return Err(ChordError::DegenerateSynthesisInput(
            "no frequencies to render".to_string(),
        ));
    }
    if let Some(bad) = frequencies.iter().find(|f| !(f.is_finite() && **f >= 0.0)) {
        return Err(ChordError::DegenerateSynthesisInput(format!(
            "frequency must be a non-negative finite number, got {}",
            bad
        )));
    }
    Ok(())
}

fn check_sample_rate(sample_rate: u32) -> Result<(), ChordError> {
    if sample_rate == 0 {
        return Err(ChordError::DegenerateSynthesisInput(
            "sample rate must be > 0".to_string(),
        ));
    }
    Ok(())
}
