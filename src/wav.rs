//! WAV container encoding using hound
//!
//! Wraps rendered PCM in a RIFF/WAVE header: mono, 16-bit signed
//! little-endian samples, caller-chosen sample rate.

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::ChordError;

/// Header layout for every buffer this crate produces.
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Encode mono 16-bit PCM into an in-memory WAV file.
///
/// # Example
/// ```
/// use chordplay::wav::encode;
///
/// let bytes = encode(&[0, 1000, -1000, 0], 44100).unwrap();
/// assert_eq!(&bytes[..4], b"RIFF");
/// assert_eq!(&bytes[8..12], b"WAVE");
/// assert_eq!(bytes.len(), 44 + 4 * 2);
/// ```
pub fn encode(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, ChordError> {
    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    {
        let mut writer = WavWriter::new(Cursor::new(&mut bytes), wav_spec(sample_rate))
            .map_err(|e| ChordError::EncodeError(e.to_string()))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| ChordError::EncodeError(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| ChordError::EncodeError(e.to_string()))?;
    }
    Ok(bytes)
}

/// Read back a WAV produced by [`encode`]: `(spec, samples)`.
///
/// Rejects anything that is not mono 16-bit integer PCM.
pub fn decode(bytes: &[u8]) -> Result<(WavSpec, Vec<i16>), ChordError> {
    let mut reader =
        WavReader::new(Cursor::new(bytes)).map_err(|e| ChordError::EncodeError(e.to_string()))?;
    let spec = reader.spec();
    if spec != wav_spec(spec.sample_rate) {
        return Err(ChordError::EncodeError(format!(
            "expected mono 16-bit PCM, got {} channel(s) at {} bits",
            spec.channels, spec.bits_per_sample
        )));
    }
    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ChordError::EncodeError(e.to_string()))?;
    Ok((spec, samples))
}
