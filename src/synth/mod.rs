//! # Synthesizer
//!
//! Render frequencies into mono 16-bit PCM sample buffers.
//!
//! ## Purpose
//! The theory engine produces frequencies; this module turns them into sound:
//! 1. **Chord mode** - all frequencies sound at once for a fixed duration
//! 2. **Arpeggio mode** - one sixteenth note per frequency at a given BPM
//!
//! ## Sub-modules
//! - `render` - Sine generation, normalization, chord and arpeggio rendering
//!
//! ## Entry Points
//! - [`render_chord()`] - Sum of sines, normalized once over the whole buffer
//! - [`render_arpeggio()`] - Concatenated segments, each normalized on its own
//!
//! ## Example
//! ```rust
//! use chordplay::synth::{render_chord, PEAK_AMPLITUDE};
//!
//! let pcm = render_chord(&[261.63, 329.63, 392.0], 0.5, 44100).unwrap();
//!
//! assert_eq!(pcm.len(), 22050);
//! assert_eq!(pcm.iter().map(|s| s.unsigned_abs()).max(), Some(PEAK_AMPLITUDE as u16));
//! ```
//!
//! ## Normalization
//!
//! ### Chord
//! The summed waveform is scaled so its largest absolute sample equals
//! [`PEAK_AMPLITUDE`]. A waveform that is zero everywhere (for example a
//! single 0 Hz tone) stays silent rather than dividing by zero.
//!
//! ### Arpeggio
//! Every segment is normalized independently, so long inversion runs are no
//! louder or quieter than a single triad.
//!
//! ## Timing
//! - Sample `i` of a tone at `f` Hz is `sin(2π · f · i / sample_rate)`
//! - Buffer lengths are `round(sample_rate × seconds)`, at least one sample
//! - Arpeggio notes last `60 / bpm / 4` seconds (a sixteenth at `bpm`)
//! - Block chords last at most [`MAX_CHORD_DURATION`] seconds
//!
//! Identical inputs always give bit-identical buffers.

mod render;


pub use render::{
    render_arpeggio, render_chord, segment_len, sixteenth_duration, MAX_BPM, MAX_CHORD_DURATION,
    MIN_BPM, PEAK_AMPLITUDE,
};
