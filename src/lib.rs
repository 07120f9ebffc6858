//! Polyphonic tone generator.
//!
//! Note events go in, interleaved samples come out:
//!
//! ```text
//! NoteOn / NoteOff ──> PolySynth ──> Voice (phase) ──> Waveform ──> mix ──> buffer
//! ```
//!
//! Everything on the render path is allocation-free and non-blocking. All
//! validation happens up front, in [`SynthConfig::validate`] and the
//! [`PolySynth`] constructor.
//!
//! ```
//! use saavy_tone::{LocalSynth, SynthConfig, Waveform};
//!
//! let mut synth = LocalSynth::new(SynthConfig::new().waveform(Waveform::Sine))?;
//! synth.note_on(69, 1.0);
//!
//! let mut buffer = vec![0.0f32; 256 * 2];
//! synth.render_block(&mut buffer, 2);
//! assert!(buffer.iter().any(|s| *s != 0.0));
//! # Ok::<(), saavy_tone::ConfigError>(())
//! ```

pub mod config;
pub mod dsp; // Waveforms and tuning
pub mod error;
pub mod synth; // Voice management and polyphony

pub use config::SynthConfig;
pub use dsp::{
    oscillator::{NoiseSource, Waveform},
    pitch::{note_to_freq, Tuning},
};
pub use error::{ConfigError, QueueFull};
#[cfg(feature = "rtrb")]
pub use synth::channel::{note_channel, NoteSender};
pub use synth::{
    message::{MessageReceiver, SynthMessage},
    poly::{LocalSynth, PolySynth},
    voice::{Voice, VoiceState},
};

/// Largest block a host should hand to `render_block` in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
