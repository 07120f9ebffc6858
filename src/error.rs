//! Error types.
//!
//! Everything that can go wrong is caught while setting up the synth. Once
//! `render_block` is running there is no error path: unmatched note-offs and
//! voice stealing are defined behaviour, not failures.

use thiserror::Error;

use crate::synth::message::SynthMessage;

/// Invalid configuration, detected before the render path starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sample rate must be a positive, finite number of Hz (got {0})")]
    InvalidSampleRate(f32),

    #[error("voice pool needs at least one voice")]
    NoVoices,

    #[error("unsupported waveform `{0}` (expected sine, square, triangle, sawtooth or noise)")]
    UnsupportedWaveform(String),

    #[error("gain must lie in [0, 1] (got {0})")]
    InvalidGain(f32),

    #[error("reference frequency must be a positive, finite number of Hz (got {0})")]
    InvalidReferenceFrequency(f32),
}

/// The note channel is full; the rejected message is handed back to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("note queue is full, dropped {0:?}")]
pub struct QueueFull(pub SynthMessage);
