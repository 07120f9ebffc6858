//! Low-level DSP primitives used by the voices.
//!
//! Both modules are pure and allocation-free, so they are safe to call from
//! the audio callback.

/// Waveform shapes and the noise source.
pub mod oscillator;
/// Note number to frequency conversion.
pub mod pitch;
