use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_pcg::Pcg32;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/*
Waveform Evaluation
===================

An oscillator turns a phase (where we are inside one cycle, in radians) into
a sample value. Voices own the running phase and advance it; this module is
just the shape function, evaluated once per frame.

Phase is always in [0, 2π) when it arrives here. Every shape is scaled by
`gain`, so output stays inside [-gain, gain].

  Sine       gain * sin(phase)

               ╭─╮       ╭─╮
              ╱   ╲     ╱   ╲
             ╱     ╲   ╱     ╲
                    ╰─╯       ╰─

  Square     +gain while sin(phase) >= 0, -gain otherwise. Hard edges, not
             band-limited, so it aliases at high pitches.

  Triangle   gain * (2 * ping_pong(phase, 1) - 1)

             ping_pong folds the phase back and forth across [0, 1]. Because
             the phase runs to 2π rather than 1, the fold repeats a little
             over three times per cycle: the triangle sounds roughly π times
             higher than the note. Kept as-is to match the reference sound.

  Sawtooth   gain * inverse_lerp(0, 2π, phase)

             A UNIPOLAR ramp from 0 up to gain, then a drop back to 0. A
             textbook sawtooth would run -gain..gain; this one has a DC offset
             of gain/2. Also kept as-is to match the reference sound.

  Noise      gain * (2 * uniform[0, 1) - 1)

             White noise. Each evaluation draws a fresh value from the
             caller's random source, so a seeded source gives repeatable
             noise.
*/

/// Random source used for noise. Seedable so tests get repeatable output.
pub type NoiseSource = Pcg32;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
    Noise,
}

impl Waveform {
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::Noise,
    ];

    /// Evaluate one sample at `phase` (radians, in [0, 2π)).
    ///
    /// Only `Noise` touches `rng`.
    #[inline]
    pub fn evaluate<R: Rng>(self, phase: f64, gain: f32, rng: &mut R) -> f32 {
        match self {
            Waveform::Sine => gain * phase.sin() as f32,
            Waveform::Square => {
                if phase.sin() >= 0.0 {
                    gain
                } else {
                    -gain
                }
            }
            Waveform::Triangle => gain * (2.0 * ping_pong(phase as f32, 1.0) - 1.0),
            Waveform::Sawtooth => gain * inverse_lerp(0.0, TAU as f32, phase as f32),
            Waveform::Noise => gain * (2.0 * rng.random::<f32>() - 1.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Noise => "noise",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "triangle" => Ok(Waveform::Triangle),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            "noise" => Ok(Waveform::Noise),
            _ => Err(ConfigError::UnsupportedWaveform(s.to_string())),
        }
    }
}

/// Fold `t` back and forth across `[0, length]`.
#[inline]
pub fn ping_pong(t: f32, length: f32) -> f32 {
    let t = repeat(t, length * 2.0);
    length - (t - length).abs()
}

/// Wrap `t` into `[0, length]`.
#[inline]
fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Where `value` sits between `a` and `b`, clamped to `[0, 1]`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}
