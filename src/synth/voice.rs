use std::f64::consts::TAU;

use rand::SeedableRng;

use crate::{
    config::SynthConfig,
    dsp::{
        oscillator::{NoiseSource, Waveform},
        pitch::Tuning,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Idle,     // No note bound, contributes nothing
    Sounding, // Bound to a note, writing every frame
}

/// One reusable oscillator slot.
///
/// Voices are created once, when the pool is built, and live as long as the
/// pool. A note-on binds a note to the slot; a matching note-off frees it
/// again. The phase belongs to the voice and only moves inside `render`.
pub struct Voice {
    state: VoiceState,
    note: Option<i32>,
    velocity: f32,
    frequency: f32,
    phase: f64,
    increment: f64,
    sample_rate: f32,
    age: u64,
    waveform: Waveform,
    gain: f32,
    amplitude: f32,
    velocity_sensitive: bool,
    tuning: Tuning,
    rng: NoiseSource,
}

impl Voice {
    /// An idle voice using `config`'s waveform, gain and tuning.
    ///
    /// `seed` feeds the noise source, so equal seeds give equal noise.
    pub fn new(config: &SynthConfig, seed: u64) -> Self {
        Self {
            state: VoiceState::Idle,
            note: None,
            velocity: 0.0,
            frequency: 0.0,
            phase: 0.0,
            increment: 0.0,
            sample_rate: config.sample_rate,
            age: 0,
            waveform: config.waveform,
            gain: config.gain,
            amplitude: 0.0,
            velocity_sensitive: config.velocity_sensitive,
            tuning: config.tuning(),
            rng: NoiseSource::seed_from_u64(seed),
        }
    }

    /// Bind `note` and start sounding from phase zero.
    ///
    /// Also used to retrigger a voice that is already sounding. `sample_rate`
    /// must already be validated; `age` orders voices for stealing.
    pub fn start(&mut self, note: i32, velocity: f32, sample_rate: f32, age: u64) {
        debug_assert!(sample_rate > 0.0, "sample rate must be validated up front");

        self.note = Some(note);
        self.velocity = velocity;
        self.frequency = self.tuning.frequency(note);
        self.phase = 0.0;
        self.sample_rate = sample_rate;
        // Whole cycles per step are inaudible; keep only the remainder
        let increment =
            2.0 * f64::from(self.frequency) * std::f64::consts::PI / f64::from(sample_rate);
        self.increment = if increment.is_finite() {
            increment % TAU
        } else {
            0.0
        };
        self.amplitude = if self.velocity_sensitive && velocity.is_nan() {
            0.0
        } else if self.velocity_sensitive {
            self.gain * velocity.clamp(0.0, 1.0)
        } else {
            self.gain
        };
        self.age = age;
        self.state = VoiceState::Sounding;
    }

    /// Stop if this voice is sounding `note`. Returns whether it stopped.
    ///
    /// A note-off for any other note is ignored.
    pub fn release(&mut self, note: i32) -> bool {
        if self.state == VoiceState::Sounding && self.note == Some(note) {
            self.free();
            true
        } else {
            false
        }
    }

    /// Return to idle regardless of the bound note.
    pub fn free(&mut self) {
        self.state = VoiceState::Idle;
        self.note = None;
    }

    /// Add this voice's output into an interleaved buffer.
    ///
    /// One value per frame, copied to every channel. A trailing partial
    /// frame is left untouched. Idle voices write nothing.
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        if self.state != VoiceState::Sounding || channels == 0 {
            return;
        }

        for frame in out.chunks_exact_mut(channels) {
            self.advance();
            let sample = self
                .waveform
                .evaluate(self.phase, self.amplitude, &mut self.rng);
            for slot in frame {
                *slot += sample;
            }
        }
    }

    /// Step the phase by one sample, wrapping into [0, 2π).
    #[inline]
    fn advance(&mut self) {
        self.phase += self.increment;
        if self.phase >= TAU {
            self.phase %= TAU;
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == VoiceState::Sounding
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn note(&self) -> Option<i32> {
        self.note
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }
}
