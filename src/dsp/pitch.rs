/*
Note to Frequency
=================

Equal temperament splits the octave into 12 identical ratios, so every
semitone multiplies the frequency by 2^(1/12) ≈ 1.0595.

    frequency = reference_frequency * 2^((note - reference_note) / 12)

With the usual anchor (note 69 = A4 = 440 Hz):

    note 57 (A3)  →  220 Hz
    note 60 (C4)  →  261.63 Hz
    note 69 (A4)  →  440 Hz
    note 81 (A5)  →  880 Hz

Any integer is a valid note. Negative or huge numbers just give very low or
very high frequencies; nothing here can fail. Results past the f32 range
saturate at f32::MAX instead of becoming infinite. The exponent is evaluated
in f64 and rounded once at the end, which keeps the anchor exact and the
semitone ratio within f32 rounding.
*/

/// MIDI note number of the default reference pitch (A4).
pub const REFERENCE_NOTE: i32 = 69;
/// Frequency of the default reference pitch in Hz.
pub const REFERENCE_FREQUENCY: f32 = 440.0;

/// Equal-tempered tuning anchored at one reference note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub reference_note: i32,
    pub reference_frequency: f32,
}

impl Tuning {
    pub const fn new(reference_note: i32, reference_frequency: f32) -> Self {
        Self {
            reference_note,
            reference_frequency,
        }
    }

    /// Frequency in Hz of `note`.
    #[inline]
    pub fn frequency(&self, note: i32) -> f32 {
        let semitones = (i64::from(note) - i64::from(self.reference_note)) as f64;
        let frequency = f64::from(self.reference_frequency) * (semitones / 12.0).exp2();
        frequency.min(f64::from(f32::MAX)) as f32
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new(REFERENCE_NOTE, REFERENCE_FREQUENCY)
    }
}

/// Convert a note number to Hz with A4 (69) = 440 Hz.
#[inline]
pub fn note_to_freq(note: i32) -> f32 {
    Tuning::default().frequency(note)
}
