#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{
        oscillator::Waveform,
        pitch::{Tuning, REFERENCE_FREQUENCY, REFERENCE_NOTE},
    },
    error::ConfigError,
};

/// Everything that is set once (or rarely) before audio starts.
///
/// ```
/// use saavy_tone::{SynthConfig, Waveform};
///
/// let config = SynthConfig::new()
///     .sample_rate(44_100.0)
///     .voices(4)
///     .waveform(Waveform::Square)
///     .gain(0.25);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: f32,
    /// Size of the fixed voice pool.
    pub voice_count: usize,
    pub waveform: Waveform,
    /// Output scale per voice, 0.0 to 1.0.
    pub gain: f32,
    pub reference_note: i32,
    pub reference_frequency: f32,
    /// Scale each voice by its note-on velocity.
    pub velocity_sensitive: bool,
}

impl SynthConfig {
    pub fn new() -> Self {
        Self {
            sample_rate: 48_000.0,
            voice_count: 1,
            waveform: Waveform::Sine,
            gain: 0.5,
            reference_note: REFERENCE_NOTE,
            reference_frequency: REFERENCE_FREQUENCY,
            velocity_sensitive: false,
        }
    }

    pub fn sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn voices(mut self, voice_count: usize) -> Self {
        self.voice_count = voice_count;
        self
    }

    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Anchor the tuning: `note` sounds at `frequency` Hz.
    pub fn reference(mut self, note: i32, frequency: f32) -> Self {
        self.reference_note = note;
        self.reference_frequency = frequency;
        self
    }

    pub fn velocity_sensitive(mut self, enabled: bool) -> Self {
        self.velocity_sensitive = enabled;
        self
    }

    pub fn tuning(&self) -> Tuning {
        Tuning::new(self.reference_note, self.reference_frequency)
    }

    /// Check every field. Must pass before the render path starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sample_rate(self.sample_rate)?;
        if self.voice_count < 1 {
            return Err(ConfigError::NoVoices);
        }
        if !(0.0..=1.0).contains(&self.gain) {
            return Err(ConfigError::InvalidGain(self.gain));
        }
        if !self.reference_frequency.is_finite() || self.reference_frequency <= 0.0 {
            return Err(ConfigError::InvalidReferenceFrequency(
                self.reference_frequency,
            ));
        }
        Ok(())
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_sample_rate(sample_rate: f32) -> Result<(), ConfigError> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSampleRate(sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SynthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tuning(), Tuning::default());
    }

    #[test]
    fn rejects_bad_sample_rates() {
        for rate in [0.0, -44_100.0, f32::NAN, f32::INFINITY] {
            let err = SynthConfig::new().sample_rate(rate).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidSampleRate(_)), "{rate}");
        }
    }

    #[test]
    fn rejects_empty_pool() {
        assert_eq!(
            SynthConfig::new().voices(0).validate(),
            Err(ConfigError::NoVoices)
        );
    }

    #[test]
    fn rejects_out_of_range_gain() {
        assert_eq!(
            SynthConfig::new().gain(1.5).validate(),
            Err(ConfigError::InvalidGain(1.5))
        );
        assert!(SynthConfig::new().gain(f32::NAN).validate().is_err());
        assert!(SynthConfig::new().gain(0.0).validate().is_ok());
        assert!(SynthConfig::new().gain(1.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_reference_frequency() {
        assert_eq!(
            SynthConfig::new().reference(69, 0.0).validate(),
            Err(ConfigError::InvalidReferenceFrequency(0.0))
        );
    }
}
