use tracing::{debug, trace};

use crate::{
    config::{validate_sample_rate, SynthConfig},
    error::ConfigError,
    synth::{
        message::{MessageReceiver, NoMessages, SynthMessage},
        voice::Voice,
    },
};

/// Seed used by [`PolySynth::new`] for the voices' noise sources.
pub const DEFAULT_SEED: u64 = 0x5AA7_0001;

/// A pool driven only by direct calls on the render thread.
pub type LocalSynth = PolySynth<NoMessages>;

/// Fixed pool of voices plus the mixer that sums them.
///
/// Note events either arrive through a subscribed [`MessageReceiver`]
/// (drained at the top of every [`render_block`](Self::render_block)) or are
/// applied directly with [`note_on`](Self::note_on) / [`note_off`](Self::note_off)
/// from the thread that renders.
///
/// Allocation happens once, in the constructor. Rendering and dispatch are
/// allocation-free and never block.
pub struct PolySynth<R: MessageReceiver = NoMessages> {
    voices: Vec<Voice>,
    receiver: Option<R>,
    sample_rate: f32,
    trigger_count: u64,
}

impl<R: MessageReceiver> PolySynth<R> {
    pub fn new(config: SynthConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, DEFAULT_SEED)
    }

    /// Like [`new`](Self::new), with an explicit noise seed.
    pub fn with_seed(config: SynthConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let voices = (0..config.voice_count)
            .map(|idx| Voice::new(&config, seed.wrapping_add(idx as u64)))
            .collect();

        debug!(
            voices = config.voice_count,
            waveform = %config.waveform,
            gain = config.gain,
            sample_rate = config.sample_rate,
            "voice pool ready"
        );

        Ok(Self {
            voices,
            receiver: None,
            sample_rate: config.sample_rate,
            trigger_count: 0,
        })
    }

    /// Start consuming note events from `rx`. Returns the previous receiver.
    pub fn subscribe(&mut self, rx: R) -> Option<R> {
        trace!("note receiver attached");
        self.receiver.replace(rx)
    }

    /// Stop consuming note events and hand the receiver back.
    ///
    /// Anything still queued stays in the receiver.
    pub fn unsubscribe(&mut self) -> Option<R> {
        trace!("note receiver detached");
        self.receiver.take()
    }

    pub fn is_subscribed(&self) -> bool {
        self.receiver.is_some()
    }

    /// Change the sample rate picked up by subsequent note-ons.
    ///
    /// Call between blocks. Voices already sounding keep the rate they
    /// started with.
    pub fn set_sample_rate(&mut self, sample_rate: f32) -> Result<(), ConfigError> {
        validate_sample_rate(sample_rate)?;
        debug!(sample_rate, "sample rate changed");
        self.sample_rate = sample_rate;
        Ok(())
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn handle(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::NoteOn { note, velocity } => self.note_on(note, velocity),
            SynthMessage::NoteOff { note } => self.note_off(note),
            SynthMessage::AllNotesOff => self.all_notes_off(),
        }
    }

    /// Route a note-on to a voice.
    ///
    /// Preference order: the voice already sounding `note` (retrigger), the
    /// lowest-index idle voice, then the voice triggered longest ago (stolen).
    pub fn note_on(&mut self, note: i32, velocity: f32) {
        self.trigger_count += 1;
        let age = self.trigger_count;
        let sample_rate = self.sample_rate;

        let idx = self
            .find_voice(note)
            .or_else(|| self.voices.iter().position(|v| !v.is_active()))
            .or_else(|| self.oldest_voice());

        if let Some(idx) = idx {
            self.voices[idx].start(note, velocity, sample_rate, age);
        }
    }

    /// Forward a note-off to every voice; only the one bound to `note` stops.
    pub fn note_off(&mut self, note: i32) {
        for voice in &mut self.voices {
            voice.release(note);
        }
    }

    pub fn all_notes_off(&mut self) {
        for voice in &mut self.voices {
            voice.free();
        }
    }

    /// Apply every queued message from the subscribed receiver.
    pub fn process_messages(&mut self) {
        while let Some(msg) = self.receiver.as_mut().and_then(|rx| rx.pop()) {
            self.handle(msg);
        }
    }

    /// Mix all sounding voices into `out`, an interleaved buffer of
    /// `channels` samples per frame.
    ///
    /// Queued messages are applied first. Output is ADDED to what is already
    /// in `out`, so the caller clears it beforehand. No limiting: several
    /// loud voices can push the sum past ±1.
    pub fn render_block(&mut self, out: &mut [f32], channels: usize) {
        self.process_messages();

        for voice in &mut self.voices {
            voice.render(out, channels);
        }
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Number of voices currently sounding.
    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    fn find_voice(&self, note: i32) -> Option<usize> {
        self.voices
            .iter()
            .position(|v| v.is_active() && v.note() == Some(note))
    }

    fn oldest_voice(&self) -> Option<usize> {
        self.voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.age())
            .map(|(idx, _)| idx)
    }
}
