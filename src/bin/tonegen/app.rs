//! Tonegen - application builder and runner

use std::time::{Duration, Instant};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::event::{self, Event};
use tracing::{error, info, warn};

use saavy_tone::{note_channel, PolySynth, SynthConfig, Waveform, MAX_BLOCK_SIZE};

use super::arpeggiator::Arpeggiator;
use super::keyboard::{KeyAction, NoteKeyboard, RawTerminal};

/// Queue depth for note messages; far more than a player can press per block
const NOTE_QUEUE_CAPACITY: usize = 256;
/// How often the input loop wakes up when nothing is pending
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Main application builder
pub struct Tonegen {
    config: SynthConfig,
    arpeggiate: bool,
}

impl Tonegen {
    pub fn new() -> Self {
        Self {
            config: SynthConfig::new().voices(4),
            arpeggiate: false,
        }
    }

    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.config = self.config.waveform(waveform);
        self
    }

    pub fn voices(mut self, voices: usize) -> Self {
        self.config = self.config.voices(voices);
        self
    }

    pub fn gain(mut self, gain: f32) -> Self {
        self.config = self.config.gain(gain);
        self
    }

    /// Run the arpeggiator alongside the keyboard
    pub fn arpeggiate(mut self, enabled: bool) -> Self {
        self.arpeggiate = enabled;
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;

        let config = self.config.sample_rate(sample_rate);
        let mut synth = PolySynth::new(config).wrap_err("invalid synth configuration")?;
        let (mut tx, rx) = note_channel(NOTE_QUEUE_CAPACITY);
        synth.subscribe(rx);

        info!(
            sample_rate,
            channels,
            voices = config.voice_count,
            waveform = %config.waveform,
            "audio ready"
        );

        // The callback owns the synth; the only shared state is the note queue
        let stream = device.build_output_stream(
            &stream_config.into(),
            move |data: &mut [f32], _| {
                for block in data.chunks_mut(MAX_BLOCK_SIZE * channels.max(1)) {
                    block.fill(0.0);
                    synth.render_block(block, channels);
                }
            },
            |err| error!(%err, "audio stream error"),
            None,
        )?;

        stream.play()?;

        println!("=== Tonegen ===");
        println!("Keys: A W S E D F T G Z H U J K  |  Q / Esc to quit");

        let terminal = RawTerminal::enter()?;
        if !terminal.reports_release() {
            warn!("terminal does not report key releases; each press replaces the last note");
        }
        let mut keyboard = NoteKeyboard::new(terminal.reports_release());
        let mut arpeggiator = self
            .arpeggiate
            .then(|| Arpeggiator::new(60, 1, Duration::from_millis(500)));

        loop {
            let now = Instant::now();
            let timeout = arpeggiator
                .as_ref()
                .map_or(IDLE_POLL, |arp| arp.until_next(now).min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let KeyAction::Quit = keyboard.handle(key, &mut tx) {
                        break;
                    }
                }
            }

            if let Some(arp) = arpeggiator.as_mut() {
                if let Err(err) = arp.poll(Instant::now(), &mut tx) {
                    warn!(%err, "arpeggiator note not delivered");
                }
            }
        }

        if let Some(arp) = arpeggiator.as_mut() {
            if let Err(err) = arp.stop(&mut tx) {
                warn!(%err, "arpeggiator note-off not delivered");
            }
        }
        keyboard.release_all(&mut tx);
        drop(terminal);

        Ok(())
    }
}

impl Default for Tonegen {
    fn default() -> Self {
        Self::new()
    }
}
