//! Lock-free handoff from the control thread to the render thread.
//!
//! The input side keeps a [`NoteSender`]; the render side hands the matching
//! `Consumer` to [`PolySynth::subscribe`](crate::synth::poly::PolySynth::subscribe).
//! Messages are applied in order at the top of the next `render_block`, so
//! voice state never changes mid-block.

use rtrb::{Consumer, Producer, PushError, RingBuffer};
use tracing::trace;

use crate::{error::QueueFull, synth::message::SynthMessage};

/// Create a single-producer/single-consumer note channel.
///
/// `capacity` is fixed; the ring is allocated here, never on the audio thread.
pub fn note_channel(capacity: usize) -> (NoteSender, Consumer<SynthMessage>) {
    let (tx, rx) = RingBuffer::<SynthMessage>::new(capacity);
    (NoteSender { tx }, rx)
}

/// Control-side end of a note channel.
pub struct NoteSender {
    tx: Producer<SynthMessage>,
}

impl NoteSender {
    pub fn send(&mut self, msg: SynthMessage) -> Result<(), QueueFull> {
        trace!(?msg, "queue note message");
        self.tx.push(msg).map_err(|err| match err {
            PushError::Full(msg) => QueueFull(msg),
        })
    }

    pub fn note_on(&mut self, note: i32, velocity: f32) -> Result<(), QueueFull> {
        self.send(SynthMessage::NoteOn { note, velocity })
    }

    pub fn note_off(&mut self, note: i32) -> Result<(), QueueFull> {
        self.send(SynthMessage::NoteOff { note })
    }

    pub fn all_notes_off(&mut self) -> Result<(), QueueFull> {
        self.send(SynthMessage::AllNotesOff)
    }

    /// Free slots left in the ring.
    pub fn slots(&self) -> usize {
        self.tx.slots()
    }

    /// True once the consumer has been dropped.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_abandoned()
    }
}
