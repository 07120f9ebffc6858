// Purpose: Voice management, polyphony, note-event handoff
// This layer sits above the dsp primitives and owns all per-note state

#[cfg(feature = "rtrb")]
pub mod channel;
pub mod message;
pub mod poly;
pub mod voice;
