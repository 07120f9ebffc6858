//! Real-world scenario benchmarks.
//!
//! These render full pools the way an audio callback would: clear the
//! buffer, then let the pool add every sounding voice into it.

mod channels;
mod voices;

pub use channels::bench_channels;
pub use voices::bench_voices;
