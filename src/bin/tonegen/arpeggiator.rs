//! Arpeggiator - climbs through notes on a fixed timer
//!
//! Every tick releases the current note and starts the next one up.

use std::time::{Duration, Instant};

use saavy_tone::{NoteSender, QueueFull};

pub struct Arpeggiator {
    /// Note sounding now (released on the next tick)
    note: i32,
    /// Semitones added per tick
    step: i32,
    interval: Duration,
    next_tick: Instant,
}

impl Arpeggiator {
    pub fn new(start_note: i32, step: i32, interval: Duration) -> Self {
        Self {
            note: start_note,
            step,
            interval,
            next_tick: Instant::now(),
        }
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Tick if due. Returns the note that was started.
    pub fn poll(&mut self, now: Instant, tx: &mut NoteSender) -> Result<Option<i32>, QueueFull> {
        if now < self.next_tick {
            return Ok(None);
        }
        self.next_tick = now + self.interval;
        self.tick(tx).map(Some)
    }

    fn tick(&mut self, tx: &mut NoteSender) -> Result<i32, QueueFull> {
        tx.note_off(self.note)?;
        self.note = self.note.saturating_add(self.step);
        tx.note_on(self.note, 1.0)?;
        Ok(self.note)
    }

    /// Release whatever the arpeggiator is holding.
    pub fn stop(&mut self, tx: &mut NoteSender) -> Result<(), QueueFull> {
        tx.note_off(self.note)
    }
}
