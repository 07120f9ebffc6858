//! Computer keyboard as a one-octave note source
//!
//! Terminals only report key releases when they support the keyboard
//! enhancement protocol. Without it every press releases the previously held
//! note, which plays like a monophonic keyboard.

use crossterm::{
    event::{
        KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use color_eyre::eyre::Result as EyreResult;
use tracing::warn;

use saavy_tone::NoteSender;

/// Key → note, one chromatic octave starting at note 51.
const KEY_MAP: [(char, i32); 13] = [
    ('a', 51),
    ('w', 52),
    ('s', 53),
    ('e', 54),
    ('d', 55),
    ('f', 56),
    ('t', 57),
    ('g', 58),
    ('z', 59),
    ('h', 60),
    ('u', 61),
    ('j', 62),
    ('k', 63),
];

pub fn key_to_note(c: char) -> Option<i32> {
    let c = c.to_ascii_lowercase();
    KEY_MAP
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, note)| *note)
}

/// Puts the terminal in raw mode and restores it on drop.
pub struct RawTerminal {
    enhanced: bool,
}

impl RawTerminal {
    pub fn enter() -> EyreResult<Self> {
        enable_raw_mode()?;
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                std::io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        Ok(Self { enhanced })
    }

    /// Whether key releases are reported.
    pub fn reports_release(&self) -> bool {
        self.enhanced
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
    }
}

pub enum KeyAction {
    Quit,
    Handled,
}

/// Turns key events into note messages.
pub struct NoteKeyboard {
    reports_release: bool,
    /// Last pressed note, released on the next press when releases are not reported
    held: Option<i32>,
}

impl NoteKeyboard {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: None,
        }
    }

    pub fn handle(&mut self, key: KeyEvent, tx: &mut NoteSender) -> KeyAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
            KeyCode::Char(c) => {
                if let Some(note) = key_to_note(c) {
                    self.handle_note(note, key.kind, tx);
                }
            }
            _ => {}
        }
        KeyAction::Handled
    }

    fn handle_note(&mut self, note: i32, kind: KeyEventKind, tx: &mut NoteSender) {
        let result = match kind {
            KeyEventKind::Press => {
                let released = match self.held.take() {
                    Some(prev) if !self.reports_release => tx.note_off(prev),
                    _ => Ok(()),
                };
                self.held = Some(note);
                released.and_then(|_| tx.note_on(note, 1.0))
            }
            KeyEventKind::Release => {
                if self.held == Some(note) {
                    self.held = None;
                }
                tx.note_off(note)
            }
            KeyEventKind::Repeat => Ok(()),
        };

        if let Err(err) = result {
            warn!(%err, "note event not delivered");
        }
    }

    /// Release the held note, if any.
    pub fn release_all(&mut self, tx: &mut NoteSender) {
        if let Err(err) = tx.all_notes_off() {
            warn!(%err, "note event not delivered");
        }
        self.held = None;
    }
}
