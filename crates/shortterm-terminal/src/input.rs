//! Keyboard input handling for the answer prompt.
//!
//! Kept free of terminal I/O so editing behaviour can be tested with
//! synthetic key events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keymap::{Action, Keymap};

/// Result of handling a keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key changed the answer, redraw it
    Handled,
    /// User finished typing
    Confirm,
    /// User asked to leave
    Quit,
    /// Key was ignored
    Unhandled,
}

/// The answer being typed.
#[derive(Debug, Clone, Default)]
pub struct AnswerEditor {
    buffer: String,
}

impl AnswerEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Apply one key event.
    pub fn handle(&mut self, keymap: &Keymap, key: KeyEvent) -> KeyResult {
        if key.kind != KeyEventKind::Press {
            return KeyResult::Unhandled;
        }

        match keymap.action(&key) {
            Some(Action::Quit) => KeyResult::Quit,
            Some(Action::Confirm) => KeyResult::Confirm,
            Some(Action::Erase) => {
                if self.buffer.pop().is_some() {
                    KeyResult::Handled
                } else {
                    KeyResult::Unhandled
                }
            }
            None => self.insert(key),
        }
    }

    fn insert(&mut self, key: KeyEvent) -> KeyResult {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return KeyResult::Unhandled;
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == ' ' => {
                self.buffer.push(c);
                KeyResult::Handled
            }
            _ => KeyResult::Unhandled,
        }
    }
}
