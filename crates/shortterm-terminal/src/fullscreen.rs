//! Full-screen frontend.
//!
//! Draws the sequence centered on the alternate screen and echoes the answer
//! live, one key at a time, at a fixed position.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use shortterm_core::error::TrialError;
use shortterm_core::parser::{format_sequence, parse_answer};
use shortterm_core::traits::{Frontend, Recall};

use crate::input::{AnswerEditor, KeyResult};
use crate::keymap::{Action, Keymap};
use crate::session::DisplaySession;

/// Width reserved for the answer line.
const ANSWER_WIDTH: u16 = 40;
const PROMPT: &str = "> ";

/// Somewhere to draw, with a known size in cells.
pub trait Screen: Write {
    /// Current size as `(columns, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
}

impl Screen for DisplaySession {
    fn size(&self) -> Result<(u16, u16)> {
        DisplaySession::size(self)
    }
}

/// A source of terminal events.
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> Result<Event>;
}

/// Reads events from the controlling terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> Result<Event> {
        event::read().context("failed to read terminal event")
    }
}

pub struct FullscreenFrontend<S = DisplaySession, E = TerminalEvents> {
    screen: S,
    events: E,
    keymap: Keymap,
}

impl FullscreenFrontend {
    /// Take over the terminal. It is restored when the frontend is dropped.
    pub fn new(keymap: Keymap) -> Result<Self> {
        Ok(Self::with_parts(
            DisplaySession::acquire()?,
            TerminalEvents,
            keymap,
        ))
    }
}

impl<S: Screen, E: EventSource> FullscreenFrontend<S, E> {
    pub fn with_parts(screen: S, events: E, keymap: Keymap) -> Self {
        Self {
            screen,
            events,
            keymap,
        }
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    fn draw_sequence(&mut self, text: &str) -> Result<()> {
        let (cols, rows) = self.screen.size()?;
        let hint = format!(
            "{} when ready, {} to quit",
            self.keymap.describe(Action::Confirm),
            self.keymap.describe(Action::Quit)
        );
        queue!(
            self.screen,
            Clear(ClearType::All),
            MoveTo(centered_column(cols, text), middle_row(rows)),
            Print(text),
            MoveTo(centered_column(cols, &hint), middle_row(rows) + 2),
            Print(&hint)
        )?;
        self.screen.flush()?;
        Ok(())
    }

    fn draw_answer(&mut self, text: &str) -> Result<()> {
        let (cols, rows) = self.screen.size()?;
        let column = cols.saturating_sub(ANSWER_WIDTH) / 2;
        queue!(
            self.screen,
            MoveTo(column, middle_row(rows)),
            Clear(ClearType::UntilNewLine),
            Print(PROMPT),
            Print(visible_tail(text, ANSWER_WIDTH as usize - PROMPT.len() - 1)),
            Print("_")
        )?;
        self.screen.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.screen, Clear(ClearType::All))?;
        self.screen.flush()?;
        Ok(())
    }
}

impl<S: Screen, E: EventSource> Frontend for FullscreenFrontend<S, E> {
    fn present(&mut self, numbers: &[i64]) -> Result<Instant> {
        let text = format_sequence(numbers);
        let shown_at = Instant::now();
        self.draw_sequence(&text)?;

        loop {
            match self.events.next_event()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match self.keymap.action(&key) {
                        Some(Action::Confirm) => break,
                        Some(Action::Quit) => return Err(TrialError::Aborted.into()),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => self.draw_sequence(&text)?,
                _ => {}
            }
        }

        self.clear()?;
        Ok(shown_at)
    }

    fn collect(&mut self) -> Result<Recall> {
        let mut editor = AnswerEditor::new();
        self.draw_answer(editor.text())?;

        let finished_at = loop {
            match self.events.next_event()? {
                Event::Key(key) => match editor.handle(&self.keymap, key) {
                    KeyResult::Confirm => break Instant::now(),
                    KeyResult::Quit => return Err(TrialError::Aborted.into()),
                    KeyResult::Handled => self.draw_answer(editor.text())?,
                    KeyResult::Unhandled => {}
                },
                Event::Resize(_, _) => {
                    self.clear()?;
                    self.draw_answer(editor.text())?;
                }
                _ => {}
            }
        };

        self.clear()?;
        Ok(Recall {
            answer: parse_answer(editor.text()),
            finished_at,
        })
    }
}

/// Column at which `text` starts when centered in `width` columns.
fn centered_column(width: u16, text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    width.saturating_sub(len) / 2
}

fn middle_row(height: u16) -> u16 {
    height / 2
}

/// The last `max` characters of `text`, so long answers scroll left.
fn visible_tail(text: &str, max: usize) -> &str {
    let count = text.chars().count();
    if count <= max {
        return text;
    }
    let skip = count - max;
    let start = text
        .char_indices()
        .nth(skip)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[start..]
}
