//! Owned terminal display session.
//!
//! Acquiring a session switches the terminal into raw mode on the alternate
//! screen with the cursor hidden. Dropping it restores the terminal, so every
//! exit path (normal return, `?`, the quit key, a panic unwinding) leaves the
//! user's shell usable.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

pub struct DisplaySession {
    out: Stdout,
}

impl DisplaySession {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e).context("failed to enter alternate screen");
        }
        tracing::debug!("display session acquired");
        Ok(Self { out })
    }

    /// Current terminal size as `(columns, rows)`.
    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("failed to query terminal size")
    }
}

impl Write for DisplaySession {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for DisplaySession {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        tracing::debug!("display session released");
    }
}
