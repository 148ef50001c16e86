//! Pointer subscription for the mounted widget
//!
//! Mouse reporting is a terminal-wide setting. [`MouseCapture`] turns it on
//! for as long as the guard lives and turns it off again on drop, so the
//! outside-click listener exists exactly for the widget's mounted lifetime.

use std::io::{self, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

pub struct MouseCapture<W: Write> {
    writer: W,
}

impl<W: Write> MouseCapture<W> {
    pub fn acquire(mut writer: W) -> io::Result<Self> {
        execute!(writer, EnableMouseCapture)?;
        log::debug!("mouse capture enabled");
        Ok(Self { writer })
    }
}

impl<W: Write> Drop for MouseCapture<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.writer, DisableMouseCapture) {
            log::warn!("failed to disable mouse capture: {}", e);
        } else {
            log::debug!("mouse capture released");
        }
    }
}
