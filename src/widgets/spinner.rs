//! Animated spinner glyph
//!
//! Frames are derived from elapsed time, so the spinner only moves when the
//! owner calls [`Spinner::advance`].

use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Time for one full revolution
pub const DEFAULT_SPIN_PERIOD: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct Spinner {
    started: Instant,
    period: Duration,
    color: Color,
    frame: usize,
}

impl Spinner {
    pub fn new(now: Instant) -> Self {
        Self {
            started: now,
            period: DEFAULT_SPIN_PERIOD,
            color: Color::Blue,
            frame: 0,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        // A zero period would divide by zero in advance()
        self.period = period.max(Duration::from_millis(FRAMES.len() as u64));
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn advance(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        let period = self.period.as_millis();
        let frames = FRAMES.len() as u128;
        self.frame = ((elapsed * frames / period) % frames) as usize;
    }

    /// How long one frame stays on screen
    pub fn frame_interval(&self) -> Duration {
        self.period / FRAMES.len() as u32
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.glyph(), Style::default().fg(self.color))
    }

    /// Spinner followed by a status message
    pub fn line(&self, message: &str) -> Line<'static> {
        Line::from(vec![
            self.span(),
            Span::raw(" "),
            Span::styled(message.to_string(), Style::default().fg(Color::Gray)),
        ])
    }
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod spinner_tests;
