use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Route one terminal event; returns true if a redraw is needed
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            // Only presses, to avoid duplicates on terminals that report releases
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
                true
            }
            Event::Mouse(mouse) => self.picker.handle_mouse(mouse),
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::debug!("cancelled");
            self.cancel();
            return;
        }

        if self.picker.handle_key(key, now) {
            return;
        }

        // Esc the picker did not consume means the list is already closed
        if key.code == KeyCode::Esc {
            self.finish();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
