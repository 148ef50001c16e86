//! Keyboard and pointer handling for the autocomplete

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tui_textarea::Input;

use super::Autocomplete;
use crate::choice::Choice;
use crate::layout::{Region, region_at};

impl<T: Choice> Autocomplete<T> {
    /// Handle a key press; returns true when the widget consumed it
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if !self.is_interactive() {
            return false;
        }

        match key.code {
            KeyCode::Down => {
                self.reopen_if_settled();
                self.highlight_next();
                true
            }
            KeyCode::Up => {
                self.reopen_if_settled();
                self.highlight_prev();
                true
            }
            KeyCode::Enter => {
                self.select_highlighted();
                true
            }
            KeyCode::Esc if self.is_open() => {
                self.close();
                true
            }
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => false,
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            _ => {
                if self.textarea.input(Input::from(key)) {
                    self.on_text_changed(now);
                }
                true
            }
        }
    }

    /// Handle a mouse event; returns true when state changed
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !self.is_interactive() {
            return false;
        }

        let region = region_at(&self.regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(_) => self.pointer_down(region),
            MouseEventKind::Moved => match region {
                Some(Region::Row(index)) if self.highlighted_index() != Some(index) => {
                    self.highlight(index);
                    true
                }
                _ => false,
            },
            MouseEventKind::ScrollDown if region.is_some_and(|r| r != Region::Input) => {
                self.highlight_next();
                true
            }
            MouseEventKind::ScrollUp if region.is_some_and(|r| r != Region::Input) => {
                self.highlight_prev();
                true
            }
            _ => false,
        }
    }

    fn pointer_down(&mut self, region: Option<Region>) -> bool {
        match region {
            Some(Region::Row(index)) => {
                let Some(option) = self.filtered_options().get(index).cloned() else {
                    return false;
                };
                self.highlight(index);
                self.toggle_option(&option);
                true
            }
            Some(Region::Input) | Some(Region::List) => false,
            None if self.is_open() => {
                log::debug!("pointer down outside the widget");
                self.close();
                true
            }
            None => false,
        }
    }

    fn reopen_if_settled(&mut self) {
        if !self.is_open() && !self.is_typing() {
            self.open();
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_events_tests.rs"]
mod autocomplete_events_tests;
