//! Searchable single/multi-select autocomplete for ratatui
//!
//! [`autocomplete::Autocomplete`] is the embeddable widget. The `pickbox`
//! binary wraps it in a small terminal picker built from [`app::App`].

pub mod app;
pub mod autocomplete;
pub mod choice;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod source;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
mod test_utils;
