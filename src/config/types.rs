// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::autocomplete::{DEFAULT_DEBOUNCE, DEFAULT_MAX_VISIBLE};
use crate::widgets::spinner::DEFAULT_SPIN_PERIOD;

/// Autocomplete behavior section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub debounce_ms: u64,
    pub max_visible: usize,
    pub fuzzy: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            max_visible: DEFAULT_MAX_VISIBLE,
            fuzzy: false,
        }
    }
}

impl AutocompleteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Spinner animation section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpinnerConfig {
    pub duration_ms: u64,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        SpinnerConfig {
            duration_ms: DEFAULT_SPIN_PERIOD.as_millis() as u64,
        }
    }
}

impl SpinnerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub spinner: SpinnerConfig,
}
