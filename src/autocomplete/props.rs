//! Host configuration surface
//!
//! Everything is passed by value at mount time except the callbacks.

use std::time::Duration;

use ratatui::style::Color;
use ratatui::text::Line;

use super::debouncer::DEFAULT_DEBOUNCE;
use super::filter::FilterFn;
use super::selection::Selection;
use crate::choice::Choice;
use crate::widgets::spinner::DEFAULT_SPIN_PERIOD;

/// Custom per-option display
pub type RenderFn<T> = Box<dyn Fn(&T) -> Line<'static>>;

/// Fired whenever the selected set changes
pub type ChangeFn<T> = Box<dyn FnMut(Selection<T>)>;

/// Fired on every keystroke with the raw text (not debounced)
pub type InputChangeFn = Box<dyn FnMut(&str)>;

/// Default number of dropdown rows before scrolling
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// Upper bound on dropdown rows; no terminal is taller than this
pub const MAX_VISIBLE_LIMIT: usize = 1024;

pub struct AutocompleteProps<T: Choice> {
    pub description: String,
    pub label: String,
    pub placeholder: String,
    pub disabled: bool,
    pub loading: bool,
    pub multiple: bool,
    pub options: Vec<T>,
    pub value: Vec<T>,
    pub filter_options: Option<FilterFn<T>>,
    pub render_option: Option<RenderFn<T>>,
    pub on_change: ChangeFn<T>,
    pub on_input_change: InputChangeFn,
    pub debounce: Duration,
    pub max_visible: usize,
    pub spinner_period: Duration,
    pub spinner_color: Color,
}

impl<T: Choice> AutocompleteProps<T> {
    /// Required pieces: the candidates and both callbacks
    pub fn new(
        options: Vec<T>,
        on_change: impl FnMut(Selection<T>) + 'static,
        on_input_change: impl FnMut(&str) + 'static,
    ) -> Self {
        Self {
            description: String::new(),
            label: String::new(),
            placeholder: String::new(),
            disabled: false,
            loading: false,
            multiple: false,
            options,
            value: Vec::new(),
            filter_options: None,
            render_option: None,
            on_change: Box::new(on_change),
            on_input_change: Box::new(on_input_change),
            debounce: DEFAULT_DEBOUNCE,
            max_visible: DEFAULT_MAX_VISIBLE,
            spinner_period: DEFAULT_SPIN_PERIOD,
            spinner_color: Color::Blue,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_value(mut self, value: Vec<T>) -> Self {
        self.value = value;
        self
    }

    pub fn with_filter(mut self, filter: FilterFn<T>) -> Self {
        self.filter_options = Some(filter);
        self
    }

    pub fn with_renderer(mut self, render: impl Fn(&T) -> Line<'static> + 'static) -> Self {
        self.render_option = Some(Box::new(render));
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.clamp(1, MAX_VISIBLE_LIMIT);
        self
    }

    pub fn with_spinner_period(mut self, period: Duration) -> Self {
        self.spinner_period = period;
        self
    }

    pub fn with_spinner_color(mut self, color: Color) -> Self {
        self.spinner_color = color;
        self
    }
}
