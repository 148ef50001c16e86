use std::time::{Duration, Instant};

use ratatui::style::{Modifier, Style};
use ratatui::widgets::ListState;
use tui_textarea::TextArea;

use super::debouncer::Debouncer;
use super::filter::{FilterFn, default_filter};
use super::navigation::HighlightCursor;
use super::props::{AutocompleteProps, ChangeFn, InputChangeFn, RenderFn};
use super::selection::SelectedSet;
use crate::choice::Choice;
use crate::layout::LayoutRegions;
use crate::widgets::Spinner;

fn create_input_textarea(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    if !placeholder.is_empty() {
        textarea.set_placeholder_text(placeholder.to_string());
    }
    textarea
}

/// Option filter and selection controller
///
/// Owns the input text, the debounced filter, the selection, the keyboard
/// cursor and the dropdown visibility. Created per mount, dropped on unmount.
pub struct Autocomplete<T: Choice> {
    pub(super) description: String,
    pub(super) label: String,
    disabled: bool,
    loading: bool,
    multiple: bool,
    options: Vec<T>,
    filter_options: Option<FilterFn<T>>,
    pub(super) render_option: Option<RenderFn<T>>,
    on_change: ChangeFn<T>,
    on_input_change: InputChangeFn,
    pub(super) max_visible: usize,

    pub(super) textarea: TextArea<'static>,
    filtered: Vec<T>,
    is_open: bool,
    selected: SelectedSet<T>,
    cursor: HighlightCursor,
    is_typing: bool,
    debouncer: Debouncer,
    pub(super) spinner: Spinner,
    pub(super) list_state: ListState,
    pub(super) regions: LayoutRegions,
}

impl<T: Choice> Autocomplete<T> {
    /// Mount the widget; the first filter run is due one debounce period after `now`
    pub fn mount(props: AutocompleteProps<T>, now: Instant) -> Self {
        let AutocompleteProps {
            description,
            label,
            placeholder,
            disabled,
            loading,
            multiple,
            options,
            value,
            filter_options,
            render_option,
            on_change,
            on_input_change,
            debounce,
            max_visible,
            spinner_period,
            spinner_color,
        } = props;

        let mut debouncer = Debouncer::new(debounce);
        debouncer.schedule(now);

        Self {
            description,
            label,
            disabled,
            loading,
            multiple,
            options,
            filter_options,
            render_option,
            on_change,
            on_input_change,
            max_visible,
            textarea: create_input_textarea(&placeholder),
            filtered: Vec::new(),
            is_open: false,
            selected: SelectedSet::from_value(value, multiple),
            cursor: HighlightCursor::default(),
            is_typing: false,
            debouncer,
            spinner: Spinner::new(now)
                .with_period(spinner_period)
                .with_color(spinner_color),
            list_state: ListState::default(),
            regions: LayoutRegions::default(),
        }
    }

    /// Current raw input text
    pub fn input_text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the input text as if the user had typed it
    pub fn set_input_text(&mut self, text: &str, now: Instant) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
        self.on_text_changed(now);
    }

    /// Notify the host and (re)start the debounce window
    pub(super) fn on_text_changed(&mut self, now: Instant) {
        let text = self.input_text().to_string();
        (self.on_input_change)(&text);
        self.is_typing = true;
        self.debouncer.schedule(now);
    }

    /// Replace the candidate list; filtering reruns after the debounce period
    pub fn set_options(&mut self, options: Vec<T>, now: Instant) {
        self.options = options;
        self.debouncer.schedule(now);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Advance timers; returns true when visible state changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.is_typing || self.loading {
            self.spinner.advance(now);
            changed = true;
        }

        if self.debouncer.fire_if_due(now) {
            self.run_filter();
            changed = true;
        }

        changed
    }

    /// How long the host may sleep before `tick` has work to do
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let spinner = (self.is_typing || self.loading).then(|| self.spinner.frame_interval());
        match (self.debouncer.time_until_due(now), spinner) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn run_filter(&mut self) {
        let text = self.input_text().to_string();
        let filtered = match &self.filter_options {
            Some(filter) => filter(&self.options, &text),
            None => default_filter(&self.options, &text),
        };

        log::debug!(
            "filtered {} of {} options for {:?}",
            filtered.len(),
            self.options.len(),
            text
        );

        self.is_open = !filtered.is_empty();
        self.filtered = filtered;
        self.cursor.reset();
        self.list_state = ListState::default();
        self.is_typing = false;
    }

    /// Toggle membership and report the new selection to the host
    pub fn toggle_option(&mut self, option: &T) {
        self.selected.toggle(option, self.multiple);
        if !self.multiple {
            self.is_open = false;
        }

        log::debug!("toggled option {:?}", option.id());

        if let Some(selection) = self.selected.snapshot(self.multiple) {
            (self.on_change)(selection);
        }
    }

    pub fn highlight_next(&mut self) {
        self.cursor.next(self.filtered.len());
    }

    pub fn highlight_prev(&mut self) {
        self.cursor.prev(self.filtered.len());
    }

    pub fn highlight(&mut self, index: usize) {
        self.cursor.set(index, self.filtered.len());
    }

    /// Toggle the highlighted option; false when nothing valid is highlighted
    pub fn select_highlighted(&mut self) -> bool {
        let Some(option) = self
            .cursor
            .index()
            .and_then(|i| self.filtered.get(i))
            .cloned()
        else {
            return false;
        };
        self.toggle_option(&option);
        true
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        if self.is_open {
            log::debug!("dropdown closed");
        }
        self.is_open = false;
    }

    pub fn filtered_options(&self) -> &[T] {
        &self.filtered
    }

    pub fn selected_options(&self) -> &[T] {
        self.selected.as_slice()
    }

    pub fn is_selected(&self, option: &T) -> bool {
        self.selected.contains(option)
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// The dropdown is drawn only once typing has settled
    pub fn is_dropdown_visible(&self) -> bool {
        !self.is_typing && self.is_open
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Disabled and loading widgets ignore all input
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn regions(&self) -> &LayoutRegions {
        &self.regions
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
