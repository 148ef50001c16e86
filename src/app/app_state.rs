use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::autocomplete::filter::fuzzy_filter;
use crate::autocomplete::{Autocomplete, AutocompleteProps, MAX_VISIBLE_LIMIT, Selection};
use crate::choice::Item;
use crate::cli::Args;
use crate::config::Config;

/// Picker settings merged from CLI flags and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub multiple: bool,
    pub label: String,
    pub description: String,
    pub placeholder: String,
    pub fuzzy: bool,
    pub show_ids: bool,
    pub debounce: Duration,
    pub max_visible: usize,
    pub spinner_period: Duration,
}

impl AppSettings {
    /// CLI flags win over config values
    pub fn from_sources(args: &Args, config: &Config) -> Self {
        Self {
            multiple: args.multiple,
            label: args.label.clone(),
            description: args.description.clone(),
            placeholder: args.placeholder.clone(),
            fuzzy: args.fuzzy || config.autocomplete.fuzzy,
            show_ids: args.show_ids,
            debounce: args
                .debounce_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.autocomplete.debounce()),
            max_visible: config.autocomplete.max_visible.clamp(1, MAX_VISIBLE_LIMIT),
            spinner_period: config.spinner.period(),
        }
    }
}

fn render_with_id(item: &Item) -> Line<'static> {
    Line::from(vec![
        Span::raw(item.label.clone()),
        Span::styled(
            format!(" (ID: {})", item.id),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Demo host: one autocomplete plus quit/output handling
pub struct App {
    pub picker: Autocomplete<Item>,
    pub(super) selection: Rc<RefCell<Option<Selection<Item>>>>,
    pub(super) should_quit: bool,
    pub(super) output: Option<Selection<Item>>,
}

impl App {
    pub fn new(options: Vec<Item>, settings: &AppSettings, now: Instant) -> Self {
        let selection = Rc::new(RefCell::new(None));
        let latest = Rc::clone(&selection);

        let mut props = AutocompleteProps::new(
            options,
            move |changed: Selection<Item>| {
                log::debug!("selection now has {} option(s)", changed.as_slice().len());
                *latest.borrow_mut() = Some(changed);
            },
            |text: &str| log::trace!("input changed to {:?}", text),
        )
        .multiple(settings.multiple)
        .with_label(settings.label.clone())
        .with_description(settings.description.clone())
        .with_placeholder(settings.placeholder.clone())
        .with_debounce(settings.debounce)
        .with_max_visible(settings.max_visible)
        .with_spinner_period(settings.spinner_period)
        .with_spinner_color(Color::Cyan);

        if settings.fuzzy {
            props = props.with_filter(fuzzy_filter());
        }
        if settings.show_ids {
            props = props.with_renderer(render_with_id);
        }

        Self {
            picker: Autocomplete::mount(props, now),
            selection,
            should_quit: false,
            output: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Selection to print once the app exits (None when cancelled)
    pub fn output(&self) -> Option<&Selection<Item>> {
        self.output.as_ref()
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.picker.tick(now)
    }

    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.picker.next_wakeup(now)
    }

    /// Exit and keep the current selection for output
    pub(super) fn finish(&mut self) {
        self.output = self.selection.borrow().clone();
        self.should_quit = true;
    }

    /// Exit without output
    pub(super) fn cancel(&mut self) {
        self.output = None;
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
