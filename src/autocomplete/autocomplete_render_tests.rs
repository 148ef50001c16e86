//! Tests for autocomplete rendering

use std::time::Instant;

use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Line;

use crate::autocomplete::Autocomplete;
use crate::choice::{Choice, Item};
use crate::test_utils::test_helpers::{DEBOUNCE, fruit_options, recording_props, settled_widget};

const TEST_WIDTH: u16 = 50;
const TEST_HEIGHT: u16 = 16;

const SNAPSHOT_WIDTH: u16 = 30;
const SNAPSHOT_HEIGHT: u16 = 10;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_widget(widget: &mut Autocomplete<Item>, width: u16, height: u16) -> String {
    render_terminal(widget, width, height).backend().to_string()
}

fn render_terminal(widget: &mut Autocomplete<Item>, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal(width, height);
    terminal
        .draw(|f| {
            let area = f.area();
            super::render_autocomplete(widget, f, area);
        })
        .unwrap();
    terminal
}

fn line_containing<'a>(output: &'a str, needle: &str) -> Option<&'a str> {
    output.lines().find(|line| line.contains(needle))
}

#[test]
fn test_renders_every_option_with_checkbox() {
    let (mut widget, _, _) = settled_widget(true);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    for option in fruit_options() {
        let line = line_containing(&output, option.label()).unwrap();
        assert!(line.contains("[ ] "), "missing checkbox in {line}");
    }
}

#[test]
fn test_selected_option_is_checked_and_echoed_as_chip() {
    let (mut widget, _, now) = settled_widget(true);
    widget.toggle_option(&Item::new(4, "Date"));
    widget.set_input_text("d", now);
    widget.tick(now + DEBOUNCE);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    let lines: Vec<&str> = output.lines().collect();

    // Chips sit right under the input, the dropdown below them
    assert!(lines[3].contains(" Date "));
    assert!(!lines[3].contains("[x]"));
    assert!(output.contains("[x] Date"));
}

#[test]
fn test_description_and_label_lines() {
    let (props, _) = recording_props(fruit_options());
    let mut widget = Autocomplete::mount(
        props
            .with_description("Fruit basket")
            .with_label("Choose options"),
        Instant::now(),
    );

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].contains("Fruit basket"));
    assert!(lines[1].contains("Choose options"));
    assert_eq!(widget.regions().input, Some(Rect::new(0, 2, TEST_WIDTH, 3)));
}

#[test]
fn test_placeholder_and_search_glyph() {
    let (props, _) = recording_props(fruit_options());
    let mut widget =
        Autocomplete::mount(props.with_placeholder("Type to search..."), Instant::now());

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);
    let input_line = line_containing(&output, "Type to search...").unwrap();

    assert!(input_line.contains("⌕"));
}

#[test]
fn test_no_dropdown_while_typing() {
    let (mut widget, _, now) = settled_widget(true);
    widget.set_input_text("a", now);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(!output.contains("Banana"));
    assert!(widget.regions().list.is_none());
}

#[test]
fn test_empty_state_row_when_open_without_matches() {
    let (mut widget, _, now) = settled_widget(true);
    widget.set_input_text("zzz", now);
    widget.tick(now + DEBOUNCE);
    widget.open();

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("No options"));
    assert!(widget.regions().rows.is_none());
    assert!(widget.regions().list.is_some());
}

#[test]
fn test_closed_list_is_not_drawn() {
    let (mut widget, _, _) = settled_widget(true);
    widget.close();

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(!output.contains("Apple"));
}

#[test]
fn test_highlight_marker_on_highlighted_row() {
    let (mut widget, _, _) = settled_widget(true);
    widget.highlight(2);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);
    let line = line_containing(&output, "Cherry").unwrap();

    assert!(line.contains("► [ ] Cherry"));
}

#[test]
fn test_custom_renderer_output() {
    let (props, _) = recording_props(fruit_options());
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(
        props.with_renderer(|item: &Item| Line::from(format!("{} (ID: {})", item.label, item.id))),
        t0,
    );
    widget.tick(t0 + DEBOUNCE);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Banana (ID: 2)"));
}

#[test]
fn test_max_visible_limits_rows() {
    let (props, _) = recording_props(fruit_options());
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(props.with_max_visible(2), t0);
    widget.tick(t0 + DEBOUNCE);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Apple"));
    assert!(output.contains("Banana"));
    assert!(!output.contains("Cherry"));
    assert_eq!(widget.regions().list.map(|r| r.height), Some(4));
}

#[test]
fn test_highlight_scrolls_list() {
    let (props, _) = recording_props(fruit_options());
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(props.with_max_visible(2), t0);
    widget.tick(t0 + DEBOUNCE);
    widget.highlight(4);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Elderberry"));
    assert!(!output.contains("Apple"));
    assert_eq!(widget.regions().rows.map(|r| r.offset), Some(3));
}

#[test]
fn test_disabled_renders_nothing() {
    let (props, _) = recording_props(fruit_options());
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(props.disabled(true).with_label("Hidden"), t0);
    widget.tick(t0 + DEBOUNCE);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.lines().all(|line| line.trim_matches('"').trim().is_empty()));
    assert!(widget.regions().input.is_none());
}

#[test]
fn test_loading_renders_only_indicator() {
    let (props, _) = recording_props(fruit_options());
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(props.loading(true).with_label("Hidden"), t0);
    widget.tick(t0 + DEBOUNCE);

    let output = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Loading..."));
    assert!(!output.contains("Hidden"));
    assert!(!output.contains("Apple"));
    assert!(widget.regions().input.is_none());
}

#[test]
fn test_small_terminal_does_not_panic() {
    let (mut widget, _, _) = settled_widget(true);

    let output = render_widget(&mut widget, 10, 4);

    assert!(!output.is_empty());
    assert!(widget.regions().list.is_none());
}

#[test]
fn snapshot_settled_dropdown() {
    let (mut widget, _, _) = settled_widget(true);

    let output = render_widget(&mut widget, SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);
    assert_snapshot!(output, @r#"
    "┌────────────────────────────┐"
    "│⌕                           │"
    "└────────────────────────────┘"
    "┌────────────────────────────┐"
    "│  [ ] Apple                 │"
    "│  [ ] Banana                │"
    "│  [ ] Cherry                │"
    "│  [ ] Date                  │"
    "│  [ ] Elderberry            │"
    "└────────────────────────────┘"
    "#);
}

#[test]
fn snapshot_chips_above_highlighted_dropdown() {
    let (mut widget, _, _) = settled_widget(true);
    widget.toggle_option(&Item::new(1, "Apple"));
    widget.highlight(1);

    let output = render_widget(&mut widget, SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);
    assert_snapshot!(output, @r#"
    "┌────────────────────────────┐"
    "│⌕                           │"
    "└────────────────────────────┘"
    " Apple                        "
    "┌────────────────────────────┐"
    "│  [x] Apple                 │"
    "│► [ ] Banana                │"
    "│  [ ] Cherry                │"
    "│  [ ] Date                  │"
    "└────────────────────────────┘"
    "#);
}

#[test]
fn snapshot_spinner_while_typing() {
    let (mut widget, _, now) = settled_widget(true);
    widget.set_input_text("a", now);

    let output = render_widget(&mut widget, SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);
    assert_snapshot!(output, @r#"
    "┌────────────────────────────┐"
    "│⌕ a                        ⠋│"
    "└────────────────────────────┘"
    "                              "
    "                              "
    "                              "
    "                              "
    "                              "
    "                              "
    "                              "
    "#);
}

#[test]
fn test_spinner_only_shown_while_typing() {
    let (mut widget, _, now) = settled_widget(true);
    let is_spinner = |c: char| ('\u{2800}'..='\u{28FF}').contains(&c);

    let settled = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);
    assert!(!settled.lines().nth(1).unwrap().chars().any(is_spinner));

    widget.set_input_text("a", now);
    let typing = render_terminal(&mut widget, TEST_WIDTH, TEST_HEIGHT);
    let spinner_cell = &typing.backend().buffer()[(TEST_WIDTH - 2, 1)];
    assert!(spinner_cell.symbol().chars().all(is_spinner));
    assert_eq!(spinner_cell.fg, Color::Blue);

    widget.tick(now + DEBOUNCE);
    assert!(!widget.is_typing());
    let refiltered = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);
    assert!(!refiltered.lines().nth(1).unwrap().chars().any(is_spinner));
}

#[test]
fn test_spinner_color_is_configurable() {
    let (props, _) = recording_props(fruit_options());
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(props.with_spinner_color(Color::Magenta), t0);
    widget.set_input_text("a", t0);

    let terminal = render_terminal(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert_eq!(terminal.backend().buffer()[(TEST_WIDTH - 2, 1)].fg, Color::Magenta);
}

#[test]
fn test_row_columns_stable_when_highlighting() {
    let (mut widget, _, _) = settled_widget(true);

    let before = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);
    widget.highlight(0);
    let after = render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    let column = |output: &str, label: &str| {
        let line = line_containing(output, label).unwrap();
        line.find("[ ]").map(|byte| line[..byte].chars().count())
    };
    assert_eq!(column(&before, "Banana"), column(&after, "Banana"));
    assert_eq!(column(&before, "Apple"), column(&after, "Apple"));
}

#[test]
fn test_huge_row_budget_does_not_overflow() {
    let options: Vec<Item> = (1..=70_000).map(|id| Item::new(id, format!("item {id}"))).collect();
    let (mut props, _) = recording_props(options);
    props.max_visible = 65_534;
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(props, t0);
    widget.tick(t0 + DEBOUNCE);

    render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    // Clamped to the space below the input
    assert_eq!(widget.regions().list.map(|r| r.height), Some(TEST_HEIGHT - 3));
}

#[test]
fn test_huge_label_does_not_overflow() {
    let (props, _) = recording_props(vec![Item::new(1, "x".repeat(70_000))]);
    let t0 = Instant::now();
    let mut widget = Autocomplete::mount(props, t0);
    widget.tick(t0 + DEBOUNCE);

    render_widget(&mut widget, TEST_WIDTH, TEST_HEIGHT);

    assert_eq!(widget.regions().list.map(|r| r.width), Some(TEST_WIDTH));
}
