//! Autocomplete rendering
//!
//! Draws the widget from controller state and records the input and dropdown
//! regions for pointer hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::Autocomplete;
use crate::choice::Choice;
use crate::layout::RowsRegion;
use crate::widgets::popup;

const INPUT_HEIGHT: u16 = 3;
const POPUP_BORDER: u16 = 2;
const SEARCH_GLYPH: &str = "⌕";
const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";
const HIGHLIGHT_SYMBOL: &str = "► ";
const EMPTY_STATE: &str = "No options";
const LOADING_MESSAGE: &str = "Loading...";

/// Cut `height` rows off the top of `area`
fn take_rows(area: &mut Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let taken = Rect { height, ..*area };
    area.y += height;
    area.height -= height;
    taken
}

/// Saturating conversion of a row or column count to terminal cells
fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Render the widget into `area`
pub fn render_autocomplete<T: Choice>(state: &mut Autocomplete<T>, frame: &mut Frame, area: Rect) {
    state.regions.clear();

    if state.is_disabled() {
        return;
    }

    if state.is_loading() {
        let line = state.spinner.line(LOADING_MESSAGE);
        let mut rest = area;
        frame.render_widget(Paragraph::new(line), take_rows(&mut rest, 1));
        return;
    }

    let mut rest = area;

    if !state.description.is_empty() {
        let line = Line::from(Span::styled(
            state.description.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), take_rows(&mut rest, 1));
    }

    if !state.label.is_empty() {
        let line = Line::from(state.label.clone());
        frame.render_widget(Paragraph::new(line), take_rows(&mut rest, 1));
    }

    let input_area = take_rows(&mut rest, INPUT_HEIGHT);
    render_input(state, frame, input_area);

    // The dropdown hangs below the chips so they stay readable
    let mut anchor = input_area;
    if !state.selected_options().is_empty() {
        let chips_area = take_rows(&mut rest, 1);
        render_chips(state, frame, chips_area);
        anchor = anchor.union(chips_area);
    }

    if state.is_dropdown_visible() {
        render_dropdown(state, frame, anchor, area);
    }
}

fn render_input<T: Choice>(state: &mut Autocomplete<T>, frame: &mut Frame, area: Rect) {
    let border_color = if state.is_dropdown_visible() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [glyph_area, text_area, spinner_area] = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(SEARCH_GLYPH, Style::default().fg(Color::Gray))),
        glyph_area,
    );
    frame.render_widget(&state.textarea, text_area);

    if state.is_typing() {
        frame.render_widget(
            Paragraph::new(state.spinner.span()).alignment(Alignment::Right),
            spinner_area,
        );
    }

    state.regions.input = Some(area);
}

fn render_chips<T: Choice>(state: &Autocomplete<T>, frame: &mut Frame, area: Rect) {
    let chip_style = Style::default().fg(Color::Black).bg(Color::Gray);

    let spans: Vec<Span> = state
        .selected_options()
        .iter()
        .flat_map(|option| {
            [
                Span::styled(format!(" {} ", option.label()), chip_style),
                Span::raw(" "),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dropdown<T: Choice>(
    state: &mut Autocomplete<T>,
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
) {
    let count = state.filtered_options().len();

    let mut max_content_width = EMPTY_STATE.width();
    let items: Vec<ListItem<'static>> = if count == 0 {
        vec![ListItem::new(Line::from(Span::styled(
            EMPTY_STATE,
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        state
            .filtered_options()
            .iter()
            .map(|option| {
                let checkbox = if state.is_selected(option) {
                    Span::styled(CHECKED, Style::default().fg(Color::Green))
                } else {
                    Span::styled(UNCHECKED, Style::default().fg(Color::DarkGray))
                };

                let content = match &state.render_option {
                    Some(render) => render(option),
                    None => Line::from(option.label().to_string()),
                };

                max_content_width = max_content_width.max(CHECKED.width() + content.width());

                let mut spans = vec![checkbox];
                spans.extend(content.spans);
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let visible_rows = count.max(1).min(state.max_visible.max(1));
    let wanted_height = to_cells(visible_rows).saturating_add(POPUP_BORDER);
    let wanted_width =
        to_cells(max_content_width + HIGHLIGHT_SYMBOL.width()).saturating_add(POPUP_BORDER);
    let popup_area = popup::popup_below_anchor(
        anchor,
        bounds,
        wanted_width.max(anchor.width),
        wanted_height,
    );

    if popup_area.height <= POPUP_BORDER {
        return;
    }

    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let rows_area = block.inner(popup_area);

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let highlighted = if count == 0 {
        None
    } else {
        state.highlighted_index()
    };
    state.list_state.select(highlighted);
    frame.render_stateful_widget(list, popup_area, &mut state.list_state);

    state.regions.list = Some(popup_area);
    if count > 0 {
        state.regions.rows = Some(RowsRegion {
            area: rows_area,
            offset: state.list_state.offset(),
            count,
        });
    }
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
