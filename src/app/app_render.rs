use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::autocomplete::render_autocomplete;
use crate::widgets::popup::centered_rect;

const BOX_WIDTH: u16 = 60;
const HELP_TEXT: &str = "↑↓ move  Enter toggle  Esc close/done  Ctrl+C cancel";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = centered_rect(frame.area(), BOX_WIDTH, frame.area().height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" pickbox ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [picker_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
            help_area,
        );

        render_autocomplete(&mut self.picker, frame, picker_area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
