//! Loading and error placeholders drawn in place of a view

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub fn render_loading(f: &mut Frame, area: Rect, thing: &str, tick: usize) {
    let text = format!("{} Loading {}...", SPINNER[tick % SPINNER.len()], thing);
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(widget, area);
}

/// The failure message with its retry hint.
pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let widget = Paragraph::new(vec![
        Line::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("[R] Retry", Style::default().fg(Color::Yellow)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(widget, area);
}
