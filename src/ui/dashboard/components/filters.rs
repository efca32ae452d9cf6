//! Filter bar shown above the tables

use super::super::state::DashboardState;
use crate::router::ViewId;
use crate::views::ALL_OPTION;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// One select filter: key, label and current value (`None` for all).
pub type Select<'a> = (&'static str, &'static str, Option<&'a str>);

/// Renders the select filters and, when one of this view's columns is being
/// filtered, the text input.
pub fn render_filters(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    view: ViewId,
    selects: &[Select<'_>],
) {
    let mut spans = Vec::new();
    for (key, label, value) in selects {
        spans.push(Span::styled(
            format!("[{}] {}: ", key, label),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            value.unwrap_or(ALL_OPTION).to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
    }
    match &state.input {
        Some(input) if input.view == view => {
            spans.push(Span::styled(
                format!("{}: ", input.label),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::styled(
                format!("{}▏", input.value),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
        }
        _ => spans.push(Span::styled(
            "[/] Filter column",
            Style::default().fg(Color::DarkGray),
        )),
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
