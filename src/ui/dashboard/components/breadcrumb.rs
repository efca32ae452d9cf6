//! Breadcrumb trail under the header

use super::super::state::DashboardState;
use crate::router::{CRUMB_SEPARATOR, HOME};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Crumbs with a link are underlined; the last crumb is the current page and is drawn bold.
pub fn render_breadcrumb(f: &mut Frame, area: Rect, state: &DashboardState) {
    let trail = state.router.trail();
    let mut spans = Vec::new();
    for (i, crumb) in trail.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                CRUMB_SEPARATOR,
                Style::default().fg(Color::DarkGray),
            ));
        }
        let style = if i + 1 == trail.len() || crumb.href.is_none() {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED)
        };
        spans.push(Span::styled(crumb.label.clone(), style));
    }
    if spans.is_empty() {
        spans.push(Span::raw(HOME));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
