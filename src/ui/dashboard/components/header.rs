//! Dashboard header component
//!
//! Renders the title, the navigation links and the data source

use super::super::state::DashboardState;
use crate::router::ViewId;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const TITLE: &str = "Contract IQ Prototype";

/// Render header with title, navigation and data source.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Fill(1)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", state.source_label),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let link = |label: &'static str, key: &'static str, view: ViewId| {
        let style = if state.router.is_visible(view) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!(" [{}] {} ", key, label), style)
    };
    let nav = Paragraph::new(Line::from(vec![
        link("Contracts", "H", ViewId::Contracts),
        Span::raw(" "),
        link("Member Panel", "M", ViewId::Members),
        Span::raw(" "),
        link("KPI Summary", "K", ViewId::KpiSummary),
    ]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(nav, header_chunks[1]);
}
