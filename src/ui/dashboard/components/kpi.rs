//! KPI summary: metric groups, quality measures and per-PCP counts

use super::super::utils::trend_color;
use crate::format;
use crate::views::{ALL_OPTION, KpiView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render_kpi(f: &mut Frame, area: Rect, view: &KpiView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Fill(1)])
        .split(area);

    let groups = view.groups();
    let group_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Fill(1); groups.len()])
        .split(chunks[0]);
    for (group, chunk) in groups.iter().zip(group_chunks.iter()) {
        let mut lines = Vec::new();
        for metric in group.metrics {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", metric.value),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(metric.trend.icon(), Style::default().fg(trend_color(metric.trend))),
            ]));
            lines.push(Line::from(Span::styled(
                metric.label,
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                format!("MoM {}  YoY {}", metric.mom, metric.yoy),
                Style::default().fg(Color::DarkGray),
            )));
        }
        f.render_widget(Paragraph::new(lines).block(panel(group.title)), *chunk);
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Fill(1)])
        .split(chunks[1]);

    let rows = view.quality_kpis().iter().map(|kpi| {
        Row::new(vec![
            Cell::from(kpi.measure),
            Cell::from(kpi.gaps_closed),
            Cell::from(kpi.mom),
            Cell::from(kpi.yoy),
            Cell::from(kpi.trend.icon()).style(Style::default().fg(trend_color(kpi.trend))),
        ])
    });
    let quality = Table::new(
        rows,
        [
            Constraint::Fill(3),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(5),
        ],
    )
    .header(
        Row::new(vec!["Measure", "Gaps Closed", "MoM", "YoY", "Trend"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(panel("QUALITY MEASURES"));
    f.render_widget(quality, bottom[0]);

    let pcp = view.pcp.as_deref().unwrap_or(ALL_OPTION);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("[P] PCP: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                pcp.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for (category, count) in view.category_counts() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>5} ", count), Style::default().fg(Color::White)),
            Span::styled(category, Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));
    for entry in view.measure_appointments() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>5} ", format::count(entry.members_with_appointments)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{} with appointments", entry.measure),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines).block(panel("MEMBERS BY CATEGORY")), bottom[1]);
}
