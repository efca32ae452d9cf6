//! Overlays: member detail, quality measures, loading and alerts

use super::super::utils::{centered_rect, tone_color};
use crate::model::quality::TARGET_RATE;
use crate::views::{MemberDetail, Modal, QualityOverview};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{}: ", text), Style::default().fg(Color::DarkGray))
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn member_lines(detail: &MemberDetail) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![label("PCP"), Span::raw(detail.pcp_line())]),
        Line::from(vec![label("Unit"), Span::raw(detail.member.unit_name.clone())]),
        Line::from(""),
        section("Risk Summary"),
        Line::from(detail.risk_line()),
    ];
    if let Some(conditions) = detail.suspect_conditions() {
        lines.push(Line::from(vec![label("Suspect Conditions"), Span::raw(conditions)]));
    }
    let gaps = detail.visible_gaps();
    if !gaps.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("Quality Measures"));
        for gap in gaps {
            let mut spans = vec![
                Span::raw(format!("{}  ", gap.measure)),
                Span::styled(gap.status.clone(), Style::default().fg(tone_color(gap.tone))),
            ];
            let value = gap.value.to_string();
            if !value.is_empty() {
                spans.push(Span::raw(format!("  {}", value)));
            }
            if let Some(next) = gap.next_appointment_label() {
                spans.push(Span::styled(
                    format!("  {}", next),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn quality_lines(overview: &QualityOverview) -> Vec<Line<'static>> {
    if overview.gaps.is_empty() {
        return vec![Line::from("No quality measures available.")];
    }
    let mut lines = Vec::new();
    for gap in &overview.gaps {
        let rate_color = if gap.on_target() {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(vec![
            Span::styled(
                gap.measure_name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", gap.closure_label()),
                Style::default().fg(rate_color),
            ),
            Span::styled(
                format!("  ({})", gap.fraction_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", QualityOverview::appointments_label(gap)),
            Style::default().fg(Color::Gray),
        )));
        for member in &gap.members {
            lines.push(Line::from(vec![
                Span::raw(format!("    {}  ", member.name)),
                Span::styled(member.status.clone(), Style::default().fg(tone_color(member.tone()))),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Target closure rate: {:.0}%", TARGET_RATE * 100.0),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub fn render_modal(f: &mut Frame, area: Rect, modal: &Modal) {
    let (title, lines, border, popup) = match modal {
        Modal::Loading(thing) => (
            "Loading".to_string(),
            vec![Line::from(format!("Loading {}...", thing))],
            Color::Cyan,
            centered_rect(40, 20, area),
        ),
        Modal::Alert(message) => (
            "Error".to_string(),
            vec![Line::from(*message)],
            Color::Red,
            centered_rect(50, 20, area),
        ),
        Modal::MemberDetail(detail) => (
            detail.title(),
            member_lines(detail),
            Color::Cyan,
            centered_rect(70, 70, area),
        ),
        Modal::Quality(overview) => (
            "Quality Measures".to_string(),
            quality_lines(overview),
            Color::Cyan,
            centered_rect(70, 70, area),
        ),
    };

    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(" [Esc] Close ").right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .padding(Padding::uniform(1));
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
