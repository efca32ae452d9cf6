//! Member risk panel: main categories, their risk categories and members

use crate::table::{Column, Tabular};
use crate::views::{ALL_OPTION, MembersView};
use crate::views::members::CategorySection;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const CELL_WIDTH: usize = 24;

fn pad(text: &str) -> String {
    let mut cell: String = text.chars().take(CELL_WIDTH - 1).collect();
    let width = cell.chars().count();
    cell.push_str(&" ".repeat(CELL_WIDTH - width));
    cell
}

fn header_line(columns: &[Column]) -> Line<'static> {
    let text: String = columns.iter().map(|column| pad(column.label)).collect();
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
    ))
}

/// Lines of one risk category; `cursor` counts members drawn so far.
fn category_lines(
    section: &CategorySection<'_>,
    selected: usize,
    cursor: &mut usize,
    lines: &mut Vec<Line<'static>>,
) -> Option<usize> {
    let mut selected_line = None;
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} ", section.category),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})  [{}]", section.members.len(), section.config.action),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(header_line(section.config.columns));
    for member in &section.members {
        let text: String = section
            .config
            .columns
            .iter()
            .map(|column| pad(&column.display(&member.cell(column.key))))
            .collect();
        let style = if *cursor == selected {
            selected_line = Some(lines.len());
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("  {}", text), style)));
        *cursor += 1;
    }
    lines.push(Line::from(""));
    selected_line
}

pub fn render_members(f: &mut Frame, area: Rect, view: &MembersView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    let pcp = Paragraph::new(Line::from(vec![
        Span::styled("[P] PCP: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            view.pcp.clone().unwrap_or_else(|| ALL_OPTION.to_string()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(pcp, chunks[0]);

    let mut lines = Vec::new();
    let mut cursor = 0;
    let mut selected_line = 0;
    for section in view.sections() {
        lines.push(Line::from(Span::styled(
            section.main.title().to_uppercase(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for category in &section.categories {
            if let Some(line) = category_lines(category, view.selected, &mut cursor, &mut lines) {
                selected_line = line;
            }
        }
    }
    if lines.is_empty() {
        lines.push(Line::from("No members found for this unit."));
    }

    // Keep the selected member on screen.
    let height = chunks[1].height.saturating_sub(4) as usize;
    let offset = selected_line.saturating_sub(height.saturating_sub(1));
    let panel = Paragraph::new(lines)
        .scroll((offset as u16, 0))
        .block(
            Block::default()
                .title(format!("MEMBERS - {}", view.unit_name))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    f.render_widget(panel, chunks[1]);

    f.render_widget(
        Paragraph::new(view.footer()).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
