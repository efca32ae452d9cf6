//! Dashboard footer component
//!
//! Renders the key hints of the current view

use super::super::state::DashboardState;
use crate::router::ViewId;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const TABLE_KEYS: &str = "[↑↓] Select  [←→] Column  [S] Sort  [/] Filter  [Enter] Open";

/// Key hints for the view, the open modal or the filter being typed.
pub fn hints(state: &DashboardState) -> String {
    if state.input.is_some() {
        return "[Enter] Done  [Esc] Done  [Backspace] Delete".to_string();
    }
    if state.modal.is_some() {
        return "[Esc] Close  [Q] Quit".to_string();
    }
    let view_keys = match state.current_view() {
        ViewId::Contracts => format!("{}  [T] Type", TABLE_KEYS),
        ViewId::Providers => format!("{}  [C] Contract  [T] Type  [U] Unit  [B] Back", TABLE_KEYS),
        ViewId::Members => "[↑↓] Select  [Enter] Details  [P] PCP  [B] Back".to_string(),
        ViewId::KpiSummary => "[P] PCP  [B] Back".to_string(),
    };
    let reload = if state.current_error().is_some() {
        "[R] Retry"
    } else {
        "[R] Reload"
    };
    format!("{}  [G] Quality  {}  [Q] Quit", view_keys, reload)
}

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer = Paragraph::new(hints(state))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
