//! Diagnostics pane: errors and warnings from the latest compile or run

use super::utils::{clamp_scroll, pane_block};
use crate::session::panels::DiagnosticsView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

fn section<'a>(lines: &mut Vec<Line<'a>>, heading: &'a str, body: &'a str, style: Style) {
    lines.push(Line::styled(heading, style.add_modifier(Modifier::BOLD)));
    lines.extend(body.lines().map(|l| Line::styled(l, style)));
}

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    view: &DiagnosticsView,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("Diagnostics", is_focused, view.enabled);

    let (error_style, warning_style) = if view.enabled {
        (
            Style::default().fg(DEFAULT_THEME.error),
            Style::default().fg(DEFAULT_THEME.warning),
        )
    } else {
        let dim = Style::default().fg(DEFAULT_THEME.comment);
        (dim, dim)
    };

    let mut lines = Vec::new();
    section(&mut lines, "Errors", &view.errors, error_style);
    lines.push(Line::raw(""));
    section(&mut lines, "Warnings", &view.warnings, warning_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
