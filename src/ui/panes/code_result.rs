//! Generated C code pane

use super::utils::{clamp_scroll, pane_block};
use crate::session::panels::CodeResultView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render the code emitter output pane
pub fn render_code_result_pane(
    frame: &mut Frame,
    area: Rect,
    view: &CodeResultView,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("Code emitter output", is_focused, view.enabled);

    let mut lines = vec![Line::styled(
        "C code output",
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::BOLD),
    )];

    if view.enabled {
        let code_style = Style::default().fg(DEFAULT_THEME.fg);
        lines.extend(view.code.lines().map(|l| Line::styled(l, code_style)));
    } else {
        lines.push(Line::styled(
            "(compile to see generated code)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
