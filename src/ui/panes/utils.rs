//! Pieces shared by every pane: the bordered window frame and scrolling

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Bordered window with focus and inactive styling
///
/// Inactive panels keep their content but get a dimmed border and an
/// `(inactive)` marker in the title.
pub(crate) fn pane_block<'a>(title: &'a str, is_focused: bool, is_enabled: bool) -> Block<'a> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else if is_enabled {
        Style::default().fg(DEFAULT_THEME.border_normal)
    } else {
        Style::default().fg(DEFAULT_THEME.border_inactive)
    };

    let mut title_spans = vec![Span::raw(format!(" {} ", title))];
    if !is_enabled {
        title_spans.push(Span::styled(
            "(inactive) ",
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    Block::default()
        .title(Line::from(title_spans))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays full
///
/// `usize::MAX` is a request to jump to the bottom.
pub(crate) fn clamp_scroll(offset: &mut usize, total_lines: usize, visible_height: usize) {
    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}

/// Adjust a scroll offset so `row` is on screen
pub(crate) fn follow_row(offset: &mut usize, row: usize, visible_height: usize) {
    let visible_height = visible_height.max(1);
    if row < *offset {
        *offset = row;
    } else if row >= *offset + visible_height {
        *offset = row + 1 - visible_height;
    }
}
