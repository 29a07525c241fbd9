//! Interpreter pane: the stdin editor above the output of the last run
//!
//! Input has to be complete before a run starts; the engine receives all of
//! it at once and nothing typed during a run reaches the program.

use super::utils::{clamp_scroll, follow_row, pane_block};
use crate::session::panels::InterpreterView;
use crate::ui::text_input::TextCursor;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Scroll positions of the two text regions
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpreterScrollState {
    pub input: usize,
    pub output: usize,
}

/// Render the interpreter pane
pub fn render_interpreter_pane(
    frame: &mut Frame,
    area: Rect,
    view: &InterpreterView,
    cursor: TextCursor,
    is_focused: bool,
    scroll: &mut InterpreterScrollState,
) {
    let block = pane_block("Interpreter", is_focused, view.enabled());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let label_style = Style::default()
        .fg(DEFAULT_THEME.comment)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Paragraph::new(Line::styled("Input", label_style)), rows[0]);
    frame.render_widget(Paragraph::new(Line::styled("Output", label_style)), rows[2]);

    // Input region
    let input_height = rows[1].height.max(1) as usize;
    follow_row(&mut scroll.input, cursor.row, input_height);
    let input_lines: Vec<Line> = view
        .input
        .split('\n')
        .skip(scroll.input)
        .take(input_height)
        .map(|l| Line::styled(l, Style::default().fg(DEFAULT_THEME.secondary)))
        .collect();
    frame.render_widget(Paragraph::new(input_lines), rows[1]);

    // Output region
    let output_height = rows[3].height.max(1) as usize;
    if view.output.is_empty() {
        scroll.output = 0;
        frame.render_widget(
            Paragraph::new("(no output)").style(Style::default().fg(DEFAULT_THEME.comment)),
            rows[3],
        );
    } else {
        let all_lines: Vec<&str> = view.output.lines().collect();
        clamp_scroll(&mut scroll.output, all_lines.len(), output_height);
        let output_lines: Vec<Line> = all_lines
            .into_iter()
            .skip(scroll.output)
            .take(output_height)
            .map(|l| Line::styled(l, Style::default().fg(DEFAULT_THEME.fg)))
            .collect();
        frame.render_widget(Paragraph::new(output_lines), rows[3]);
    }

    if is_focused && rows[1].height > 0 {
        let max_x = rows[1].right().saturating_sub(1);
        let x = rows[1].x.saturating_add(cursor.col as u16).min(max_x);
        let y = rows[1].y + (cursor.row - scroll.input) as u16;
        frame.set_cursor_position((x, y));
    }
}
