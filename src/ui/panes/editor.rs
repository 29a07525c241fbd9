//! Editor pane with IsiLang syntax highlighting
//!
//! Shows the session's source text with line numbers, the example picker in
//! the title, and the terminal cursor at the edit position when focused.
//!
//! Highlighting uses a small character-by-character tokenizer rather than
//! the language's real lexer, which lives in the external engine.

use super::utils::{follow_row, pane_block};
use crate::catalog::ExampleName;
use crate::session::panels::EditorView;
use crate::ui::text_input::TextCursor;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the `{:4} ` line number gutter
const GUTTER_WIDTH: u16 = 5;

fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle strings
        if c == '"' {
            if !current_word.is_empty() {
                spans.push(word_span(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += 1;
            }
            if end < chars.len() {
                end += 1;
            }
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                spans.push(word_span(std::mem::take(&mut current_word)));
            }

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                ':' | '=' | '+' | '-' | '*' | '/' | '<' | '>' | '!' => {
                    Style::default().fg(DEFAULT_THEME.secondary)
                } // Operators, including `:=`
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        spans.push(word_span(current_word));
    }

    Line::from(spans)
}

fn word_span(word: String) -> Span<'static> {
    let style = get_keyword_style(&word);
    Span::styled(word, style)
}

fn get_keyword_style(word: &str) -> Style {
    match word {
        "int" | "float" | "string" | "bool" => Style::default().fg(DEFAULT_THEME.type_name),
        "programa" | "fimprog" | "declare" | "leia" | "escreva" | "enquanto" | "se"
        | "senao" | "faca" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "verdadeiro" | "falso" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the editor pane
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    view: &EditorView,
    cursor: TextCursor,
    selected_example: ExampleName,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!("playground.isi - Editor │ example: {}", selected_example.label());
    let block = pane_block(&title, is_focused, view.enabled());

    // Keep the trailing empty line after a final newline editable
    let lines: Vec<&str> = view.text.split('\n').collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    follow_row(scroll_offset, cursor.row, visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let num_style = if idx == cursor.row {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", idx + 1), num_style)];
            spans.extend(highlight_source_code(line).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);

    if is_focused {
        let max_x = area.right().saturating_sub(2);
        let x = (area.x + 1 + GUTTER_WIDTH).saturating_add(cursor.col as u16).min(max_x);
        let y = area.y + 1 + (cursor.row - *scroll_offset) as u16;
        frame.set_cursor_position((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn splits_words_strings_and_delimiters() {
        let line = highlight_source_code(r#"    escreva("Hello world")."#);
        let parts = texts(&line);
        assert!(parts.contains(&"escreva".to_string()));
        assert!(parts.contains(&"\"Hello world\"".to_string()));
        assert_eq!(parts.concat(), r#"    escreva("Hello world")."#);
    }

    #[test]
    fn keywords_and_types_are_styled() {
        assert_eq!(
            get_keyword_style("enquanto"),
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        );
        assert_eq!(
            get_keyword_style("int"),
            Style::default().fg(DEFAULT_THEME.type_name)
        );
        assert_eq!(
            get_keyword_style("42"),
            Style::default().fg(DEFAULT_THEME.number)
        );
        assert_eq!(
            get_keyword_style("x1"),
            Style::default().fg(DEFAULT_THEME.fg)
        );
    }

    #[test]
    fn unterminated_string_runs_to_line_end() {
        let line = highlight_source_code("a := \"abc");
        assert_eq!(texts(&line).last().map(String::as_str), Some("\"abc"));
    }
}
