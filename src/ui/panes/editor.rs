//! Editor pane rendering with syntax highlighting
//!
//! Shows the script being edited with line numbers, Lox highlighting, the
//! cursor line, and the line of the last evaluation error.
//!
//! The highlighter is a character scanner over one line at a time, not the
//! real lexer, so a half-typed script still renders sensibly.

use crate::ui::editor::EditorBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the line number gutter, including the trailing space
const GUTTER_WIDTH: u16 = 5;

/// Simple syntax highlighting for one line of Lox
pub(crate) fn highlight_lox_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte, c) = chars[i];

        // Comments run to end of line
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            flush_word(&mut spans, &mut current_word, false);
            spans.push(Span::styled(
                &line[byte..],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        // Strings have no escapes; an unterminated one runs to end of line
        if c == '"' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != '"' {
                end += 1;
            }
            let end_byte = chars.get(end + 1).map_or(line.len(), |&(b, _)| b);
            spans.push(Span::styled(
                &line[byte..end_byte],
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end + 1;
            continue;
        }

        if c.is_ascii_digit() && current_word.is_empty() {
            let mut end = i;
            while end < chars.len() && (chars[end].1.is_ascii_digit() || chars[end].1 == '.') {
                end += 1;
            }
            let end_byte = chars.get(end).map_or(line.len(), |&(b, _)| b);
            spans.push(Span::styled(
                &line[byte..end_byte],
                Style::default().fg(DEFAULT_THEME.number),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, c == '(');

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, is_call: bool) {
    if word.is_empty() {
        return;
    }
    let style = keyword_style(word, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn keyword_style(word: &str, is_call: bool) -> Style {
    match word {
        "and" | "class" | "else" | "for" | "fun" | "if" | "or" | "print" | "return" | "super"
        | "this" | "var" | "while" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" | "nil" => Style::default().fg(DEFAULT_THEME.literal),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the editor pane.
///
/// `error_line` is 1-based, as reported by the evaluator.
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    editor: &mut EditorBuffer,
    error_line: Option<usize>,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Editor ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    editor.scroll_to_cursor(visible_height);
    let (cursor_row, cursor_col) = editor.cursor();

    let visible_lines: Vec<Line> = editor
        .lines()
        .iter()
        .enumerate()
        .skip(editor.scroll)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);
            let is_current = is_focused && idx == cursor_row;

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_lox_line(line);
            if is_error {
                // White on red, overriding highlighting
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = error_style;
                }
            } else if is_current {
                for span in &mut content_line.spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content_line.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);

    if is_focused {
        // Columns or rows past u16 are off screen anyway
        let col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
        let row = u16::try_from(cursor_row.saturating_sub(editor.scroll)).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1 + GUTTER_WIDTH).saturating_add(col);
        let y = area.y.saturating_add(1).saturating_add(row);
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            frame.set_cursor_position((x, y));
        }
    }
}
