//! Bottom status / `:` command line

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

const HINT: &str = "1-4 switch screens  : command  ? help  q quit";

/// Draw the command line at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let line = match state.mode {
        CommandMode::Command => {
            let style = Style::default().fg(theme.accent_primary);
            with_cursor(&state.input, state.cursor, style, theme)
        }
        CommandMode::Normal => match &state.message {
            Some(msg) if state.is_error => {
                Line::from(Span::styled(msg.clone(), Style::default().fg(theme.error)))
            }
            Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(theme.fg_secondary))),
            None => Line::from(Span::styled(HINT, Style::default().fg(theme.fg_muted))),
        },
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// `:` prompt followed by the input with a block cursor at byte offset `cursor`
fn with_cursor(input: &str, cursor: usize, style: Style, theme: &Theme) -> Line<'static> {
    let (before, rest) = input.split_at(cursor.min(input.len()));
    let mut rest_chars = rest.chars();
    let under = rest_chars.next().unwrap_or(' ');
    let after: String = rest_chars.collect();

    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(format!(":{}", before), style)];
    spans.push(Span::styled(under.to_string(), cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn cursor_at_end_shows_blank_block() {
        let line = with_cursor("quiz", 4, Style::default(), &Theme::default());
        assert_eq!(text(&line), vec![":quiz", " "]);
    }

    #[test]
    fn cursor_in_middle_splits_input() {
        let line = with_cursor("name", 1, Style::default(), &Theme::default());
        assert_eq!(text(&line), vec![":n", "a", "me"]);
    }

    #[test]
    fn cursor_handles_multibyte_input() {
        let line = with_cursor("né", 1, Style::default(), &Theme::default());
        assert_eq!(text(&line), vec![":n", "é"]);
    }
}
