//! Learning screen: topic tree and lesson content

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::learning::{LessonStatus, Navigator, Token};
use crate::theme::Theme;

/// Status indicators for lessons
const STATUS_COMPLETED: &str = "✓";
const STATUS_LOCKED: &str = "🔒";
const STATUS_AVAILABLE: &str = "○";

pub fn draw(frame: &mut Frame, area: Rect, navigator: &Navigator, theme: &Theme) {
    let [tree_area, lesson_area] =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(20)]).areas(area);

    draw_tree(frame, tree_area, navigator, theme);
    draw_lesson(frame, lesson_area, navigator, theme);
}

fn status_icon(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Completed => STATUS_COMPLETED,
        LessonStatus::Locked => STATUS_LOCKED,
        LessonStatus::Available => STATUS_AVAILABLE,
    }
}

fn draw_tree(frame: &mut Frame, area: Rect, navigator: &Navigator, theme: &Theme) {
    let block = Block::default()
        .title(" Topics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let mut lines: Vec<Line> = Vec::new();

    for topic in navigator.topics() {
        let is_active = navigator.active_topic_id() == Some(topic.id.as_str());
        let icon = if is_active { "▼" } else { "▶" };
        let style = if is_active {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{} {}", icon, topic.title), style),
            Span::styled(
                format!(" {}/{}", navigator.completed_count(&topic.id), topic.lessons.len()),
                Style::default().fg(theme.fg_muted),
            ),
        ]));

        if !is_active {
            continue;
        }

        for lesson in &topic.lessons {
            let status = navigator.lesson_status(lesson);
            let selected = navigator.active_lesson_id() == Some(lesson.id.as_str());

            let style = if selected {
                Style::default()
                    .fg(theme.bg_primary)
                    .bg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                match status {
                    LessonStatus::Completed => Style::default().fg(theme.success),
                    LessonStatus::Locked => Style::default().fg(theme.fg_muted),
                    LessonStatus::Available => Style::default().fg(theme.fg_secondary),
                }
            };

            lines.push(Line::from(Span::styled(
                format!("   {} {}", status_icon(status), lesson.title),
                style,
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_lesson(frame: &mut Frame, area: Rect, navigator: &Navigator, theme: &Theme) {
    let title = navigator
        .active_lesson()
        .map(|l| format!(" {} ", l.title))
        .unwrap_or_else(|| " Lesson ".to_string());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));

    let Some(tokens) = navigator.highlighted_explanation() else {
        let msg = if navigator.active_lesson().is_some() {
            "Content for this lesson is coming soon."
        } else {
            "Pick a lesson to start learning."
        };
        let paragraph = Paragraph::new(msg)
            .style(Style::default().fg(theme.fg_muted))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![explanation_line(&tokens, theme), Line::from("")];

    if let Some(content) = navigator.active_content() {
        if navigator.example_expanded() {
            lines.push(Line::from(Span::styled(
                "▼ Example (e to hide)",
                Style::default().fg(theme.accent_secondary),
            )));
            for code in content.example.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", code),
                    Style::default().fg(theme.fg_primary).bg(theme.bg_secondary),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "▶ Example (e to show)",
                Style::default().fg(theme.accent_secondary),
            )));
        }
    }

    lines.push(Line::from(""));
    let understood = navigator.active_lesson_id().is_some_and(|id| navigator.is_understood(id));
    lines.push(if understood {
        Line::from(Span::styled("✓ Understood", Style::default().fg(theme.success)))
    } else {
        Line::from(Span::styled("[m] Mark as understood", Style::default().fg(theme.info)))
    });

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render highlighted tokens back into one line of prose
fn explanation_line(tokens: &[Token], theme: &Theme) -> Line<'static> {
    let plain = Style::default().fg(theme.fg_primary);
    let keyword = Style::default()
        .fg(theme.keyword)
        .bg(theme.keyword_bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(tokens.len() * 2);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", plain));
        }
        let style = if token.is_keyword { keyword } else { plain };
        spans.push(Span::styled(token.text.clone(), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::highlight;

    #[test]
    fn explanation_line_keeps_words_and_spacing() {
        let tokens = highlight("Use a hash map.", &["hash map"]);
        let line = explanation_line(&tokens, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Use a hash map.");
    }

    #[test]
    fn keywords_get_keyword_style() {
        let theme = Theme::default();
        let tokens = highlight("Use a hash map.", &["hash map"]);
        let line = explanation_line(&tokens, &theme);
        let styled: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(theme.keyword))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(styled, vec!["hash", "map."]);
    }

    #[test]
    fn status_icons() {
        assert_eq!(status_icon(LessonStatus::Completed), "✓");
        assert_eq!(status_icon(LessonStatus::Locked), "🔒");
        assert_eq!(status_icon(LessonStatus::Available), "○");
    }
}
