//! Key and command reference

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    ("Global", &[("1-4", "switch screen"), (":", "command line"), ("?", "this help"), ("q", "quit")]),
    (
        "Learning",
        &[
            ("j / k", "next / previous lesson"),
            ("h / l", "previous / next topic"),
            ("e", "show or hide example"),
            ("m", "mark as understood"),
        ],
    ),
    (
        "Quiz",
        &[
            ("a-d, j / k", "choose an answer"),
            ("Enter", "submit, next, try again"),
            ("r", "restart"),
        ],
    ),
    (
        "Commands",
        &[
            (":q", "quit"),
            (":name <username>", "rename yourself"),
            (":theme", "toggle light / dark"),
            (":topic <id>", "open a topic"),
            (":lesson <id>", "open a lesson"),
            (":restart", "restart the quiz"),
        ],
    ),
];

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = Vec::new();

    for (heading, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )));
        for (key, what) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(theme.keyword)),
                Span::styled(*what, Style::default().fg(theme.fg_secondary)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("[Esc] back", Style::default().fg(theme.fg_muted))));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), centered_rect(70, 90, area));
}
