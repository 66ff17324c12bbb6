//! Profile screen

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::progress_bar;
use crate::profile::{LEVEL_XP, Profile, ThemeMode};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, profile: &Profile, theme: &Theme) {
    let label = Style::default().fg(theme.fg_muted);
    let value = Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD);
    let theme_name = match profile.theme() {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    };

    let lines = vec![
        Line::from(vec![Span::styled("Username   ", label), Span::styled(profile.username().to_string(), value)]),
        Line::from(vec![Span::styled("Streak     ", label), Span::styled(format!("{} days", profile.streak()), value)]),
        Line::from(vec![Span::styled("XP         ", label), Span::styled(profile.xp().to_string(), value)]),
        Line::from(vec![
            Span::styled("Next level ", label),
            Span::styled(
                progress_bar(profile.level_progress_percent(), 20),
                Style::default().fg(theme.accent_primary),
            ),
            Span::styled(format!(" {}/{}", profile.xp() % LEVEL_XP, LEVEL_XP), label),
        ]),
        Line::from(vec![Span::styled("Theme      ", label), Span::styled(theme_name, value)]),
        Line::from(""),
        Line::from(Span::styled(
            "[t] toggle theme   :name <username> to rename",
            Style::default().fg(theme.fg_muted),
        )),
    ];

    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
