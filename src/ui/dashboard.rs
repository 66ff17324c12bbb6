//! Dashboard: greeting, stats and per-topic progress

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::progress_bar;
use crate::app::state::AppState;
use crate::profile::LEVEL_XP;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [stats_area, topics_area] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).areas(area);

    draw_stats(frame, stats_area, state, theme);
    draw_topics(frame, topics_area, state, theme);
}

fn draw_stats(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let profile = &state.profile;
    let level = profile.xp() / LEVEL_XP + 1;

    let lines = vec![
        Line::from(Span::styled(
            format!("Hi, {}!", profile.username()),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("🔥 ", Style::default().fg(theme.streak)),
            Span::styled(
                format!("{} day streak", profile.streak()),
                Style::default().fg(theme.streak).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("   ⭐ {} XP", profile.xp()), Style::default().fg(theme.accent_secondary)),
        ]),
        Line::from(vec![
            Span::styled(format!("Level {}  ", level), Style::default().fg(theme.fg_secondary)),
            Span::styled(
                progress_bar(profile.level_progress_percent(), 20),
                Style::default().fg(theme.accent_primary),
            ),
            Span::styled(
                format!(" {:.0}%", profile.level_progress_percent()),
                Style::default().fg(theme.fg_muted),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_topics(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let navigator = &state.navigator;
    let mut lines = Vec::new();

    for topic in navigator.topics() {
        let done = navigator.completed_count(&topic.id);
        let total = topic.lessons.len();
        let percent = if total == 0 { 0.0 } else { done as f64 / total as f64 * 100.0 };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<22}", topic.title), Style::default().fg(theme.fg_primary)),
            Span::styled(progress_bar(percent, 16), Style::default().fg(theme.success)),
            Span::styled(format!(" {}/{}", done, total), Style::default().fg(theme.fg_muted)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 2 to keep learning, 3 to take the quiz",
        Style::default().fg(theme.fg_muted),
    )));

    let block = Block::default()
        .title(" Topics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
