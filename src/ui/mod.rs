//! UI rendering components

pub mod command_line;
pub mod dashboard;
pub mod help;
pub mod layout;
pub mod learning;
pub mod profile;
pub mod quiz_panel;
pub mod toast;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let theme = Theme::for_mode(state.profile.theme());
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    // Tabs, screen body, command line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    layout::draw_tabs(frame, chunks[0], state.screen, &theme);

    match state.screen {
        Screen::Dashboard => dashboard::draw(frame, chunks[1], state, &theme),
        Screen::Learning => learning::draw(frame, chunks[1], &state.navigator, &theme),
        Screen::Quiz => quiz_panel::draw(frame, chunks[1], &state.quiz, &theme),
        Screen::Profile => profile::draw(frame, chunks[1], &state.profile, &theme),
        Screen::Help => help::draw(frame, chunks[1], &theme),
    }

    command_line::draw(frame, chunks[2], &state.command_line, &theme);
    toast::draw(frame, chunks[1], &state.toasts.visible(), &theme);
}
