//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::{CommandInput, Screen};

/// Map a key to an action (normal mode)
///
/// With `vim_mode` off only the arrow keys navigate.
pub fn key_to_action(key: KeyCode, vim_mode: bool) -> Option<Action> {
    match key {
        KeyCode::Char('j') if vim_mode => Some(Action::Down),
        KeyCode::Char('k') if vim_mode => Some(Action::Up),
        KeyCode::Char('h') if vim_mode => Some(Action::Left),
        KeyCode::Char('l') if vim_mode => Some(Action::Right),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        // Screens
        KeyCode::Char('1') => Some(Action::Goto(Screen::Dashboard)),
        KeyCode::Char('2') => Some(Action::Goto(Screen::Learning)),
        KeyCode::Char('3') => Some(Action::Goto(Screen::Quiz)),
        KeyCode::Char('4') => Some(Action::Goto(Screen::Profile)),
        // Quiz answers
        KeyCode::Char(c @ 'a'..='d') => Some(Action::Choose((c as u8 - b'a') as usize)),
        KeyCode::Char('r') => Some(Action::Restart),
        // Lessons
        KeyCode::Char('e') => Some(Action::ToggleExample),
        KeyCode::Char('m') => Some(Action::MarkUnderstood),
        // Profile
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        _ => None,
    }
}

/// Map a key to a command line edit (command mode)
pub fn key_to_command_input(key: KeyCode, modifiers: KeyModifiers) -> Option<CommandInput> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('c') => Some(CommandInput::Cancel),
            _ => None,
        };
    }

    match key {
        KeyCode::Char(c) => Some(CommandInput::Char(c)),
        KeyCode::Backspace => Some(CommandInput::Backspace),
        KeyCode::Left => Some(CommandInput::Left),
        KeyCode::Right => Some(CommandInput::Right),
        KeyCode::Up => Some(CommandInput::HistoryUp),
        KeyCode::Down => Some(CommandInput::HistoryDown),
        KeyCode::Enter => Some(CommandInput::Submit),
        KeyCode::Esc => Some(CommandInput::Cancel),
        _ => None,
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Selection
    Select,
    Back,

    // Quiz
    Choose(usize),
    Restart,

    // Lessons
    ToggleExample,
    MarkUnderstood,

    // Profile
    ToggleTheme,

    // Modes
    Goto(Screen),
    CommandMode,
    Help,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(key_to_action(KeyCode::Char('j'), true), Some(Action::Down));
    }

    #[test]
    fn vim_keys_disabled_without_vim_mode() {
        assert_eq!(key_to_action(KeyCode::Char('j'), false), None);
        assert_eq!(key_to_action(KeyCode::Down, false), Some(Action::Down));
    }

    #[test]
    fn letters_choose_options() {
        assert_eq!(key_to_action(KeyCode::Char('a'), true), Some(Action::Choose(0)));
        assert_eq!(key_to_action(KeyCode::Char('d'), true), Some(Action::Choose(3)));
    }

    #[test]
    fn digits_switch_screens() {
        assert_eq!(key_to_action(KeyCode::Char('3'), true), Some(Action::Goto(Screen::Quiz)));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x'), true), None);
    }

    #[test]
    fn ctrl_c_cancels_command() {
        assert_eq!(
            key_to_command_input(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(CommandInput::Cancel)
        );
        assert_eq!(
            key_to_command_input(KeyCode::Char('c'), KeyModifiers::NONE),
            Some(CommandInput::Char('c'))
        );
    }
}
