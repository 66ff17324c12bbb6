//! Application state definitions

use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::command::{Command, ParseResult, parse_command};
use super::input::Action;
use crate::config::Config;
use crate::content::ContentStore;
use crate::learning::Navigator;
use crate::notify::ToastQueue;
use crate::profile::Profile;
use crate::quiz::QuizSession;
use crate::store::KeyValueStore;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Dashboard,
    Learning,
    Quiz,
    Profile,
    Help,
}

impl Screen {
    /// Screens reachable from the tab bar, in order
    pub const TABS: [Screen; 4] = [Screen::Dashboard, Screen::Learning, Screen::Quiz, Screen::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Learning => "Learn",
            Screen::Quiz => "Quiz",
            Screen::Profile => "Profile",
            Screen::Help => "Help",
        }
    }
}

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Whether the `:` prompt is accepting keystrokes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    Normal,
    Command,
}

/// The bottom line: a `:` prompt while typing, a status message otherwise
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    pub mode: CommandMode,
    /// Text typed after the `:`
    pub input: String,
    /// Byte offset into `input`, always on a char boundary
    pub cursor: usize,
    /// Result of the last command
    pub message: Option<String>,
    pub is_error: bool,
    /// Submitted commands, oldest first
    pub history: VecDeque<String>,
    /// How far back into `history` the prompt is showing (0 = newest)
    recall: Option<usize>,
}

impl CommandLineState {
    const HISTORY_LIMIT: usize = 100;

    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.message = None;
        self.recall = None;
        self.replace_input(String::new());
    }

    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.replace_input(String::new());
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the char left of the cursor
    pub fn delete_char(&mut self) {
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.input.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(c) = self.input[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.input[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    /// Remember a submitted command; blank lines and repeats are skipped
    pub fn add_to_history(&mut self, cmd: String) {
        if cmd.trim().is_empty() || self.history.back() == Some(&cmd) {
            return;
        }
        if self.history.len() == Self::HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(cmd);
    }

    /// Recall an older command
    pub fn history_up(&mut self) {
        let depth = match self.recall {
            None => 0,
            Some(d) => (d + 1).min(self.history.len().saturating_sub(1)),
        };
        self.recall_at(depth);
    }

    /// Recall a newer command, or clear the prompt past the newest one
    pub fn history_down(&mut self) {
        match self.recall {
            Some(0) => {
                self.recall = None;
                self.replace_input(String::new());
            }
            Some(d) => self.recall_at(d - 1),
            None => {}
        }
    }

    fn recall_at(&mut self, depth: usize) {
        let Some(cmd) = self.history.iter().rev().nth(depth).cloned() else {
            return;
        };
        self.recall = Some(depth);
        self.replace_input(cmd);
    }

    /// Swap the prompt text, cursor at the end
    fn replace_input(&mut self, text: String) {
        self.cursor = text.len();
        self.input = text;
    }
}

/// Full application state
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Lesson navigation, recreated each time the learning screen opens
    pub navigator: Navigator,

    /// Quiz run, recreated each time the quiz screen opens
    pub quiz: QuizSession,

    /// Streak, XP, username and theme
    pub profile: Profile,

    /// Notifications raised by the state machines
    pub toasts: Rc<ToastQueue>,

    /// Command line state
    pub command_line: CommandLineState,

    content: Rc<dyn ContentStore>,
    store: Rc<dyn KeyValueStore>,
    feedback_duration: Duration,
}

impl AppState {
    pub fn new(content: Rc<dyn ContentStore>, store: Rc<dyn KeyValueStore>, config: &Config) -> Self {
        let toasts = Rc::new(ToastQueue::new(config.toast_lifetime()));
        let feedback_duration = config.feedback_duration();

        let navigator = Navigator::new(content.clone(), toasts.clone());
        let quiz = QuizSession::new(content.clone(), store.clone(), toasts.clone())
            .with_feedback_duration(feedback_duration);
        let profile = Profile::load(store.clone(), toasts.clone());
        profile.welcome();

        Self {
            screen: Screen::Dashboard,
            navigator,
            quiz,
            profile,
            toasts,
            command_line: CommandLineState::default(),
            content,
            store,
            feedback_duration,
        }
    }

    /// Switch screens. Learning and quiz state start fresh on each visit.
    pub fn open_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }

        match screen {
            Screen::Dashboard => {
                self.profile.reload();
                self.profile.welcome();
            }
            Screen::Profile => self.profile.reload(),
            Screen::Learning => {
                self.navigator = Navigator::new(self.content.clone(), self.toasts.clone());
            }
            Screen::Quiz => {
                self.quiz =
                    QuizSession::new(self.content.clone(), self.store.clone(), self.toasts.clone())
                        .with_feedback_duration(self.feedback_duration);
            }
            Screen::Help => {}
        }

        tracing::debug!("Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    /// Advance timers: feedback animation and toast expiry
    pub fn tick(&mut self, now: Instant) {
        self.quiz.expire_feedback(now);
        self.toasts.expire(now);
    }

    /// Apply a key action to the current screen
    pub fn handle_action(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Goto(screen) => {
                self.open_screen(screen);
                return Flow::Continue;
            }
            Action::Help => {
                self.open_screen(Screen::Help);
                return Flow::Continue;
            }
            Action::CommandMode => {
                self.command_line.enter_command_mode();
                return Flow::Continue;
            }
            _ => {}
        }

        match self.screen {
            Screen::Learning => self.handle_learning(action),
            Screen::Quiz => self.handle_quiz(action),
            Screen::Profile => {
                if action == Action::ToggleTheme {
                    self.profile.toggle_theme();
                }
            }
            Screen::Help => {
                if action == Action::Back {
                    self.open_screen(Screen::Dashboard);
                }
            }
            Screen::Dashboard => {}
        }
        Flow::Continue
    }

    fn handle_learning(&mut self, action: Action) {
        match action {
            Action::Down => {
                self.navigator.select_next_lesson();
            }
            Action::Up => {
                self.navigator.select_previous_lesson();
            }
            Action::Right => {
                self.navigator.select_next_topic();
            }
            Action::Left => {
                self.navigator.select_previous_topic();
            }
            Action::Select | Action::ToggleExample => self.navigator.toggle_example(),
            Action::MarkUnderstood => {
                if let Some(id) = self.navigator.active_lesson_id().map(str::to_string) {
                    self.navigator.mark_understood(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_quiz(&mut self, action: Action) {
        let option_count = self.quiz.current_question().map(|q| q.options.len()).unwrap_or(0);

        match action {
            Action::Choose(option) => {
                self.quiz.select(option);
            }
            Action::Down if option_count > 0 => {
                let next = self.quiz.selected().map(|s| (s + 1) % option_count).unwrap_or(0);
                self.quiz.select(next);
            }
            Action::Up if option_count > 0 => {
                let previous = self
                    .quiz
                    .selected()
                    .map(|s| (s + option_count - 1) % option_count)
                    .unwrap_or(option_count - 1);
                self.quiz.select(previous);
            }
            Action::Select => {
                if self.quiz.finished() {
                    self.quiz.restart();
                } else if self.quiz.answered() {
                    self.quiz.next();
                } else {
                    self.quiz.submit();
                }
            }
            Action::Restart => self.quiz.restart(),
            _ => {}
        }
    }

    /// Handle a key while the command line is accepting input
    pub fn handle_command_input(&mut self, action: CommandInput) -> Flow {
        match action {
            CommandInput::Char(c) => self.command_line.insert_char(c),
            CommandInput::Backspace => {
                if self.command_line.input.is_empty() {
                    self.command_line.exit_input_mode();
                } else {
                    self.command_line.delete_char();
                }
            }
            CommandInput::Left => self.command_line.move_left(),
            CommandInput::Right => self.command_line.move_right(),
            CommandInput::HistoryUp => self.command_line.history_up(),
            CommandInput::HistoryDown => self.command_line.history_down(),
            CommandInput::Cancel => self.command_line.exit_input_mode(),
            CommandInput::Submit => {
                let input = self.command_line.input.clone();
                self.command_line.add_to_history(input.clone());
                self.command_line.exit_input_mode();
                return self.run_command(&input);
            }
        }
        Flow::Continue
    }

    /// Parse and execute a `:` command
    pub fn run_command(&mut self, input: &str) -> Flow {
        match parse_command(input) {
            ParseResult::Ok(command) => self.execute(command),
            ParseResult::UnknownCommand(cmd) => {
                self.command_line.set_error(format!("Unknown command: {}", cmd));
                Flow::Continue
            }
            ParseResult::MissingArgument(cmd) => {
                self.command_line.set_error(format!("{} needs an argument", cmd));
                Flow::Continue
            }
        }
    }

    fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::Nop => self.command_line.message = None,
            Command::Help => self.open_screen(Screen::Help),
            Command::Open(screen) => self.open_screen(screen),
            Command::Name(name) => {
                if !self.profile.set_username(&name) {
                    self.command_line.set_error("Username cannot be blank");
                }
            }
            Command::Theme => {
                let mode = self.profile.toggle_theme();
                self.command_line.set_message(format!("Theme set to {}", mode.as_str()));
            }
            Command::Topic(id) => {
                self.open_screen(Screen::Learning);
                if !self.navigator.select_topic(&id) {
                    self.command_line.set_error(format!("No topic '{}'", id));
                }
            }
            Command::Lesson(id) => {
                self.open_screen(Screen::Learning);
                if !self.navigator.select_lesson(&id) {
                    self.command_line.set_error(format!("Cannot open lesson '{}'", id));
                }
            }
            Command::Restart => {
                self.open_screen(Screen::Quiz);
                self.quiz.restart();
            }
        }
        Flow::Continue
    }
}

/// Keys understood by the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandInput {
    Char(char),
    Backspace,
    Left,
    Right,
    HistoryUp,
    HistoryDown,
    Submit,
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::quiz::Feedback;
    use crate::store::{MemoryStore, XP_KEY};

    fn state() -> (AppState, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        let state = AppState::new(Rc::new(Catalog::builtin()), store.clone(), &Config::default());
        (state, store)
    }

    fn type_command(state: &mut AppState, text: &str) -> Flow {
        state.handle_action(Action::CommandMode);
        for c in text.chars() {
            state.handle_command_input(CommandInput::Char(c));
        }
        state.handle_command_input(CommandInput::Submit)
    }

    #[test]
    fn starts_on_dashboard_with_welcome() {
        let (state, _) = state();
        assert_eq!(state.screen, Screen::Dashboard);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn enter_drives_quiz_through_a_question() {
        let (mut state, store) = state();
        state.handle_action(Action::Goto(Screen::Quiz));

        state.handle_action(Action::Choose(1));
        state.handle_action(Action::Select);
        assert!(state.quiz.answered());
        assert_eq!(state.quiz.feedback(), Feedback::Correct);
        assert_eq!(store.get_int(XP_KEY, 0), 440);

        state.handle_action(Action::Select);
        assert_eq!(state.quiz.current_index(), 1);
        assert_eq!(state.quiz.selected(), None);
    }

    #[test]
    fn arrow_keys_cycle_quiz_options() {
        let (mut state, _) = state();
        state.open_screen(Screen::Quiz);

        state.handle_action(Action::Down);
        assert_eq!(state.quiz.selected(), Some(0));
        state.handle_action(Action::Up);
        assert_eq!(state.quiz.selected(), Some(3));
    }

    #[test]
    fn leaving_quiz_discards_session() {
        let (mut state, _) = state();
        state.open_screen(Screen::Quiz);
        state.handle_action(Action::Choose(1));
        state.handle_action(Action::Select);
        assert_eq!(state.quiz.score(), 1);

        state.open_screen(Screen::Dashboard);
        state.open_screen(Screen::Quiz);
        assert_eq!(state.quiz.score(), 0);
        assert_eq!(state.quiz.xp(), 440);
    }

    #[test]
    fn dashboard_reloads_xp() {
        let (mut state, _) = state();
        state.open_screen(Screen::Quiz);
        state.handle_action(Action::Choose(1));
        state.handle_action(Action::Select);

        state.open_screen(Screen::Dashboard);
        assert_eq!(state.profile.xp(), 440);
    }

    #[test]
    fn learning_keys_move_and_mark() {
        let (mut state, _) = state();
        state.open_screen(Screen::Learning);

        state.handle_action(Action::Up);
        assert_eq!(state.navigator.active_lesson_id(), Some("a2"));

        state.handle_action(Action::ToggleExample);
        assert!(state.navigator.example_expanded());

        state.handle_action(Action::Right);
        assert_eq!(state.navigator.active_topic_id(), Some("sorting"));

        state.handle_action(Action::MarkUnderstood);
        assert!(state.navigator.is_understood("s2"));
    }

    #[test]
    fn quit_command_stops_loop() {
        let (mut state, _) = state();
        assert_eq!(type_command(&mut state, "q"), Flow::Quit);
    }

    #[test]
    fn name_command_updates_profile() {
        let (mut state, _) = state();
        assert_eq!(type_command(&mut state, "name Ada"), Flow::Continue);
        assert_eq!(state.profile.username(), "Ada");
        assert_eq!(state.command_line.history, vec!["name Ada".to_string()]);
    }

    #[test]
    fn lesson_command_refuses_locked_lesson() {
        let (mut state, _) = state();
        type_command(&mut state, "lesson a4");
        assert_eq!(state.screen, Screen::Learning);
        assert_eq!(state.navigator.active_lesson_id(), Some("a3"));
        assert!(state.command_line.is_error);
    }

    #[test]
    fn unknown_command_sets_error() {
        let (mut state, _) = state();
        type_command(&mut state, "frobnicate");
        assert_eq!(state.command_line.message.as_deref(), Some("Unknown command: frobnicate"));
    }

    #[test]
    fn backspace_on_empty_input_leaves_command_mode() {
        let (mut state, _) = state();
        state.handle_action(Action::CommandMode);
        state.handle_command_input(CommandInput::Backspace);
        assert!(!state.command_line.is_input_mode());
    }

    #[test]
    fn history_navigation() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("learn".into());
        cl.add_to_history("quiz".into());
        cl.add_to_history("quiz".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input, "quiz");
        cl.history_up();
        assert_eq!(cl.input, "learn");
        cl.history_down();
        assert_eq!(cl.input, "quiz");
        cl.history_down();
        assert!(cl.input.is_empty());
    }

    #[test]
    fn editing_respects_multibyte_chars() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode();
        for c in "n\u{e4}m\u{e9}".chars() {
            cl.insert_char(c);
        }
        cl.move_left();
        cl.move_left();
        cl.delete_char();
        assert_eq!(cl.input, "nm\u{e9}");
        cl.move_right();
        cl.insert_char('!');
        assert_eq!(cl.input, "nm!\u{e9}");
    }

    #[test]
    fn tick_expires_feedback() {
        let (mut state, _) = state();
        state.open_screen(Screen::Quiz);
        state.handle_action(Action::Choose(0));
        state.handle_action(Action::Select);
        let started = state.quiz.feedback_started().unwrap();

        state.tick(started + Duration::from_secs(1));
        assert_eq!(state.quiz.feedback(), Feedback::Idle);
    }
}
