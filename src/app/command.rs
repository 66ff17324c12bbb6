//! Command parsing for the command line

use super::state::Screen;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Switch screen: :home, :learn, :quiz, :profile
    Open(Screen),
    /// Change the username: :name <username>
    Name(String),
    /// Toggle light/dark mode: :theme
    Theme,
    /// Jump to a topic: :topic <id>
    Topic(String),
    /// Jump to a lesson of the active topic: :lesson <id>
    Lesson(String),
    /// Restart the quiz: :restart
    Restart,
    /// Clear message: (empty command)
    Nop,
}

/// Outcome of parsing a `:` line
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    Ok(Command),
    /// First word is not a known command
    UnknownCommand(String),
    /// Command given without its required argument
    MissingArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    let (cmd, args) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let args = args.trim();

    let with_arg = |name: &str, make: fn(String) -> Command| {
        if args.is_empty() {
            ParseResult::MissingArgument(name.to_string())
        } else {
            ParseResult::Ok(make(args.to_string()))
        }
    };

    match cmd.to_lowercase().as_str() {
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "home" | "dashboard" => ParseResult::Ok(Command::Open(Screen::Dashboard)),
        "learn" | "lessons" => ParseResult::Ok(Command::Open(Screen::Learning)),
        "quiz" => ParseResult::Ok(Command::Open(Screen::Quiz)),
        "profile" => ParseResult::Ok(Command::Open(Screen::Profile)),
        "theme" => ParseResult::Ok(Command::Theme),
        "restart" => ParseResult::Ok(Command::Restart),
        "name" => with_arg("name", Command::Name),
        "topic" | "t" => with_arg("topic", Command::Topic),
        "lesson" | "l" => with_arg("lesson", Command::Lesson),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ok(command: Command) -> ParseResult {
        ParseResult::Ok(command)
    }

    #[test]
    fn quit_aliases_ignore_case() {
        for input in ["q", "quit", "Q", "  quit  "] {
            assert_eq!(parse_command(input), ok(Command::Quit));
        }
    }

    #[test]
    fn screen_commands() {
        assert_eq!(parse_command("learn"), ok(Command::Open(Screen::Learning)));
        assert_eq!(parse_command("quiz"), ok(Command::Open(Screen::Quiz)));
        assert_eq!(parse_command("dashboard"), ok(Command::Open(Screen::Dashboard)));
        assert_eq!(parse_command("profile"), ok(Command::Open(Screen::Profile)));
    }

    #[test]
    fn name_keeps_inner_spaces() {
        assert_eq!(parse_command("name  Ada Lovelace "), ok(Command::Name("Ada Lovelace".into())));
    }

    #[test]
    fn argument_commands_need_an_argument() {
        assert_eq!(parse_command("name"), ParseResult::MissingArgument("name".into()));
        assert_eq!(parse_command("topic   "), ParseResult::MissingArgument("topic".into()));
    }

    #[test]
    fn topic_and_lesson_short_forms() {
        assert_eq!(parse_command("t trees"), ok(Command::Topic("trees".into())));
        assert_eq!(parse_command("l a2"), ok(Command::Lesson("a2".into())));
    }

    #[test]
    fn unknown_command_reports_first_word() {
        assert_eq!(parse_command("fly away"), ParseResult::UnknownCommand("fly".into()));
    }

    #[test]
    fn blank_line_is_nop() {
        assert_eq!(parse_command(""), ok(Command::Nop));
        assert_eq!(parse_command("   "), ok(Command::Nop));
    }
}
