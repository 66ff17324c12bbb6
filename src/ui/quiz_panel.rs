//! Quiz screen: question, options, feedback and results

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::progress_bar;
use crate::content::Question;
use crate::quiz::{Feedback, OptionState, QuizSession};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, quiz: &QuizSession, theme: &Theme) {
    let border = match quiz.feedback() {
        Feedback::Idle => theme.border_focused,
        Feedback::Correct => theme.success,
        Feedback::Incorrect => theme.error,
    };

    let block = Block::default()
        .title(if quiz.finished() { " Quiz Results " } else { " Quiz " })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if quiz.finished() {
        draw_results(frame, inner, quiz, theme);
    } else {
        draw_question(frame, inner, quiz, theme);
    }
}

fn draw_results(frame: &mut Frame, area: Rect, quiz: &QuizSession, theme: &Theme) {
    let mut lines = vec![Line::from(""), Line::from("")];

    if quiz.total() == 0 {
        lines.push(Line::from(Span::styled(
            "No questions available yet.",
            Style::default().fg(theme.fg_muted),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("{}/{}", quiz.score(), quiz.total()),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        if let Some(verdict) = quiz.verdict() {
            lines.push(Line::from(Span::styled(
                verdict.message(),
                Style::default().fg(theme.fg_primary),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("⭐ {} XP", quiz.xp()),
            Style::default().fg(theme.accent_secondary),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Enter] Try Again", Style::default().fg(theme.fg_muted))));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_question(frame: &mut Frame, area: Rect, quiz: &QuizSession, theme: &Theme) {
    let Some(question) = quiz.current_question() else {
        return;
    };

    let [progress_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(area);

    let progress = Line::from(vec![
        Span::styled(
            format!("Question {} of {}  ", quiz.current_index() + 1, quiz.total()),
            Style::default().fg(theme.fg_muted),
        ),
        Span::styled(progress_bar(quiz.progress_percent(), 24), Style::default().fg(theme.accent_primary)),
        Span::styled(format!(" {:.0}%", quiz.progress_percent()), Style::default().fg(theme.fg_muted)),
    ]);
    frame.render_widget(Paragraph::new(progress), progress_area);

    let mut lines = vec![
        Line::from(Span::styled(
            question.question.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        lines.push(option_line(i, option, quiz.option_state(i), theme));
    }
    lines.push(Line::from(""));

    if quiz.answered() {
        lines.extend(explanation_lines(question, quiz, theme));
    } else {
        let hint = if quiz.selected().is_some() {
            "[Enter] Submit"
        } else {
            "[a-d] or [j/k] choose an answer"
        };
        lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.fg_muted))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);
}

fn option_line(index: usize, option: &str, state: OptionState, theme: &Theme) -> Line<'static> {
    let (marker, style) = match state {
        OptionState::Idle => ("○", Style::default().fg(theme.fg_secondary)),
        OptionState::Selected => (
            "●",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
        OptionState::Correct => (
            "✓",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ),
        OptionState::Wrong => ("✗", Style::default().fg(theme.error)),
        OptionState::Dimmed => ("○", Style::default().fg(theme.fg_muted)),
    };

    Line::from(Span::styled(
        format!("  {} {}. {}", marker, Question::option_label(index), option),
        style,
    ))
}

fn explanation_lines(question: &Question, quiz: &QuizSession, theme: &Theme) -> Vec<Line<'static>> {
    let correct = quiz.selected().is_some_and(|s| question.is_correct(s));
    let (heading, colour) = if correct {
        ("Correct!", theme.success)
    } else {
        ("Not quite.", theme.error)
    };
    let next = if quiz.is_last_question() {
        "[Enter] See Results"
    } else {
        "[Enter] Next Question"
    };

    vec![
        Line::from(Span::styled(heading, Style::default().fg(colour).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(question.explanation.clone(), Style::default().fg(theme.fg_secondary))),
        Line::from(""),
        Line::from(Span::styled(next, Style::default().fg(theme.fg_muted))),
    ]
}
