//! Toast overlay in the top right corner

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::notify::{Severity, Toast};
use crate::theme::Theme;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Stack visible toasts, newest at the bottom
pub fn draw(frame: &mut Frame, area: Rect, toasts: &[Toast], theme: &Theme) {
    let width = TOAST_WIDTH.min(area.width);
    let max = (area.height / TOAST_HEIGHT) as usize;
    let skip = toasts.len().saturating_sub(max);

    for (row, toast) in toasts.iter().skip(skip).enumerate() {
        let rect = Rect {
            x: area.right().saturating_sub(width),
            y: area.y + row as u16 * TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };

        let (icon, colour) = match toast.severity {
            Severity::Info => ("ℹ", theme.info),
            Severity::Success => ("✓", theme.success),
            Severity::Error => ("✗", theme.error),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colour))
            .style(Style::default().bg(theme.bg_tertiary));
        let text = Span::styled(
            format!("{} {}", icon, toast.message),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        );

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(text).block(block), rect);
    }
}
