//! Status bar: send state and key hints.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

const HINTS: &str = " PgUp/PgDn scroll  ↑↓ history  Enter send  Esc quit ";

fn left_text(pending: usize, spinner_char: char) -> String {
    match pending {
        0 => " Ready".to_string(),
        1 => format!(" {spinner_char} Waiting for reply…"),
        n => format!(" {spinner_char} Waiting for {n} replies…"),
    }
}

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, pending: usize, spinner_char: char) {
    let left = left_text(pending, spinner_char);
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + HINTS.chars().count());
    let line = format!("{}{}{}", left, " ".repeat(pad), HINTS);
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
