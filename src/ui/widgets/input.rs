//! Input bar: prompt, draft text or placeholder, cursor.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const PROMPT: &str = " ▸ ";
const PLACEHOLDER: &str = "How can I help you today?";

pub fn render(f: &mut Frame, draft: &str, cursor: usize, area: ratatui::prelude::Rect) {
    let body = if draft.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(colors::MUTED))
    } else {
        Span::styled(draft, Style::default().fg(colors::TEXT))
    };
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
        body,
    ]);
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Keep the cursor visible on long drafts by scrolling the line horizontally.
    let prompt_width = Span::raw(PROMPT).width();
    let before_cursor = draft.get(..cursor).map(|s| Span::raw(s).width()).unwrap_or(0);
    let room = (inner.width as usize).saturating_sub(prompt_width + 1);
    let offset = before_cursor.saturating_sub(room);
    let offset_cols = u16::try_from(offset).unwrap_or(u16::MAX);
    f.render_widget(Paragraph::new(line).scroll((0, offset_cols)), inner);

    let column = u16::try_from(prompt_width + before_cursor - offset).unwrap_or(u16::MAX);
    let last_column = inner.x.saturating_add(inner.width.saturating_sub(1));
    f.set_cursor_position(Position {
        x: inner.x.saturating_add(column).min(last_column),
        y: inner.y,
    });
}
