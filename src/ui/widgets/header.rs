//! Header: application title and the endpoint replies come from.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

const TITLE: &str = "Experimental Database Assistant Chatbot";

pub fn render(f: &mut Frame, endpoint: &str, area: ratatui::prelude::Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(endpoint.to_string(), Style::default().fg(colors::MUTED))),
    ];
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}
