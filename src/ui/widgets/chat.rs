//! Chat transcript: user messages on the right, bot messages on the left.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{ChatState, Message, Sender};
use crate::ui::markdown;
use crate::ui::theme::{colors, MESSAGE_GAP};

fn label_span(sender: Sender) -> Span<'static> {
    let color = match sender {
        Sender::User => colors::ACCENT,
        Sender::Bot => colors::ACCENT_SOFT,
    };
    Span::styled(
        format!("{}: ", sender.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn message_lines(msg: &Message, markdown: bool) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(colors::TEXT);
    let mut body: Vec<Line<'static>> = if markdown && msg.sender == Sender::Bot {
        markdown::to_lines(&msg.text)
    } else {
        msg.text
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect()
    };
    if body.is_empty() {
        body.push(Line::default());
    }

    let mut lines = Vec::with_capacity(body.len() + 1);
    for (i, line) in body.into_iter().enumerate() {
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        if i == 0 {
            spans.push(label_span(msg.sender));
        }
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
    if let Some(confidence) = msg.confidence_line() {
        lines.push(Line::from(Span::styled(
            confidence,
            Style::default().fg(colors::MUTED).add_modifier(Modifier::ITALIC),
        )));
    }

    let alignment = match msg.sender {
        Sender::User => Alignment::Right,
        Sender::Bot => Alignment::Left,
    };
    lines.into_iter().map(|l| l.alignment(alignment)).collect()
}

fn gap(lines: &mut Vec<Line<'static>>) {
    if !lines.is_empty() {
        for _ in 0..MESSAGE_GAP {
            lines.push(Line::default());
        }
    }
}

pub fn render(
    f: &mut Frame,
    chat: &mut ChatState,
    area: ratatui::prelude::Rect,
    markdown: bool,
    pending: usize,
    spinner_char: char,
) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in chat.conversation.messages() {
        gap(&mut lines);
        lines.extend(message_lines(msg, markdown));
    }

    if pending > 0 {
        gap(&mut lines);
        lines.push(Line::from(vec![
            label_span(Sender::Bot),
            Span::styled(format!("{spinner_char} "), Style::default().fg(colors::ACCENT)),
            Span::styled("Thinking…", Style::default().fg(colors::TEXT_DIM)),
        ]));
    }

    if chat.conversation.is_empty() && pending == 0 {
        lines.push(Line::from(Span::styled(
            "Ask about your database.  Enter to send",
            Style::default().fg(colors::MUTED),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let para = Paragraph::new(lines)
        .style(Style::default().fg(colors::TEXT).bg(colors::BG))
        .wrap(Wrap { trim: false });
    chat.sync_viewport(para.line_count(inner.width), inner.height as usize);
    chat.step_scroll();
    let scroll = u16::try_from(chat.scroll).unwrap_or(u16::MAX);
    f.render_widget(para.scroll((scroll, 0)), inner);
}
