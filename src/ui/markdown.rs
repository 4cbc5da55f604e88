//! Markdown bot replies to ratatui lines: headings, code, emphasis, lists, rules.

use pulldown_cmark::{Event, Options, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::colors;

/// Accumulates spans for the current line and flushes them on block ends.
#[derive(Default)]
struct LineWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    in_code_block: bool,
    in_heading: bool,
    emphasis: usize,
    /// One entry per open list: the next ordinal for ordered lists.
    lists: Vec<Option<u64>>,
}

impl LineWriter {
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn text_style(&self) -> Style {
        let style = Style::default().fg(colors::TEXT);
        if self.in_heading {
            style.fg(colors::HEADING).add_modifier(Modifier::BOLD)
        } else if self.emphasis > 0 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn code_line(&mut self, text: &str) {
        self.lines.push(Line::from(vec![
            Span::styled(" ┃ ", Style::default().fg(colors::BORDER).bg(colors::CODE_BG)),
            Span::styled(text.to_string(), Style::default().fg(colors::TEXT).bg(colors::CODE_BG)),
        ]));
    }

    fn list_marker(&mut self) -> String {
        let depth = self.lists.len();
        let indent = "  ".repeat(depth.saturating_sub(1));
        match self.lists.last_mut() {
            Some(Some(n)) => {
                let marker = format!("{indent}{n}. ");
                *n += 1;
                marker
            }
            _ if depth <= 1 => format!("{indent}• "),
            _ => format!("{indent}◦ "),
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                self.flush();
                self.in_code_block = true;
            }
            Event::End(Tag::CodeBlock(_)) => self.in_code_block = false,

            Event::Start(Tag::Heading(..)) => {
                self.flush();
                self.in_heading = true;
            }
            Event::End(Tag::Heading(..)) => {
                self.flush();
                self.in_heading = false;
            }

            Event::Start(Tag::List(start)) => {
                self.flush();
                self.lists.push(start);
            }
            Event::End(Tag::List(_)) => {
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush();
                let marker = self.list_marker();
                self.current.push(Span::styled(marker, Style::default().fg(colors::ACCENT)));
            }
            Event::End(Tag::Item) => self.flush(),

            Event::Start(Tag::Strong) | Event::Start(Tag::Emphasis) => self.emphasis += 1,
            Event::End(Tag::Strong) | Event::End(Tag::Emphasis) => {
                self.emphasis = self.emphasis.saturating_sub(1)
            }

            Event::Text(text) if self.in_code_block => {
                for line in text.lines() {
                    self.code_line(line);
                }
            }
            Event::Text(text) => {
                let style = self.text_style();
                self.current.push(Span::styled(text.into_string(), style));
            }
            Event::Code(code) => self.current.push(Span::styled(
                code.into_string(),
                Style::default().fg(colors::ACCENT).bg(colors::CODE_BG),
            )),

            Event::SoftBreak | Event::HardBreak | Event::End(Tag::Paragraph) => self.flush(),
            Event::Rule => {
                self.flush();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(colors::BORDER),
                )));
            }
            _ => {}
        }
    }
}

/// Convert markdown to owned lines. Never returns an empty vec.
pub fn to_lines(md: &str) -> Vec<Line<'static>> {
    let mut writer = LineWriter::default();
    for event in Parser::new_ext(md, Options::all()) {
        writer.event(event);
    }
    writer.flush();
    if writer.lines.is_empty() {
        writer.lines.push(Line::default());
    }
    writer.lines
}
