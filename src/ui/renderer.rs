//! Root container: a padded frame that hosts the chat panel.

use ratatui::widgets::{Block, Padding};
use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::{colors, PAD_X, PAD_Y, SPINNER};
use crate::ui::widgets::{render_chat, render_header, render_input, render_status};

pub fn render(f: &mut Frame, app: &mut App, tick: usize) {
    let root = Block::default()
        .padding(Padding::symmetric(PAD_X, PAD_Y))
        .style(ratatui::style::Style::default().bg(colors::ELEVATED));
    let area = root.inner(f.area());
    f.render_widget(root, f.area());

    let regions = layout::compute(area);
    let spinner_char = SPINNER[tick % SPINNER.len()];

    render_header(f, app.endpoint(), regions.header);
    render_chat(
        f,
        &mut app.state.chat,
        regions.chat,
        app.state.render_markdown,
        app.state.pending,
        spinner_char,
    );
    render_input(f, &app.state.draft, app.state.cursor, regions.input);
    render_status(f, regions.status, app.state.pending, spinner_char);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChatClient;
    use crate::config::Config;
    use crate::ui::widgets::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;
    use tokio::runtime::Handle;

    #[tokio::test]
    async fn panel_sits_inside_padded_root() {
        let config = Config {
            endpoint: "http://127.0.0.1:1/api/chat/".to_string(),
            timeout_secs: 1,
            log_file: PathBuf::from("test.log"),
            markdown: false,
        };
        let mut app = App::new(ChatClient::new(&config).unwrap(), Handle::current());
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| render(f, &mut app, 0)).unwrap();
        let rows = buffer_lines(terminal.backend().buffer());

        assert!(rows[0].trim().is_empty());
        assert!(rows[15].trim().is_empty());
        for row in &rows {
            assert!(row.starts_with("  "), "left padding missing: {row:?}");
            assert!(row.ends_with("  "), "right padding missing: {row:?}");
        }
        assert!(rows[1].contains("Experimental Database Assistant Chatbot"));
        assert!(rows[2].contains("http://127.0.0.1:1/api/chat/"));
        assert!(rows[3].starts_with("  ╭"));
        assert!(rows.iter().any(|r| r.contains("How can I help you today?")));
    }
}
