//! TUI widgets: header, chat transcript, input, status.

mod chat;
mod header;
mod input;
mod status;

pub use chat::render as render_chat;
pub use header::render as render_header;
pub use input::render as render_input;
pub use status::render as render_status;

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
