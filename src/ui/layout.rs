//! Panel regions inside the root container's padding.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HEADER_HEIGHT, INPUT_HEIGHT, MIN_CHAT_LINES, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub chat: Rect,
    pub input: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_CHAT_LINES),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    LayoutRegions {
        header: chunks[0],
        chat: chunks[1],
        input: chunks[2],
        status: chunks[3],
    }
}
