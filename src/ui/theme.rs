//! Theme: dark canvas, accent labels, muted secondary text.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas (transcript area).
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Header, input bar, status.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// "You" label, prompt, cursor.
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// "Bot" label.
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    pub const HEADING: Color = Color::Rgb(0xff, 0xc8, 0x6b);
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    /// Hints, placeholder, confidence line.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    pub const CODE_BG: Color = Color::Rgb(0x1e, 0x24, 0x2e);
}

pub const HEADER_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;
/// Top border plus one line of text.
pub const INPUT_HEIGHT: u16 = 2;
pub const MIN_CHAT_LINES: u16 = 3;
/// Blank line between messages.
pub const MESSAGE_GAP: usize = 1;
/// Padding of the root container (chars, lines).
pub const PAD_X: u16 = 2;
pub const PAD_Y: u16 = 1;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
