//! Keybindings: Enter send, Esc/Ctrl+C quit, Ctrl+U clear, Up/Down history, PgUp/PgDn scroll.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);
    let ctrl = mods.contains(KeyModifiers::CONTROL);

    match code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('u') if ctrl => return Some(Action::ClearInput),
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Enter => return Some(Action::Submit),
        KeyCode::Backspace => return Some(Action::Backspace),
        KeyCode::Delete => return Some(Action::Delete),
        KeyCode::Left => return Some(Action::CursorLeft),
        KeyCode::Right => return Some(Action::CursorRight),
        KeyCode::Home if ctrl => return Some(Action::ChatScrollTop),
        KeyCode::End if ctrl => return Some(Action::ChatScrollBottom),
        KeyCode::Home => return Some(Action::CursorHome),
        KeyCode::End => return Some(Action::CursorEnd),
        KeyCode::Up if ctrl => return Some(Action::ChatScrollUp),
        KeyCode::Down if ctrl => return Some(Action::ChatScrollDown),
        KeyCode::Up => return Some(Action::HistoryUp),
        KeyCode::Down => return Some(Action::HistoryDown),
        KeyCode::PageUp => return Some(Action::ChatScrollPageUp),
        KeyCode::PageDown => return Some(Action::ChatScrollPageDown),
        _ => {}
    }

    // Any other character goes to input (allow Alt for accented chars; only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !ctrl && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}
