//! Keyboard event source: non-blocking crossterm polling.

use super::event::{Event, EventSource};
use super::key::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{self, KeyEventKind};
use std::time::Duration;

/// An [`EventSource`] that drains pending terminal key presses.
///
/// Polling is strictly non-blocking: each call converts whatever
/// crossterm has already buffered into [`KeyEvent`] payloads and
/// returns. Key release/repeat reports and non-key terminal events are
/// discarded; terminal resizes are observed by the driver through the
/// backend instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardSource;

impl KeyboardSource {
    /// Create a keyboard source.
    pub const fn new() -> Self {
        Self
    }

    /// Convert a crossterm event into a key event payload.
    fn convert_event(raw: &event::Event) -> Option<KeyEvent> {
        let event::Event::Key(key) = raw else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        Some(KeyEvent {
            code: Self::convert_key_code(key.code)?,
            modifiers: Self::convert_modifiers(key.modifiers),
        })
    }

    /// Convert crossterm's `KeyCode` to ours.
    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::F(n) => KeyCode::F(n),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Home => KeyCode::Home,
            event::KeyCode::End => KeyCode::End,
            event::KeyCode::PageUp => KeyCode::PageUp,
            event::KeyCode::PageDown => KeyCode::PageDown,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::BackTab => KeyCode::BackTab,
            event::KeyCode::Delete => KeyCode::Delete,
            event::KeyCode::Insert => KeyCode::Insert,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None,
        })
    }

    /// Convert crossterm's `KeyModifiers` to ours.
    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }
}

impl EventSource for KeyboardSource {
    fn poll_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(true) = event::poll(Duration::ZERO) {
            let Ok(raw) = event::read() else {
                break;
            };
            if let Some(key) = Self::convert_event(&raw) {
                events.push(Event::new(key));
            }
        }
        events
    }
}
