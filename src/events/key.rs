//! Keyboard event payload types.

/// The subset of the terminal's key space this engine cares about:
/// enough for turn-paced UI navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key, `F(1)` through `F(12)`.
    F(u8),
    /// Backspace.
    Backspace,
    /// Return.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab.
    Tab,
    /// Shift-tab.
    BackTab,
    /// Delete.
    Delete,
    /// Insert.
    Insert,
    /// Escape.
    Esc,
}

/// Which modifier keys were held during a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift.
    pub shift: bool,
    /// Control.
    pub control: bool,
    /// Alt / option.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Whether any modifier was held.
    pub const fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// A key press, as produced by [`KeyboardSource`].
///
/// [`KeyboardSource`]: super::KeyboardSource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the keypress.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Check for a plain (unmodified, shift allowed) character key.
    pub fn is_char(&self, ch: char) -> bool {
        self.code == KeyCode::Char(ch) && !self.modifiers.control && !self.modifiers.alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_char() {
        assert!(KeyEvent::new(KeyCode::Char('q')).is_char('q'));
        assert!(!KeyEvent::new(KeyCode::Char('q')).is_char('w'));
        assert!(!KeyEvent::new(KeyCode::Enter).is_char('q'));

        let ctrl_q = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers {
                control: true,
                ..KeyModifiers::NONE
            },
        };
        assert!(!ctrl_q.is_char('q'));
    }
}
