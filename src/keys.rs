//! Undo and redo hot keys.

/// A key press reported by the host.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct KeyEvent {
    /// The character of the pressed key.
    pub key: char,
    /// Whether the control key was held.
    pub ctrl: bool,
    /// Whether the shift key was held.
    pub shift: bool,
}

impl KeyEvent {
    /// Returns an event for `key` without modifiers.
    pub const fn new(key: char) -> KeyEvent {
        KeyEvent {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// Sets whether the control key was held.
    pub const fn ctrl(mut self, on: bool) -> KeyEvent {
        self.ctrl = on;
        self
    }

    /// Sets whether the shift key was held.
    pub const fn shift(mut self, on: bool) -> KeyEvent {
        self.shift = on;
        self
    }
}

/// The operation bound to a key combination.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Shortcut {
    /// `Ctrl+Z`.
    Undo,
    /// `Ctrl+Y` or `Ctrl+Shift+Z`.
    Redo,
}

impl Shortcut {
    /// Returns the shortcut triggered by the event, if any.
    ///
    /// # Examples
    /// ```
    /// # use undo_stack::{KeyEvent, Shortcut};
    /// let event = KeyEvent::new('Z').ctrl(true).shift(true);
    /// assert_eq!(Shortcut::from_event(&event), Some(Shortcut::Redo));
    /// ```
    pub fn from_event(event: &KeyEvent) -> Option<Shortcut> {
        if !event.ctrl {
            return None;
        }
        match (event.key.to_ascii_lowercase(), event.shift) {
            ('z', false) => Some(Shortcut::Undo),
            ('z', true) | ('y', _) => Some(Shortcut::Redo),
            _ => None,
        }
    }
}
