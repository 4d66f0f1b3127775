#![forbid(unsafe_code)]

//! Decoded input events consumed by the selection widgets.
//!
//! Hosts own the terminal driver and translate raw byte sequences into these
//! values before forwarding them. Nothing in this crate reads from stdin.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the terminal cannot report it
//! - `Modifiers` use bitflags for easy combination
//! - `Resize` only carries the new cell dimensions; the widget decides what
//!   part of them it uses

use bitflags::bitflags;

/// An input event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// The area available to the widget changed.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl From<KeyEvent> for Event {
    fn from(key: KeyEvent) -> Self {
        Self::Key(key)
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Shorthand for a plain character press.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Press or auto-repeat. Releases never drive navigation.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }

    /// Whether a chord modifier (Ctrl, Alt or Super) is held.
    ///
    /// Shift is excluded: `^` and `$` arrive shifted on most layouts.
    #[must_use]
    pub const fn has_chord_modifier(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::SUPER))
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Function key (F1-F24).
    F(u8),

    /// Null character (Ctrl+Space or Ctrl+@).
    Null,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_shorthand_matches_new() {
        assert_eq!(KeyEvent::char('j'), KeyEvent::new(KeyCode::Char('j')));
        assert!(KeyEvent::char('j').is_char('j'));
        assert!(!KeyEvent::char('j').is_char('k'));
    }

    #[test]
    fn release_is_not_press() {
        let press = KeyEvent::new(KeyCode::Down);
        assert!(press.is_press());
        assert!(press.with_kind(KeyEventKind::Repeat).is_press());
        assert!(!press.with_kind(KeyEventKind::Release).is_press());
    }

    #[test]
    fn shift_is_not_a_chord_modifier() {
        let dollar = KeyEvent::char('$').with_modifiers(Modifiers::SHIFT);
        assert!(!dollar.has_chord_modifier());

        for m in [Modifiers::CTRL, Modifiers::ALT, Modifiers::SUPER] {
            let ev = KeyEvent::char('j').with_modifiers(m | Modifiers::SHIFT);
            assert!(ev.has_chord_modifier(), "{m:?} should block navigation");
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
        assert_eq!(KeyEventKind::default(), KeyEventKind::Press);
    }

    #[test]
    fn key_converts_into_event() {
        let ev: Event = KeyEvent::new(KeyCode::Enter).into();
        assert_eq!(ev, Event::Key(KeyEvent::new(KeyCode::Enter)));
    }
}
