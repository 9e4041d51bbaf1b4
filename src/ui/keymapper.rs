//! Key mapping for CV terminal input
//!
//! Converts crossterm key events into the small key vocabulary the
//! input dispatcher understands.

use bitflags::bitflags;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

bitflags! {
    /// Modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        let mut result = Modifiers::empty();
        if mods.contains(KeyModifiers::SHIFT) {
            result |= Modifiers::SHIFT;
        }
        if mods.contains(KeyModifiers::CONTROL) {
            result |= Modifiers::CTRL;
        }
        if mods.contains(KeyModifiers::ALT) {
            result |= Modifiers::ALT;
        }
        if mods.intersects(KeyModifiers::META | KeyModifiers::SUPER) {
            result |= Modifiers::META;
        }
        result
    }
}

/// Keys the dispatcher distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedKey {
    /// A character-producing key
    Char(char),
    /// Character delete
    Backspace,
    /// Line submit
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Anything else (function keys, Tab, Esc, ...)
    Other,
}

/// A single key press delivered to the terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: NamedKey,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(key: NamedKey, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Unmodified character key
    pub fn char(ch: char) -> Self {
        Self::new(NamedKey::Char(ch), Modifiers::empty())
    }

    /// Ctrl+C
    #[allow(dead_code)]
    pub fn interrupt() -> Self {
        Self::new(NamedKey::Char('c'), Modifiers::CTRL)
    }

    /// Whether this is the animation interrupt combination (Ctrl+C)
    pub fn is_interrupt(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
            && matches!(self.key, NamedKey::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
    }

    /// No Ctrl, Alt or Meta held (Shift is fine)
    pub fn is_printable(&self) -> bool {
        !self
            .modifiers
            .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META)
    }
}

impl From<NamedKey> for KeyInput {
    fn from(key: NamedKey) -> Self {
        Self::new(key, Modifiers::empty())
    }
}

/// Key mapper for converting crossterm events to `KeyInput`
pub struct KeyMapper;

impl KeyMapper {
    /// Map a crossterm KeyEvent
    pub fn map(event: &KeyEvent) -> KeyInput {
        let key = match event.code {
            KeyCode::Char(ch) => NamedKey::Char(ch),
            KeyCode::Backspace => NamedKey::Backspace,
            KeyCode::Enter => NamedKey::Enter,
            KeyCode::Up => NamedKey::ArrowUp,
            KeyCode::Down => NamedKey::ArrowDown,
            KeyCode::Left => NamedKey::ArrowLeft,
            KeyCode::Right => NamedKey::ArrowRight,
            _ => NamedKey::Other,
        };
        KeyInput::new(key, Modifiers::from(event.modifiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn test_char_keys() {
        let input = KeyMapper::map(&key_event(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(input, KeyInput::char('a'));
        assert!(input.is_printable());

        // Shift does not make a key unprintable
        let input = KeyMapper::map(&key_event(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(input.key, NamedKey::Char('A'));
        assert!(input.is_printable());

        let input = KeyMapper::map(&key_event(KeyCode::Char('x'), KeyModifiers::ALT));
        assert!(!input.is_printable());
    }

    #[test]
    fn test_interrupt_detection() {
        let input = KeyMapper::map(&key_event(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(input.is_interrupt());

        let input = KeyMapper::map(&key_event(
            KeyCode::Char('C'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert!(input.is_interrupt());

        let input = KeyMapper::map(&key_event(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!input.is_interrupt());

        let input = KeyMapper::map(&key_event(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert!(!input.is_interrupt());
    }

    #[test]
    fn test_named_keys() {
        let cases = [
            (KeyCode::Backspace, NamedKey::Backspace),
            (KeyCode::Enter, NamedKey::Enter),
            (KeyCode::Up, NamedKey::ArrowUp),
            (KeyCode::Down, NamedKey::ArrowDown),
            (KeyCode::Left, NamedKey::ArrowLeft),
            (KeyCode::Right, NamedKey::ArrowRight),
            (KeyCode::F(1), NamedKey::Other),
            (KeyCode::Tab, NamedKey::Other),
        ];
        for (code, expected) in cases {
            assert_eq!(KeyMapper::map(&key_event(code, KeyModifiers::NONE)).key, expected);
        }
    }

    #[test]
    fn test_meta_and_super_fold_into_meta() {
        let input = KeyMapper::map(&key_event(KeyCode::Char('k'), KeyModifiers::SUPER));
        assert!(input.modifiers.contains(Modifiers::META));
        assert!(!input.is_printable());
    }
}
