/// Keyboard key identifier.
///
/// Only keys the program reacts to get a variant. Anything else is
/// `Key::Unknown(u32)` carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single key transition. OS key-repeats arrive as further presses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    pub const fn new(key: Key, state: KeyState) -> Self {
        Self { key, state }
    }

    /// True for the press (not release) of `key`.
    pub fn is_press_of(&self, key: Key) -> bool {
        self.key == key && self.state == KeyState::Pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_matches_only_pressed_state() {
        assert!(KeyEvent::new(Key::Escape, KeyState::Pressed).is_press_of(Key::Escape));
        assert!(!KeyEvent::new(Key::Escape, KeyState::Released).is_press_of(Key::Escape));
        assert!(!KeyEvent::new(Key::Space, KeyState::Pressed).is_press_of(Key::Escape));
    }
}
