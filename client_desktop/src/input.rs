//! Keyboard input handling

use game_core::{HeldKeys, Key};
use winit::keyboard::KeyCode;

/// Map a physical key to the engine's key set
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(Key::Digit3),
        KeyCode::Digit5 | KeyCode::Numpad5 => Some(Key::Digit5),
        KeyCode::Digit7 | KeyCode::Numpad7 => Some(Key::Digit7),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Key::Down),
        _ => None,
    }
}

/// Tracks which movement keys are currently held
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HeldKeys,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Snapshot for this frame
    pub fn held(&self) -> HeldKeys {
        self.held
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.held.up = pressed,
            Key::Down => self.held.down = pressed,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::Digit3), Some(Key::Digit3));
        assert_eq!(map_key(KeyCode::Numpad7), Some(Key::Digit7));
        assert_eq!(map_key(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::Up));
        assert_eq!(map_key(KeyCode::KeyS), Some(Key::Down));
        assert_eq!(map_key(KeyCode::Digit4), None);
        assert_eq!(map_key(KeyCode::Space), None);
    }

    #[test]
    fn test_held_keys_follow_press_and_release() {
        let mut keyboard = KeyboardState::new();
        assert_eq!(keyboard.held().dir(), 0);

        keyboard.key_down(Key::Up);
        assert_eq!(keyboard.held().dir(), -1);

        keyboard.key_down(Key::Down);
        assert_eq!(keyboard.held().dir(), 0, "Opposing keys cancel");

        keyboard.key_up(Key::Up);
        assert_eq!(keyboard.held().dir(), 1);

        keyboard.key_up(Key::Down);
        assert_eq!(keyboard.held(), HeldKeys::new());
    }

    #[test]
    fn test_menu_keys_do_not_move_paddle() {
        let mut keyboard = KeyboardState::new();
        keyboard.key_down(Key::Digit5);
        keyboard.key_down(Key::Escape);
        assert_eq!(keyboard.held(), HeldKeys::new());
    }
}
