//! Keyboard input types
//!
//! Discrete key-down events drive the replay menu; held keys sampled once per
//! frame drive the player's paddle.

/// A key-down event the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit3,
    Digit5,
    Digit7,
    Escape,
    Up,
    Down,
}

impl Key {
    /// Winning score selected by a replay menu key
    pub fn winning_score(self) -> Option<u8> {
        match self {
            Key::Digit3 => Some(3),
            Key::Digit5 => Some(5),
            Key::Digit7 => Some(7),
            _ => None,
        }
    }
}

/// Snapshot of the movement keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paddle direction: -1 = up, 0 = stop, 1 = down
    pub fn dir(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
