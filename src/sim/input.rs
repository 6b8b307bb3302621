//! Held-key state for the player
//!
//! The host keeps one `KeyMap` per input source (keyboard, touch) and the
//! simulation merges them each tick into a plain `KeyState`.

use serde::{Deserialize, Serialize};

/// Logical movement actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Jump,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::Jump,
    ];

    /// Map a DOM `KeyboardEvent.key` name to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Action::Left),
            "ArrowRight" => Some(Action::Right),
            "ArrowUp" => Some(Action::Up),
            "ArrowDown" => Some(Action::Down),
            " " => Some(Action::Jump),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Raw key states from one input source.
///
/// `None` means the source never reported the key, which matters when
/// merging: a touch button released (`Some(false)`) still masks the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    keys: [Option<bool>; 5],
}

impl KeyMap {
    pub fn set(&mut self, action: Action, down: bool) {
        self.keys[action.index()] = Some(down);
    }

    pub fn get(&self, action: Action) -> Option<bool> {
        self.keys[action.index()]
    }

    /// Builder-style helper, mostly for tests and scripted hosts
    pub fn with(mut self, action: Action, down: bool) -> Self {
        self.set(action, down);
        self
    }

    /// Merge keyboard and touch; touch is the last writer for every key it has reported
    pub fn merge(keyboard: &KeyMap, touch: &KeyMap) -> KeyState {
        let held = |action: Action| {
            touch
                .get(action)
                .or_else(|| keyboard.get(action))
                .unwrap_or(false)
        };
        KeyState {
            left: held(Action::Left),
            right: held(Action::Right),
            up: held(Action::Up),
            down: held(Action::Down),
            jump: held(Action::Jump),
        }
    }
}

/// Merged per-tick key state consumed by the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_only() {
        let keyboard = KeyMap::default().with(Action::Right, true);
        let keys = KeyMap::merge(&keyboard, &KeyMap::default());
        assert!(keys.right);
        assert!(!keys.left);
    }

    #[test]
    fn test_touch_adds_to_keyboard() {
        let keyboard = KeyMap::default().with(Action::Right, true);
        let touch = KeyMap::default().with(Action::Jump, true);
        let keys = KeyMap::merge(&keyboard, &touch);
        assert!(keys.right);
        assert!(keys.jump);
    }

    #[test]
    fn test_released_touch_masks_keyboard() {
        let keyboard = KeyMap::default().with(Action::Left, true);
        let touch = KeyMap::default().with(Action::Left, false);
        let keys = KeyMap::merge(&keyboard, &touch);
        assert!(!keys.left);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Action::from_key("ArrowLeft"), Some(Action::Left));
        assert_eq!(Action::from_key(" "), Some(Action::Jump));
        assert_eq!(Action::from_key("x"), None);
        assert_eq!(Action::ALL.len(), 5);
    }
}
