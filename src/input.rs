//! Keyboard input handling
//!
//! Keys are press-only: a press sets the paddle's direction and it keeps
//! moving until it reaches a wall or another key overrides it.

use crate::sim::GameState;

/// Which paddle a key controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Map a key identifier to the paddle it steers and the new direction.
///
/// Accepts bare letters (`"W"`) as well as DOM key codes (`"KeyW"`).
/// Unmapped keys return `None`.
pub fn map_key(code: &str) -> Option<(Side, f32)> {
    let key = code.strip_prefix("Key").unwrap_or(code);
    match key {
        "W" => Some((Side::Left, -1.0)),
        "S" => Some((Side::Left, 1.0)),
        "I" => Some((Side::Right, -1.0)),
        "K" => Some((Side::Right, 1.0)),
        _ => None,
    }
}

/// Apply a key press to the game. Returns whether the key was mapped.
pub fn apply_key(state: &mut GameState, code: &str) -> bool {
    match map_key(code) {
        Some((side, dir_y)) => {
            state.paddle_mut(side).steer(dir_y);
            true
        }
        None => {
            log::trace!("Ignoring key {}", code);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_table() {
        assert_eq!(map_key("W"), Some((Side::Left, -1.0)));
        assert_eq!(map_key("S"), Some((Side::Left, 1.0)));
        assert_eq!(map_key("I"), Some((Side::Right, -1.0)));
        assert_eq!(map_key("K"), Some((Side::Right, 1.0)));
    }

    #[test]
    fn test_dom_key_codes() {
        assert_eq!(map_key("KeyW"), Some((Side::Left, -1.0)));
        assert_eq!(map_key("KeyK"), Some((Side::Right, 1.0)));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        for code in ["", "Key", "w", "KeyA", "ArrowUp", "Space", "Enter", "WW"] {
            assert_eq!(map_key(code), None, "{code}");
        }
    }

    #[test]
    fn test_apply_key() {
        let mut state = GameState::new(1);
        assert!(apply_key(&mut state, "KeyS"));
        assert_eq!(state.left.dir.y, 1.0);
        assert!(apply_key(&mut state, "KeyI"));
        assert_eq!(state.right.dir.y, -1.0);

        let before = state.clone();
        assert!(!apply_key(&mut state, "KeyQ"));
        assert_eq!(state.left, before.left);
        assert_eq!(state.right, before.right);
    }
}
