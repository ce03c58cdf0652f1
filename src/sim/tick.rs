//! Fixed step simulation tick
//!
//! One call advances the game by exactly one display frame.

use super::state::GameState;

/// Advance the game by one frame: left paddle, right paddle, then the ball.
/// The ball sees both paddles at their post-move positions.
pub fn tick(state: &mut GameState) {
    let arena = state.arena;

    state.left.update(&arena);
    state.right.update(&arena);
    state.ball.update(&arena, &state.left, &state.right);

    state.frame += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::apply_key;
    use glam::Vec2;

    #[test]
    fn test_tick_advances_frame() {
        let mut state = GameState::new(12345);
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn test_ball_moves_freely_from_centre() {
        let mut state = GameState::new(12345);
        let start = state.ball.pos;
        let dir = state.ball.dir;
        tick(&mut state);
        assert_eq!(state.ball.dir, dir);
        assert!((state.ball.pos - (start + dir * 7.0)).length() < 1e-4);
    }

    #[test]
    fn test_paddles_follow_keys() {
        let mut state = GameState::new(12345);
        apply_key(&mut state, "KeyW");
        apply_key(&mut state, "KeyK");
        tick(&mut state);
        assert_eq!(state.left.pos.y, 260.0);
        assert_eq!(state.right.pos.y, 270.0);
    }

    #[test]
    fn test_ball_sees_moved_paddle() {
        let mut state = GameState::new(12345);
        // Ball just above the left paddle's top end, heading left
        state.ball.pos = Vec2::new(107.0, 258.0);
        state.ball.dir = Vec2::new(-1.0, 0.0);
        state.left.steer(-1.0);
        tick(&mut state);
        // The paddle rose to 260 first, so the ball's bottom edge (262) meets it
        assert_eq!(state.ball.dir, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let keys = ["KeyW", "KeyI", "Space", "KeyS", "KeyK"];
        for frame in 0..500 {
            if frame % 100 == 0 {
                let key = keys[(frame / 100) % keys.len()];
                apply_key(&mut state1, key);
                apply_key(&mut state2, key);
            }
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.left, state2.left);
        assert_eq!(state1.right, state2.right);
    }

    #[test]
    fn test_long_run_stays_in_play() {
        let mut state = GameState::new(2024);
        for _ in 0..10_000 {
            tick(&mut state);
            let ball = &state.ball;
            assert!(ball.pos.x > -ball.speed - ball.size.x);
            assert!(ball.pos.x < state.arena.width + ball.speed + ball.size.x);
            assert!((ball.dir.length() - 1.0).abs() < 1e-5);
        }
    }
}
