//! Game state and arena bounds
//!
//! `GameState` is the single owner of every entity. It is created once,
//! mutated once per frame by `tick` and by keyboard input between frames,
//! and never torn down while the host is running.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use crate::input::Side;
use crate::settings::Settings;

/// Fixed rectangular play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the ball's launch heading was drawn from
    pub seed: u64,
    /// Frames simulated so far
    pub frame: u64,
    pub arena: Arena,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Create a game with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings::default(), seed)
    }

    /// Create a game laid out from `settings`; the ball is launched immediately
    pub fn with_settings(settings: &Settings, seed: u64) -> Self {
        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let paddle_size = Vec2::new(settings.paddle_width, settings.paddle_height);

        let left = Paddle::left(&arena, paddle_size, settings.paddle_speed, settings.paddle_inset);
        let right = Paddle::right(&arena, paddle_size, settings.paddle_speed, settings.paddle_inset);

        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(
            arena.center(),
            Vec2::splat(settings.ball_radius),
            settings.ball_speed,
            &mut rng,
        );

        log::info!(
            "New game: arena {}x{}, seed {}, ball heading ({:.3}, {:.3})",
            arena.width,
            arena.height,
            seed,
            ball.dir.x,
            ball.dir.y
        );

        Self {
            seed,
            frame: 0,
            arena,
            left,
            right,
            ball,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let state = GameState::new(1);
        assert_eq!(state.arena, Arena::new(800.0, 600.0));
        assert_eq!(state.left.pos, Vec2::new(100.0, 265.0));
        assert_eq!(state.right.pos, Vec2::new(693.0, 265.0));
        assert_eq!(state.left.size, Vec2::new(7.0, 70.0));
        assert_eq!(state.left.dir, Vec2::ZERO);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.size, Vec2::splat(4.0));
        assert_eq!(state.ball.speed, 7.0);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_seed_determines_heading() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        assert_eq!(a.ball.dir, b.ball.dir);
    }

    #[test]
    fn test_custom_settings() {
        let settings = Settings {
            arena_width: 400.0,
            arena_height: 300.0,
            paddle_inset: 20.0,
            ..Settings::default()
        };
        let state = GameState::with_settings(&settings, 5);
        assert_eq!(state.ball.pos, Vec2::new(200.0, 150.0));
        assert_eq!(state.left.pos, Vec2::new(20.0, 115.0));
        assert_eq!(state.right.pos, Vec2::new(373.0, 115.0));
    }

    #[test]
    fn test_paddle_by_side() {
        let mut state = GameState::new(3);
        state.paddle_mut(Side::Right).steer(1.0);
        assert_eq!(state.paddle(Side::Right).dir.y, 1.0);
        assert_eq!(state.paddle(Side::Left).dir.y, 0.0);
    }
}
