//! Player paddles
//!
//! A paddle only ever moves vertically. Its direction is a sign selector
//! (-1 up, 0 idle, +1 down) written by keyboard input and cleared when the
//! paddle reaches a wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Arena;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Only `y` is used
    pub dir: Vec2,
    /// Full width and height
    pub size: Vec2,
    /// Pixels per frame
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            dir: Vec2::ZERO,
            size,
            speed,
        }
    }

    /// Paddle centred vertically, `inset` pixels from the left wall
    pub fn left(arena: &Arena, size: Vec2, speed: f32, inset: f32) -> Self {
        Self::new(Vec2::new(inset, arena.height / 2.0 - size.y / 2.0), size, speed)
    }

    /// Paddle centred vertically, `inset` pixels from the right wall
    pub fn right(arena: &Arena, size: Vec2, speed: f32, inset: f32) -> Self {
        Self::new(
            Vec2::new(arena.width - size.x - inset, arena.height / 2.0 - size.y / 2.0),
            size,
            speed,
        )
    }

    /// Advance one frame, or halt if the wall ahead has been reached
    pub fn update(&mut self, arena: &Arena) {
        if self.detect_walls(arena) {
            log::debug!("Paddle at x={} halted at y={}", self.pos.x, self.pos.y);
            self.dir.y = 0.0;
        } else {
            self.pos.y += self.dir.y * self.speed;
        }
    }

    /// Whether the wall in the current travel direction has been reached.
    /// An idle paddle never touches a wall.
    pub fn detect_walls(&self, arena: &Arena) -> bool {
        if self.dir.y > 0.0 {
            self.pos.y + self.size.y >= arena.height
        } else if self.dir.y < 0.0 {
            self.pos.y <= 0.0
        } else {
            false
        }
    }

    /// Set the vertical direction sign
    pub fn steer(&mut self, dir_y: f32) {
        self.dir.y = dir_y;
    }
}
