//! Axis-aligned collision tests for the ball
//!
//! The ball is treated as a box of half-extent `size` around its centre.
//! Every test here is inclusive: touching an edge counts as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use super::state::Arena;

/// Bounding box derived from a position and half-extent, valid for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Collider {
    /// Box spanning `pos ± size`
    pub fn around(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x - size.x,
            right: pos.x + size.x,
            top: pos.y - size.y,
            bottom: pos.y + size.y,
        }
    }

    /// Test all four arena edges
    pub fn wall_hits(&self, arena: &Arena) -> WallHits {
        WallHits {
            left: self.left <= 0.0,
            right: self.right >= arena.width,
            top: self.top <= 0.0,
            bottom: self.bottom >= arena.height,
        }
    }

    /// Whether `edge_x` lies inside the paddle's horizontal span while the
    /// box overlaps the paddle vertically
    pub fn meets_paddle(&self, edge_x: f32, paddle: &Paddle) -> bool {
        edge_x >= paddle.pos.x
            && edge_x <= paddle.pos.x + paddle.size.x
            && self.top <= paddle.pos.y + paddle.size.y
            && self.bottom >= paddle.pos.y
    }

    /// Leading edge facing the right paddle
    pub fn hits_right_paddle(&self, paddle: &Paddle) -> bool {
        self.meets_paddle(self.right, paddle)
    }

    /// Leading edge facing the left paddle
    pub fn hits_left_paddle(&self, paddle: &Paddle) -> bool {
        self.meets_paddle(self.left, paddle)
    }
}

/// Result of testing a collider against the arena edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    /// Left or right wall: the ball left the court on a side
    pub fn side(&self) -> bool {
        self.left || self.right
    }

    /// Top or bottom wall: a plain vertical bounce
    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }

    /// Any of the four walls
    pub fn any(&self) -> bool {
        self.side() || self.vertical()
    }
}
