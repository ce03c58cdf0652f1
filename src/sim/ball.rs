//! The ball
//!
//! The ball travels along a unit heading chosen once at construction. Bounces
//! only ever negate one component of that heading, so its length never
//! changes. Leaving the court past a side wall does not end the rally: the
//! ball is mirrored vertically and sent back the other way.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Collider;
use super::paddle::Paddle;
use super::state::Arena;
use crate::consts::BALL_MAX_LAUNCH_ANGLE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre
    pub pos: Vec2,
    /// Unit heading
    pub dir: Vec2,
    /// Half-extent; `size.x` is also the drawn radius
    pub size: Vec2,
    /// Pixels per frame
    pub speed: f32,
    /// Box used by the most recent collision check
    #[serde(skip)]
    pub collider: Option<Collider>,
}

impl Ball {
    /// Create a ball and give it a random launch heading
    pub fn new<R: Rng + ?Sized>(pos: Vec2, size: Vec2, speed: f32, rng: &mut R) -> Self {
        let mut ball = Self {
            pos,
            dir: Vec2::ZERO,
            size,
            speed,
            collider: None,
        };
        ball.set_initial_dir(rng);
        ball
    }

    /// Pick a heading within ±45° of horizontal, towards either side
    pub fn set_initial_dir<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let angle = rng.random_range(-BALL_MAX_LAUNCH_ANGLE..BALL_MAX_LAUNCH_ANGLE);
        let heading = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.dir = Vec2::new(angle.cos() * heading, angle.sin());
        log::debug!("Ball launched at {:.1}° heading {}", angle.to_degrees(), heading);
    }

    /// Resolve collisions at the current position, then move
    pub fn update(&mut self, arena: &Arena, left: &Paddle, right: &Paddle) {
        self.detect_collisions(arena, left, right);
        self.pos += self.dir * self.speed;
    }

    /// Rebuild the collider, then run wall and paddle checks in that order.
    /// Both checks see the box built here, even if the wall check moved the ball.
    pub fn detect_collisions(&mut self, arena: &Arena, left: &Paddle, right: &Paddle) {
        let collider = Collider::around(self.pos, self.size);
        self.collider = Some(collider);
        self.detect_walls(&collider, arena);
        self.detect_players(&collider, left, right);
    }

    /// Side walls reposition the ball; top and bottom walls bounce it
    pub fn detect_walls(&mut self, collider: &Collider, arena: &Arena) {
        let hits = collider.wall_hits(arena);
        if !hits.any() {
            return;
        }

        if hits.side() {
            self.pos.y = arena.height - self.pos.y;
            self.dir.x = -self.dir.x;
            log::debug!(
                "Ball out on {} side, re-entering at y={}",
                if hits.left { "left" } else { "right" },
                self.pos.y
            );
        }
        if hits.vertical() {
            self.dir.y = -self.dir.y;
        }
    }

    /// Reverse horizontal travel when the leading edge meets a paddle face.
    /// Only the paddle the ball is travelling towards counts.
    pub fn detect_players(&mut self, collider: &Collider, left: &Paddle, right: &Paddle) {
        let hit_right = self.dir.x > 0.0 && collider.hits_right_paddle(right);
        let hit_left = self.dir.x < 0.0 && collider.hits_left_paddle(left);

        if hit_right || hit_left {
            self.dir.x = -self.dir.x;
        }
    }
}
