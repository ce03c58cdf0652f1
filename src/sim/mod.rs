//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per display frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{Collider, WallHits};
pub use paddle::Paddle;
pub use state::{Arena, GameState};
pub use tick::tick;
