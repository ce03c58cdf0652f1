//! Canvas Pong - a two-player paddle-and-ball game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (paddles, ball, collisions)
//! - `input`: Key identifier to paddle direction mapping
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `settings`: Data-driven arena and entity configuration

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use input::{Side, apply_key, map_key};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 7.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Gap between a side wall and the paddle's outer edge
    pub const PADDLE_INSET: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 4.0;
    pub const BALL_SPEED: f32 = 7.0;
    /// Initial launch angle is drawn from [-MAX, MAX) around the horizontal
    pub const BALL_MAX_LAUNCH_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Centre divider width
    pub const DIVIDER_WIDTH: f32 = 1.0;

    /// Colours (CSS names, handed straight to the canvas)
    pub const BACKGROUND_COLOR: &str = "black";
    pub const FOREGROUND_COLOR: &str = "yellowgreen";
}
