//! Drawing surface abstraction
//!
//! The game draws through the `Surface` trait: filled rectangles, filled
//! circles and clears. The browser build backs it with a 2D canvas context,
//! native builds and tests use `RecordingSurface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, RecordingSurface};
pub use scene::{draw_scene, frame};

/// A 2D surface the scene can be painted on, in arena pixel coordinates
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase a rectangle back to the background
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Fill a rectangle with the foreground colour
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Fill a full circle with the foreground colour
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);

    /// Erase the whole surface
    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, w, h);
    }
}
