//! Scene drawing and the per-frame loop body

use super::Surface;
use crate::consts::DIVIDER_WIDTH;
use crate::sim::{Ball, GameState, Paddle, tick};

/// Paint the whole scene at the current positions
pub fn draw_scene<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear();
    divider(surface);
    paddle(&state.left, surface);
    paddle(&state.right, surface);
    ball(&state.ball, surface);
}

/// One display frame: draw every entity where it stands, then step the
/// simulation. What is on screen always lags the state by one frame.
pub fn frame<S: Surface + ?Sized>(state: &mut GameState, surface: &mut S) {
    draw_scene(state, surface);
    tick(state);
}

/// Thin vertical line down the middle of the surface
fn divider<S: Surface + ?Sized>(surface: &mut S) {
    let x = surface.width() / 2.0 - DIVIDER_WIDTH / 2.0;
    let h = surface.height();
    surface.fill_rect(x, 0.0, DIVIDER_WIDTH, h);
}

fn paddle<S: Surface + ?Sized>(paddle: &Paddle, surface: &mut S) {
    surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y);
}

fn ball<S: Surface + ?Sized>(ball: &Ball, surface: &mut S) {
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.size.x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    #[test]
    fn test_draw_order() {
        let state = GameState::new(8);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        draw_scene(&state, &mut surface);

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::ClearRect { x: 0.0, y: 0.0, w: 800.0, h: 600.0 },
                DrawCommand::FillRect { x: 399.5, y: 0.0, w: 1.0, h: 600.0 },
                DrawCommand::FillRect { x: 100.0, y: 265.0, w: 7.0, h: 70.0 },
                DrawCommand::FillRect { x: 693.0, y: 265.0, w: 7.0, h: 70.0 },
                DrawCommand::FillCircle { x: 400.0, y: 300.0, radius: 4.0 },
            ]
        );
    }

    #[test]
    fn test_frame_draws_before_stepping() {
        let mut state = GameState::new(8);
        let start = state.ball.pos;
        let mut surface = RecordingSurface::new(800.0, 600.0);

        frame(&mut state, &mut surface);

        assert_eq!(state.frame, 1);
        assert_ne!(state.ball.pos, start);
        assert_eq!(
            surface.commands().last(),
            Some(&DrawCommand::FillCircle { x: start.x, y: start.y, radius: 4.0 })
        );
    }

    #[test]
    fn test_each_frame_starts_with_clear() {
        let mut state = GameState::new(8);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        for _ in 0..3 {
            surface.reset();
            frame(&mut state, &mut surface);
            assert!(matches!(surface.commands().first(), Some(DrawCommand::ClearRect { .. })));
            assert_eq!(surface.commands().len(), 5);
        }
    }
}
