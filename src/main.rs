//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use canvas_pong::Settings;
    use canvas_pong::apply_key;
    use canvas_pong::renderer::{CanvasSurface, frame};
    use canvas_pong::sim::GameState;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let settings = Settings::load();
        // Keep a copy in LocalStorage so it can be edited between sessions
        settings.save();

        if let Some(body) = document.body() {
            let _ = body.style().set_property("margin", "0");
        }

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(settings.arena_width as u32);
        canvas.set_height(settings.arena_height as u32);
        canvas
            .style()
            .set_property("background-color", &settings.background_color)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let surface = CanvasSurface::new(canvas, ctx);
        surface.set_fill_color(&settings.foreground_color);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game {
            state: GameState::with_settings(&settings, seed),
            surface,
        }));

        setup_input_handlers(&window, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            apply_key(&mut g.state, &event.code());
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { state, surface } = &mut *g;
            frame(state, surface);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless native run: `canvas-pong [settings.json] [frames]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::Settings;
    use canvas_pong::renderer::{RecordingSurface, frame};
    use canvas_pong::sim::GameState;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let mut args = std::env::args().skip(1);

    let settings = match args.next() {
        Some(path) => load_settings_file(&path),
        None => {
            let settings = Settings::load();
            if !Settings::default_path().exists() {
                settings.save();
            }
            settings
        }
    };
    let frames: u64 = match args.next().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad frame count ({}), using 600", e);
            600
        }
        None => 600,
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut state = GameState::with_settings(&settings, seed);
    let mut surface = RecordingSurface::new(settings.arena_width, settings.arena_height);

    for _ in 0..frames {
        surface.reset();
        frame(&mut state, &mut surface);

        if state.frame.is_multiple_of(60) {
            log::info!(
                "frame {}: ball ({:.1}, {:.1}) dir ({:.3}, {:.3}), paddles y {:.1} / {:.1}",
                state.frame,
                state.ball.pos.x,
                state.ball.pos.y,
                state.ball.dir.x,
                state.ball.dir.y,
                state.left.pos.y,
                state.right.pos.y
            );
        }
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings_file(path: &str) -> canvas_pong::Settings {
    use canvas_pong::Settings;

    match Settings::load_from(std::path::Path::new(path)) {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path);
            settings
        }
        Err(e) => {
            log::warn!("{} ({}), using defaults", e, path);
            Settings::default()
        }
    }
}
