//! Duo Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use duo_pong::consts::*;
    use duo_pong::renderer::CanvasRenderer;
    use duo_pong::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        last_time: f64,
    }

    impl Game {
        fn new(renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(),
                renderer,
                input: TickInput::default(),
                last_time: js_sys::Date::now(),
            }
        }

        /// Run one scheduled tick: measure elapsed wall-clock time, advance
        /// the simulation, then redraw
        fn step(&mut self) {
            let now = js_sys::Date::now();
            let elapsed_ms = (now - self.last_time) as f32;
            self.last_time = now;

            tick(&mut self.state, &self.input, elapsed_ms);
            self.renderer.render(&self.state);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duo Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);
        let _ = canvas.style().set_property("cursor", "none");

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to init renderer");
        let game = Rc::new(RefCell::new(Game::new(renderer)));

        setup_input_handlers(&canvas, game.clone());
        schedule_ticks(game);
    }

    /// Drive the update+render cycle from a fixed-rate interval timer.
    /// Each tick runs to completion before the next fires; the simulation
    /// corrects for scheduling jitter via measured elapsed time.
    fn schedule_ticks(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().step();
        });
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS as i32,
            )
            .expect("Failed to schedule game loop");
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Key presses: held movement flags plus one-shot session controls
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "a" => g.input.player_left = true,
                    "d" => g.input.player_right = true,
                    "ArrowLeft" => g.input.opponent_left = true,
                    "ArrowRight" => g.input.opponent_right = true,
                    "r" => g.state.reset(),
                    "-" => g.state.nudge_speed(-SPEED_NUDGE),
                    "=" => g.state.nudge_speed(SPEED_NUDGE),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key releases clear the held flags
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "a" => g.input.player_left = false,
                    "d" => g.input.player_right = false,
                    "ArrowLeft" => g.input.opponent_left = false,
                    "ArrowRight" => g.input.opponent_right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move centers the player paddle on the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.set_player_x(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use duo_pong::consts::TICK_INTERVAL_MS;
    use duo_pong::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Duo Pong (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    // Headless smoke run: two seconds of simulated play at the nominal rate
    let mut state = GameState::new();
    let input = TickInput::default();
    for _ in 0..120 {
        tick(&mut state, &input, TICK_INTERVAL_MS as f32);
    }
    log::info!(
        "after 120 ticks: ball at ({:.1}, {:.1}), score {} - {}",
        state.ball.pos.x,
        state.ball.pos.y,
        state.player.score,
        state.opponent.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
