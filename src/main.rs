//! Mutavore entry point
//!
//! In the browser this wires DOM input, the canvas renderer and the
//! Telegram host to the simulation and runs one tick per animation
//! frame. On native targets it runs a short headless session, which is
//! mostly useful for profiling and log inspection.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use glam::Vec2;
    use mutavore::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use mutavore::platform::telegram::TelegramHost;
    use mutavore::platform::{HostPlatform, SessionReport, haptic_for};
    use mutavore::render::CanvasRenderer;
    use mutavore::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        host: TelegramHost,
    }

    impl Game {
        /// One animation frame: tick, forward events, repaint, HUD
        fn frame(&mut self) {
            let input = self.input;
            tick(&mut self.state, &input);
            self.input.clear_one_shots();

            for event in self.state.drain_events() {
                log::debug!("event: {event:?}");
                if let Some(kind) = haptic_for(&event) {
                    self.host.haptic(kind);
                }
            }

            self.renderer.draw(&self.state);
            self.update_hud();
        }

        /// Mirror score and growth into the page header
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("scoreValue") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("sizeValue") {
                el.set_text_content(Some(&format!("{:.1}", self.state.growth)));
            }
        }

        fn report(&self) -> SessionReport {
            let user = self.host.user();
            let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
            SessionReport::new(self.state.score, self.state.growth, &user, timestamp)
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Mutavore starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let host = TelegramHost::init();
        let seed = js_sys::Date::now() as u64;
        log::info!("Session seed: {seed}");

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            renderer: CanvasRenderer::new(ctx),
            input: TickInput::default(),
            host,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_back_button(game.clone());

        request_animation_frame(game);

        log::info!("Mutavore running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Held keys
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.up = true,
                    "ArrowDown" => g.input.down = true,
                    "ArrowLeft" => g.input.left = true,
                    "ArrowRight" => g.input.right = true,
                    "m" => g.input.toggle_menu = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.up = false,
                    "ArrowDown" => g.input.down = false,
                    "ArrowLeft" => g.input.left = false,
                    "ArrowRight" => g.input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Clicks in canvas coordinates, for the mutation menu
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().input.click = Some(Vec2::new(x, y));
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Host back button: confirm, deliver the session report, close
    fn setup_back_button(game: Rc<RefCell<Game>>) {
        let handler = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || {
                let window = web_sys::window().unwrap();
                let confirmed = window
                    .confirm_with_message("Are you sure you want to exit the game?")
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
                let g = game.borrow();
                if let Err(e) = g.host.deliver(&g.report()) {
                    log::warn!("Score delivery failed: {e}");
                }
                g.host.close();
            })
        };
        game.borrow().host.on_back(handler.as_ref().unchecked_ref());
        handler.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mutavore::platform::{HostPlatform, NullHost, haptic_for};
    use mutavore::sim::{GameState, TickInput, menu_buttons, tick};

    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Headless session, seed {seed}");

    let host = NullHost;
    let mut state = GameState::new(seed);
    let mut input = TickInput::default();

    // Ten seconds of frames, circling the board a second per direction
    for i in 0..600u32 {
        let phase = (i / 60) % 4;
        input.up = phase == 0;
        input.right = phase == 1;
        input.down = phase == 2;
        input.left = phase == 3;
        if state.menu_open {
            // Spend the point on the first option and keep moving
            let button = menu_buttons()[0];
            input.click = Some(button.pos + button.size / 2.0);
        }
        tick(&mut state, &input);
        input.clear_one_shots();
        for event in state.drain_events() {
            if let Some(kind) = haptic_for(&event) {
                host.haptic(kind);
            }
        }
    }

    log::info!(
        "After {} ticks: score {}, growth {:.1}, size {:.1}",
        state.tick_count,
        state.score,
        state.growth,
        state.creature.size
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
