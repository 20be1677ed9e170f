//! Dodgeball Court entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlInputElement, MouseEvent, TouchEvent};

    use dodgeball_court::Settings;
    use dodgeball_court::consts::*;
    use dodgeball_court::platform;
    use dodgeball_court::renderer::CourtRenderer;
    use dodgeball_court::sim::{self, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CourtRenderer,
        settings: Settings,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dodgeball Court starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window; not starting");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document; not starting");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No canvas element; not starting");
                return;
            }
        };
        canvas.set_width(COURT_WIDTH as u32);
        canvas.set_height(COURT_HEIGHT as u32);

        // The only setup failure mode: without a 2D context the game stays
        // inert - no loop, no spawn timer.
        let Some(renderer) = CourtRenderer::new(&canvas) else {
            log::error!("2D context unavailable; not starting");
            return;
        };

        let settings = Settings::load();
        let seed = platform::startup_seed();
        let mut state = GameState::new(seed);
        state.set_ball_speed(settings.ball_speed);

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            settings,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_speed_control(game.clone());
        setup_spawn_timer(game.clone());

        request_animation_frame(game);

        log::info!("Dodgeball Court running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down - move figure, try to catch, start a drag
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                sim::press(&mut game.borrow_mut().state, point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - re-center the figure
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                sim::pointer_move(&mut game.borrow_mut().state, event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - release the drag (throw if long enough)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                sim::release(&mut game.borrow_mut().state, point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point = touch_point(&canvas_clone, touch.client_x(), touch.client_y());
                    sim::press(&mut game.borrow_mut().state, point);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point = touch_point(&canvas_clone, touch.client_x(), touch.client_y());
                    sim::pointer_move(&mut game.borrow_mut().state, point.x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - the ending touch is in changed_touches
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    let point = touch_point(&canvas_clone, touch.client_x(), touch.client_y());
                    sim::release(&mut game.borrow_mut().state, point);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Convert touch client coordinates to canvas-relative coordinates
    fn touch_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    /// Wire the speed slider: [1, 10] step 0.5, retargets future spawns only
    fn setup_speed_control(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let Some(input) = document
            .get_element_by_id("speed-control")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            log::info!("No speed control found; using configured speed");
            return;
        };

        // Reflect the persisted speed in the control
        input.set_value(&game.borrow().settings.ball_speed.to_string());

        let input_clone = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(raw) = input_clone.value().parse::<f32>() {
                let mut g = game.borrow_mut();
                g.settings.set_ball_speed(raw);
                let speed = g.settings.ball_speed;
                g.state.set_ball_speed(speed);
                g.settings.save();
                log::info!("Ball speed set to {}", speed);
            }
        });
        let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Spawn one opponent ball every 2000 ms, independent of the frame loop
    fn setup_spawn_timer(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            sim::spawn_opponent_ball(&mut game.borrow_mut().state);
        });
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SPAWN_INTERVAL_MS as i32,
        );
        closure.forget();
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
        {
            let mut g = game.borrow_mut();
            sim::tick(&mut g.state);
            g.renderer.render(&g.state);
        }

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
    env_logger::init();
    log::info!("Dodgeball Court (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run a short scripted match without a display and print the outcome
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use dodgeball_court::platform;
    use dodgeball_court::sim::{self, GameState};
    use glam::Vec2;

    let mut state = GameState::new(platform::startup_seed());

    // 30 seconds at 60 fps, spawning on the 2-second wall-clock cadence
    for frame in 0..1800u64 {
        if frame % 120 == 0 {
            sim::spawn_opponent_ball(&mut state);
        }

        // Scripted player: catch anything under the figure, then fling it up
        let player_point = Vec2::new(state.player_x, 520.0);
        sim::press(&mut state, player_point);
        sim::release(&mut state, player_point - Vec2::new(0.0, 60.0));

        sim::tick(&mut state);
    }

    println!(
        "Final score after 30s - you: {}, them: {} ({} balls in flight)",
        state.score.player, state.score.opponent,
        state.balls.len()
    );
}
