//! Cloud Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use cloud_hopper::HighScore;
    use cloud_hopper::consts::*;
    use cloud_hopper::renderer::{RenderState, shapes};
    use cloud_hopper::sim::{
        CloudSpawner, GameState, PipeSpawner, Playfield, drift_clouds, flap, step,
    };

    /// Game instance holding all state
    struct Game {
        state: GameState,
        best: HighScore,
        render_state: Option<RenderState>,
        pipe_spawner: PipeSpawner,
        cloud_spawner: CloudSpawner,
    }

    impl Game {
        fn new(playfield: Playfield, seed: u64) -> Self {
            let best = HighScore::load();
            Self {
                state: GameState::new(playfield, best.value()),
                best,
                render_state: None,
                pipe_spawner: PipeSpawner::new(seed),
                // Decorrelate the two spawn streams
                cloud_spawner: CloudSpawner::new(seed ^ 0x9e37_79b9_7f4a_7c15),
            }
        }

        /// One display frame: physics tick, cloud drift, draw, HUD
        fn frame(&mut self) {
            step(&mut self.state, &mut self.best);
            drift_clouds(&mut self.state);
            self.render();
            self.update_hud();
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }

            if let Some(el) = document.get_element_by_id("highScore") {
                el.set_text_content(Some(&format!("High Score: {}", self.state.high_score)));
            }

            if let Some(el) = document.get_element_by_id("message") {
                el.set_text_content(Some(self.state.message.unwrap_or("")));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cloud Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the backing store to the viewport
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // The simulation works in CSS pixels; the renderer maps to NDC
        let playfield = Playfield {
            width: client_w as f32,
            height: client_h as f32,
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(playfield, seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, playfield).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_spawn_timers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Cloud Hopper running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click - flap (also starts/restarts)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                flap(&mut game.borrow_mut().state);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                flap(&mut game.borrow_mut().state);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Space flaps like a click
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" {
                    flap(&mut game.borrow_mut().state);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// The two generators run on independent wall-clock timers; each tick
    /// hands a fresh entity to the core
    fn setup_spawn_timers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                let playfield = g.state.playfield;
                let pipe = g.pipe_spawner.spawn(&playfield);
                g.state.push_pipe(pipe);
            });
            let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                PIPE_INTERVAL_MS,
            );
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                let playfield = g.state.playfield;
                let cloud = g.cloud_spawner.spawn(&playfield);
                g.state.push_cloud(cloud);
            });
            let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                CLOUD_INTERVAL_MS,
            );
            closure.forget();
        }
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
        // One simulation tick per display refresh; gameplay speed follows
        // the host frame rate
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cloud Hopper (native) starting...");
    log::info!("Native mode requires winit integration - run with `trunk serve` for web version");

    // Run smoke test
    println!("\nRunning simulation smoke test...");
    smoke_sim();
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_sim() {
    use cloud_hopper::HighScore;
    use cloud_hopper::sim::{GamePhase, GameState, Playfield, flap, step};

    let playfield = Playfield {
        width: 800.0,
        height: 600.0,
    };
    let mut best = HighScore::load();
    let mut state = GameState::new(playfield, best.value());

    flap(&mut state);
    for _ in 0..300 {
        step(&mut state, &mut best);
    }

    assert_eq!(
        state.phase,
        GamePhase::GameOver,
        "an unattended bird should fall out of the sky"
    );
    println!("✓ Simulation smoke test passed!");
}
