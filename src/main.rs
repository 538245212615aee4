//! Flappy Tongue entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{RefCell, RefMut};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use flappy_tongue::audio::{AudioManager, SoundEffect};
    use flappy_tongue::controls::{self, ClassifierBridge};
    use flappy_tongue::renderer::{self, CanvasRenderer};
    use flappy_tongue::sim::{Game, GameEvent, autopilot};
    use flappy_tongue::{HighScores, Settings};

    thread_local! {
        /// Shared with the JS-facing exports below
        static HOST: RefCell<Option<Rc<RefCell<Host>>>> = const { RefCell::new(None) };
    }

    /// Everything the browser loop owns
    struct Host {
        game: Game,
        renderer: Option<CanvasRenderer>,
        audio: AudioManager,
        settings: Settings,
        high_scores: HighScores,
        bridge: ClassifierBridge,
    }

    impl Host {
        fn new(settings: Settings, renderer: Option<CanvasRenderer>) -> Self {
            let seed = js_sys::Date::now() as u64;
            Self {
                game: Game::new(settings.game_config(), seed),
                renderer,
                audio: AudioManager::new(settings.effective_volume()),
                bridge: ClassifierBridge::new(settings.confidence_threshold),
                high_scores: HighScores::load(),
                settings,
            }
        }

        /// Run one simulation tick and draw it.
        ///
        /// Returns a game-over notice for the caller to show once the host is
        /// no longer borrowed.
        fn frame(&mut self) -> Option<String> {
            if self.settings.autopilot {
                let input = autopilot(self.game.state(), self.game.config());
                self.game.set_input(input);
            }

            match self.renderer.as_mut() {
                Some(renderer) => self.game.tick_with(renderer),
                None => self.game.tick(),
            }

            let mut notice = None;
            for event in self.game.drain_events() {
                if let Some(message) = self.handle_event(event) {
                    notice = Some(message);
                }
            }
            notice
        }

        fn handle_event(&mut self, event: GameEvent) -> Option<String> {
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }

            let GameEvent::GameOver { final_score } = event else {
                return None;
            };
            let rank = self
                .high_scores
                .add_score(final_score, js_sys::Date::now());
            if let Some(rank) = rank {
                log::info!("New high score #{}: {}", rank, final_score);
                self.high_scores.save();
                self.audio.play(SoundEffect::HighScore);
            }
            Some(renderer::game_over_message(
                final_score,
                rank,
                self.high_scores.top_score(),
            ))
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.set_volume(self.settings.effective_volume());
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }

        fn toggle_autopilot(&mut self) {
            self.settings.autopilot = !self.settings.autopilot;
            if !self.settings.autopilot {
                self.game.set_input(Default::default());
            }
            self.settings.save();
            log::info!("Autopilot: {}", self.settings.autopilot);
        }
    }

    /// Blocks until dismissed; must be called with the host released
    fn notify_game_over(message: &str) {
        let Some(window) = web_sys::window() else { return };
        let _ = window.alert_with_message(message);
    }

    /// Borrow the host for an event handler, skipping the event if the
    /// frame loop currently holds it
    fn try_host(host: &Rc<RefCell<Host>>) -> Option<RefMut<'_, Host>> {
        match host.try_borrow_mut() {
            Ok(h) => Some(h),
            Err(_) => {
                log::debug!("Host busy, event skipped");
                None
            }
        }
    }

    fn with_host(f: impl FnOnce(&mut Host)) {
        HOST.with(|host| {
            if let Some(mut h) = host.borrow().as_ref().and_then(try_host) {
                f(&mut h);
            }
        });
    }

    /// Hold or release "move left" (called by the gesture classifier)
    #[wasm_bindgen]
    pub fn set_move_left(active: bool) {
        with_host(|h| h.game.set_move_left(active));
    }

    /// Hold or release "move right" (called by the gesture classifier)
    #[wasm_bindgen]
    pub fn set_move_right(active: bool) {
        with_host(|h| h.game.set_move_right(active));
    }

    /// Feed raw per-class confidences (0 = right, 1 = left)
    #[wasm_bindgen]
    pub fn apply_confidences(confidences: Vec<f32>) {
        with_host(|h| {
            let bridge = h.bridge;
            bridge.apply(&mut h.game, &confidences);
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Flappy Tongue starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, cannot start");
            return;
        };

        let canvas: Option<HtmlCanvasElement> = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into().ok());
        let Some(canvas) = canvas else {
            log::error!("Failed to create canvas");
            return;
        };
        let settings = Settings::load();
        let config = settings.game_config();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);
        let _ = canvas.set_attribute("class", "game");
        if let Some(body) = document.body() {
            let _ = body.append_child(&canvas);
        }

        let renderer = CanvasRenderer::new(&canvas);
        if renderer.is_none() {
            log::warn!("2D context unavailable - running without drawing");
        }

        let host = Rc::new(RefCell::new(Host::new(settings, renderer)));
        HOST.with(|h| *h.borrow_mut() = Some(host.clone()));
        log::info!("Game initialized with seed: {}", host.borrow().game.seed());

        setup_input_handlers(host.clone());
        setup_auto_pause(host.clone());

        request_animation_frame(host);

        log::info!("Flappy Tongue running!");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else { return };

        // Arrow keys hold a direction while pressed
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(mut h) = try_host(&host) else { return };
                let key = event.key();
                if let Some(direction) = controls::key_direction(&key) {
                    controls::apply(&mut h.game, direction, true);
                    return;
                }
                match key.as_str() {
                    "Escape" => {
                        h.game.toggle_pause();
                    }
                    "i" | "I" => h.toggle_autopilot(),
                    "m" | "M" => h.toggle_mute(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = controls::key_direction(&event.key()) {
                    if let Some(mut h) = try_host(&host) {
                        controls::apply(&mut h.game, direction, false);
                    }
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        // Visibility change (tab switch, minimize)
        {
            let host = host.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let Some(mut h) = try_host(&host) else { return };
                    if h.settings.pause_on_blur && !h.game.is_paused() {
                        h.game.set_paused(true);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let Some(mut h) = try_host(&host) else { return };
                if h.settings.pause_on_blur && !h.game.is_paused() {
                    h.game.set_paused(true);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        // The borrow ends with this statement, before the alert can block
        let notice = host.borrow_mut().frame();
        if let Some(message) = notice {
            notify_game_over(&message);
        }
        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_tongue::sim::{Game, GameEvent, autopilot};

    /// One minute of play at 60 Hz
    const DEMO_TICKS: u32 = 60 * 60;
    const DEMO_SEED: u64 = 2024;

    env_logger::init();
    log::info!("Flappy Tongue (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let settings = flappy_tongue::Settings::load();
    let mut game = Game::new(settings.game_config(), DEMO_SEED);
    let mut lives_lost = 0u32;
    let mut game_overs = 0u32;

    for _ in 0..DEMO_TICKS {
        let input = autopilot(game.state(), game.config());
        game.set_input(input);
        game.tick();
        for event in game.drain_events() {
            match event {
                GameEvent::LifeLost { .. } => lives_lost += 1,
                GameEvent::GameOver { final_score } => {
                    game_overs += 1;
                    log::info!("Game over with score {}", final_score);
                }
                GameEvent::ScoreIncreased { .. } => {}
            }
        }
    }

    println!(
        "{} ticks: score {}, lives {}, lives lost {}, game overs {}",
        game.time_ticks(),
        game.score(),
        game.lives(),
        lives_lost,
        game_overs
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
