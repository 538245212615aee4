//! The game controller
//!
//! Owns the current session, the held control signals and the seeded RNG.
//! Hosts feed it signals through the setters, call `tick` once per frame and
//! drain the events it queued.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameConfig, GameEvent, GameState, Snapshot, TickInput};

pub struct Game {
    pub(super) config: GameConfig,
    pub(super) state: GameState,
    pub(super) input: TickInput,
    pub(super) paused: bool,
    pub(super) rng: Pcg32,
    pub(super) events: Vec<GameEvent>,
    /// Ticks simulated since construction, across sessions
    pub(super) time_ticks: u64,
    seed: u64,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.sanitized();
        log::info!(
            "New game: seed={} lives={} field={}x{}",
            seed,
            config.lives,
            config.field_width,
            config.field_height
        );
        Self {
            state: GameState::new(&config),
            config,
            input: TickInput::default(),
            paused: false,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            time_ticks: 0,
            seed,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn score(&self) -> u32 {
        self.state.metrics.score
    }

    pub fn lives(&self) -> u32 {
        self.state.metrics.lives
    }

    pub fn set_move_left(&mut self, active: bool) {
        self.input.move_left = active;
    }

    pub fn set_move_right(&mut self, active: bool) {
        self.input.move_right = active;
    }

    /// Overwrite both signals at once
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    /// Returns the new paused flag
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Throw the session away and start a fresh one.
    ///
    /// Held signals and pause are cleared too. The RNG keeps running so the
    /// next session sees different walls.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.clear_controls();
    }

    /// Drop held signals and pause after the session was replaced
    pub(super) fn clear_controls(&mut self) {
        self.input = TickInput::default();
        self.paused = false;
        log::info!("Session reset (lives={})", self.state.metrics.lives);
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.state.ball.clone(),
            walls: self.state.walls.clone(),
            score: self.state.metrics.score,
            lives: self.state.metrics.lives,
            paused: self.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_overwrite() {
        let mut game = Game::new(GameConfig::default(), 1);
        game.set_move_left(true);
        game.set_move_left(true);
        assert!(game.input().move_left);
        game.set_move_right(true);
        game.set_move_left(false);
        assert_eq!(
            game.input(),
            TickInput {
                move_left: false,
                move_right: true
            }
        );
    }

    #[test]
    fn test_reset_clears_session() {
        let mut game = Game::new(GameConfig::default(), 1);
        game.state.metrics.score = 12;
        game.state.metrics.lives = 1;
        game.state.frame_counter = 50;
        game.state.grace_ticks = 30;
        game.state.ball.move_left();
        game.set_move_right(true);
        game.set_paused(true);

        game.reset();

        assert_eq!(game.score(), 0);
        assert_eq!(game.lives(), 3);
        assert_eq!(game.state().frame_counter, 0);
        assert_eq!(game.state().grace_ticks, 0);
        assert_eq!(game.state().ball.pos.x, 240.0);
        assert_eq!(game.input(), TickInput::default());
        assert!(!game.is_paused());
    }

    #[test]
    fn test_non_finite_spawn_keeps_ball_in_field() {
        let config = GameConfig {
            ball_spawn: Some((f32::NAN, 60.0)),
            ..Default::default()
        };
        let mut game = Game::new(config, 1);
        game.set_move_right(true);
        game.tick();
        let ball = &game.state().ball;
        assert_eq!(ball.pos.x, 245.0);
        assert!(ball.pos.x >= ball.min_x() && ball.pos.x <= ball.max_x());
    }

    #[test]
    fn test_toggle_pause() {
        let mut game = Game::new(GameConfig::default(), 1);
        assert!(game.toggle_pause());
        assert!(!game.toggle_pause());
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = Game::new(GameConfig::default(), 1);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.lives, 3);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
