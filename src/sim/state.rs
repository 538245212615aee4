//! Game state and core simulation types
//!
//! A `GameState` is one session: it is built from a `GameConfig` and thrown
//! away wholesale on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::metrics::Metrics;
use super::wall::Wall;
use crate::consts::*;

/// Tunables for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub lives: u32,
    pub field_width: f32,
    pub field_height: f32,
    pub ball_radius: f32,
    /// Ball spawn position; `None` centres it horizontally at `BALL_SPAWN_Y`
    pub ball_spawn: Option<(f32, f32)>,
    pub ball_step: f32,
    pub wall_height: f32,
    /// Upward wall speed in units per tick
    pub wall_speed: f32,
    pub spawn_interval_ticks: u32,
    pub grace_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lives: STARTING_LIVES,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_spawn: None,
            ball_step: BALL_STEP,
            wall_height: WALL_HEIGHT,
            wall_speed: WALL_SPEED,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            grace_ticks: GRACE_TICKS,
        }
    }
}

impl GameConfig {
    /// Repair values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.field_width.is_finite() && self.field_width > 0.0) {
            log::warn!("Invalid field width {}, using default", self.field_width);
            self.field_width = defaults.field_width;
        }
        if !(self.field_height.is_finite() && self.field_height > 0.0) {
            log::warn!("Invalid field height {}, using default", self.field_height);
            self.field_height = defaults.field_height;
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            self.ball_radius = defaults.ball_radius;
        }
        self.ball_radius = self.ball_radius.min(self.field_width / 2.0);
        if !(self.ball_step.is_finite() && self.ball_step > 0.0) {
            self.ball_step = defaults.ball_step;
        }
        if !(self.wall_height.is_finite() && self.wall_height > 0.0) {
            self.wall_height = defaults.wall_height;
        }
        if !(self.wall_speed.is_finite() && self.wall_speed > 0.0) {
            self.wall_speed = defaults.wall_speed;
        }
        if let Some((x, y)) = self.ball_spawn {
            if !(x.is_finite() && y.is_finite()) {
                log::warn!("Invalid ball spawn ({}, {}), centring the ball", x, y);
                self.ball_spawn = None;
            }
        }
        self.lives = self.lives.max(1);
        self.spawn_interval_ticks = self.spawn_interval_ticks.max(1);
        self
    }

    pub fn ball_spawn_pos(&self) -> Vec2 {
        match self.ball_spawn {
            Some((x, y)) => Vec2::new(x, y),
            None => Vec2::new(self.field_width / 2.0, BALL_SPAWN_Y),
        }
    }
}

/// Held control signals for a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Outbound notifications for the host (audio, UI, leaderboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A wall spawned and the score went up
    ScoreIncreased { score: u32 },
    /// The ball hit a wall and the run continues
    LifeLost { remaining: u32 },
    /// The last life was lost; a fresh session follows immediately
    GameOver { final_score: u32 },
}

/// One play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Active walls in spawn order
    pub walls: Vec<Wall>,
    pub metrics: Metrics,
    /// Ticks since the last spawn
    pub frame_counter: u32,
    /// Ticks left before collisions count again
    pub grace_ticks: u32,
    /// Walls spawned this session
    pub spawned: u32,
    /// Next wall ID
    next_id: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ball: Ball::new(
                config.ball_spawn_pos(),
                config.ball_radius,
                config.ball_step,
                config.field_width,
            ),
            walls: Vec::new(),
            metrics: Metrics::new(config.lives),
            frame_counter: 0,
            grace_ticks: 0,
            spawned: 0,
            next_id: 1,
        }
    }

    /// Allocate a new wall ID
    pub fn next_wall_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Read-only copy of what a renderer or UI needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub walls: Vec<Wall>,
    pub score: u32,
    pub lives: u32,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.ball.pos, Vec2::new(240.0, 60.0));
        assert_eq!(state.ball.radius, 10.0);
        assert_eq!(state.metrics, Metrics::new(3));
        assert!(state.walls.is_empty());
        assert_eq!(state.frame_counter, 0);
        assert_eq!(state.grace_ticks, 0);
    }

    #[test]
    fn test_wall_ids_increase() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.next_wall_id(), 1);
        assert_eq!(state.next_wall_id(), 2);
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let config = GameConfig {
            lives: 0,
            field_width: -1.0,
            ball_radius: f32::NAN,
            spawn_interval_ticks: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.lives, 1);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.ball_radius, BALL_RADIUS);
        assert_eq!(config.spawn_interval_ticks, 1);
    }

    #[test]
    fn test_sanitized_drops_non_finite_spawn() {
        for spawn in [(f32::NAN, 60.0), (100.0, f32::INFINITY)] {
            let config = GameConfig {
                ball_spawn: Some(spawn),
                ..Default::default()
            }
            .sanitized();
            assert_eq!(config.ball_spawn, None);
            assert_eq!(config.ball_spawn_pos(), Vec2::new(240.0, BALL_SPAWN_Y));
        }

        // Finite positions are left for the ball to clamp
        let config = GameConfig {
            ball_spawn: Some((1_000.0, 80.0)),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.ball_spawn, Some((1_000.0, 80.0)));
        assert_eq!(GameState::new(&config).ball.pos.x, 470.0);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{"lives": 5}"#).unwrap();
        assert_eq!(config.lives, 5);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.grace_ticks, GRACE_TICKS);
    }
}
