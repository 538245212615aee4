//! Flappy Tongue - a wall dodging game steered by two control signals
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, walls, metrics, tick loop)
//! - `controls`: Keyboard and classifier mappings onto the control signals
//! - `renderer`: 2D canvas drawing of the simulation
//! - `audio`: Sound cues for simulation events (Web Audio on wasm32)
//! - `platform`: Browser/native platform abstraction (storage)
//! - `settings`, `highscores`: Persisted player data

pub mod audio;
pub mod controls;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPAWN_Y: f32 = 60.0;
    /// Horizontal distance covered by one move
    pub const BALL_STEP: f32 = 5.0;

    /// Wall defaults
    pub const WALL_HEIGHT: f32 = 30.0;
    /// Upward speed in units per tick
    pub const WALL_SPEED: f32 = 2.0;

    /// Ticks between wall spawns (~2 seconds at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u32 = 120;
    /// Ticks during which collisions are ignored after a hit
    pub const GRACE_TICKS: u32 = 100;

    pub const STARTING_LIVES: u32 = 3;

    /// A classifier class asserts its signal above this confidence
    pub const CONFIDENCE_THRESHOLD: f32 = 0.8;
}
