//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-counted timers only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod ball;
pub mod game;
pub mod metrics;
pub mod state;
pub mod surface;
pub mod tick;
pub mod wall;

pub use autopilot::autopilot;
pub use ball::Ball;
pub use game::Game;
pub use metrics::Metrics;
pub use state::{GameConfig, GameEvent, GameState, Snapshot, TickInput};
pub use surface::{DrawSurface, NullSurface};
pub use tick::{TickOutcome, tick};
pub use wall::{Anchor, Wall};
