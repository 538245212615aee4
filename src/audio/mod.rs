//! Audio cues
//!
//! Which cue belongs to which simulation event is decided here; the Web Audio
//! synthesis lives in `web` and only exists on wasm32.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hit a wall
    LifeLost,
    /// Last life gone
    GameOver,
    /// Final score made the leaderboard
    HighScore,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::LifeLost { .. } => Some(SoundEffect::LifeLost),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::ScoreIncreased { .. } => None,
        }
    }
}
