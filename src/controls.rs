//! Control sources mapped onto the two movement signals
//!
//! Keyboard arrows and the gesture classifier both end up as plain
//! `set_move_left` / `set_move_right` calls on the game.

use crate::consts::CONFIDENCE_THRESHOLD;
use crate::sim::Game;

/// Movement direction carried by a control signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Classifier class index for this direction (0 = right, 1 = left)
    pub fn class_index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
        }
    }
}

/// Apply a held/released signal to the game
pub fn apply(game: &mut Game, direction: Direction, active: bool) {
    match direction {
        Direction::Left => game.set_move_left(active),
        Direction::Right => game.set_move_right(active),
    }
}

/// Map a `KeyboardEvent::key()` value to a direction
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" | "Left" => Some(Direction::Left),
        "ArrowRight" | "Right" => Some(Direction::Right),
        _ => None,
    }
}

/// Turns per-class classifier confidences into movement signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierBridge {
    /// A class asserts its signal when its confidence is above this
    pub threshold: f32,
}

impl Default for ClassifierBridge {
    fn default() -> Self {
        Self {
            threshold: CONFIDENCE_THRESHOLD,
        }
    }
}

impl ClassifierBridge {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Whether `direction` is asserted. Missing or NaN confidences release it.
    pub fn is_active(&self, confidences: &[f32], direction: Direction) -> bool {
        confidences
            .get(direction.class_index())
            .is_some_and(|&c| c > self.threshold)
    }

    /// Overwrite both signals from one classifier reading
    pub fn apply(&self, game: &mut Game, confidences: &[f32]) {
        for direction in [Direction::Right, Direction::Left] {
            apply(game, direction, self.is_active(confidences, direction));
        }
    }
}
