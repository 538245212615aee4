//! Scrolling walls
//!
//! A wall is a horizontal bar touching exactly one side of the field, leaving
//! a gap on the other side for the ball to slip through.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::GameConfig;

/// Which edge of the field a wall is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Left,
    Right,
}

/// A wall entity (axis-aligned rectangle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Upward speed in units per tick
    pub speed: f32,
}

impl Wall {
    /// Spawn a wall `offset_y` below the bottom edge of the field.
    ///
    /// One uniform draw sizes the wall and picks its side, so wide walls
    /// always hang from the left and narrow ones from the right.
    pub fn spawn<R: Rng + ?Sized>(id: u32, rng: &mut R, config: &GameConfig, offset_y: f32) -> Self {
        let draw: f32 = rng.random();
        Self::from_draw(id, draw, config, offset_y)
    }

    /// Build a wall from an already drawn sample in `[0, 1)`
    pub fn from_draw(id: u32, draw: f32, config: &GameConfig, offset_y: f32) -> Self {
        let field_width = config.field_width;
        let draw = draw.clamp(0.0, 1.0);
        let third = field_width / 3.0;
        // Keep the width strictly below two thirds even for a draw of 1.0
        let width = (draw * third + third).min(2.0 * third - f32::EPSILON * field_width);
        let x = match anchor_for_draw(draw) {
            Anchor::Left => 0.0,
            Anchor::Right => field_width - width,
        };
        Self {
            id,
            x,
            y: config.field_height + offset_y,
            width,
            height: config.wall_height,
            speed: config.wall_speed,
        }
    }

    pub fn anchor(&self) -> Anchor {
        if self.x == 0.0 { Anchor::Left } else { Anchor::Right }
    }

    /// Move up one tick. Returns false once the wall has fully left the top of the field.
    pub fn advance(&mut self) -> bool {
        self.y -= self.speed;
        self.y >= -self.height
    }

    /// Point test against the solid bar. Touching the top or bottom edge is not a hit.
    pub fn test_collision(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }

    /// Horizontal span of the open gap as `(start, end)`
    pub fn gap(&self, field_width: f32) -> (f32, f32) {
        match self.anchor() {
            Anchor::Left => (self.width, field_width),
            Anchor::Right => (0.0, self.x),
        }
    }
}

fn anchor_for_draw(draw: f32) -> Anchor {
    if draw > 0.5 { Anchor::Left } else { Anchor::Right }
}
