//! The player-controlled ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The ball dodging the walls. Only moves horizontally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Horizontal distance covered by a single move
    pub step: f32,
    /// Width of the play field the ball is clamped to
    field_width: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, step: f32, field_width: f32) -> Self {
        let mut ball = Self {
            pos,
            radius,
            step,
            field_width,
        };
        ball.pos.x = ball.clamp_x(pos.x);
        ball
    }

    /// Smallest x the ball centre may reach
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.radius
    }

    /// Largest x the ball centre may reach
    #[inline]
    pub fn max_x(&self) -> f32 {
        (self.field_width - self.radius).max(self.radius)
    }

    fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.min_x(), self.max_x())
    }

    pub fn move_left(&mut self) {
        self.pos.x = self.clamp_x(self.pos.x - self.step);
    }

    pub fn move_right(&mut self) {
        self.pos.x = self.clamp_x(self.pos.x + self.step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn centered() -> Ball {
        Ball::new(Vec2::new(240.0, 60.0), 10.0, 5.0, 480.0)
    }

    #[test]
    fn test_moves_by_step() {
        let mut ball = centered();
        ball.move_right();
        assert_eq!(ball.pos.x, 245.0);
        ball.move_left();
        ball.move_left();
        assert_eq!(ball.pos.x, 235.0);
        assert_eq!(ball.pos.y, 60.0);
    }

    #[test]
    fn test_clamps_at_edges() {
        let mut ball = Ball::new(Vec2::new(12.0, 60.0), 10.0, 5.0, 480.0);
        ball.move_left();
        assert_eq!(ball.pos.x, 10.0);
        ball.move_left();
        assert_eq!(ball.pos.x, 10.0);

        let mut ball = Ball::new(Vec2::new(468.0, 60.0), 10.0, 5.0, 480.0);
        ball.move_right();
        assert_eq!(ball.pos.x, 470.0);
        ball.move_right();
        assert_eq!(ball.pos.x, 470.0);
    }

    #[test]
    fn test_spawn_outside_field_is_pulled_in() {
        let ball = Ball::new(Vec2::new(-50.0, 60.0), 10.0, 5.0, 480.0);
        assert_eq!(ball.pos.x, 10.0);
    }

    proptest! {
        #[test]
        fn prop_stays_inside_field(moves in proptest::collection::vec(any::<bool>(), 0..400)) {
            let mut ball = centered();
            for right in moves {
                if right {
                    ball.move_right();
                } else {
                    ball.move_left();
                }
                prop_assert!(ball.pos.x >= ball.radius);
                prop_assert!(ball.pos.x <= 480.0 - ball.radius);
            }
        }
    }
}
