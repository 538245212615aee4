//! Idle/demo mode - steers the ball through the gaps on its own

use super::state::{GameConfig, GameState, TickInput};
use super::wall::Wall;

/// Pick control signals that move the ball toward the gap of the next wall.
///
/// The next wall is the highest one whose bottom edge has not yet passed the
/// ball centre. With no such wall the ball drifts back to the middle.
pub fn autopilot(state: &GameState, config: &GameConfig) -> TickInput {
    let ball = &state.ball;
    let target_x = next_threat(state)
        .map(|wall| {
            let (start, end) = wall.gap(config.field_width);
            (start + end) / 2.0
        })
        .unwrap_or(config.field_width / 2.0)
        .clamp(ball.min_x(), ball.max_x());

    let dx = target_x - ball.pos.x;
    let deadband = ball.step / 2.0;
    TickInput {
        move_left: dx < -deadband,
        move_right: dx > deadband,
    }
}

fn next_threat(state: &GameState) -> Option<&Wall> {
    let ball_y = state.ball.pos.y;
    state
        .walls
        .iter()
        .filter(|w| w.y + w.height > ball_y)
        .min_by(|a, b| a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Game;

    #[test]
    fn test_heads_for_gap() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        // Left-anchored wall, gap on the right
        state.walls.push(Wall::from_draw(1, 0.75, &config, 0.0));
        let input = autopilot(&state, &config);
        assert!(input.move_right);
        assert!(!input.move_left);

        // A higher right-anchored wall takes priority
        let mut upper = Wall::from_draw(2, 0.25, &config, 0.0);
        upper.y = 200.0;
        state.walls.push(upper);
        let input = autopilot(&state, &config);
        assert!(input.move_left);
        assert!(!input.move_right);
    }

    #[test]
    fn test_ignores_walls_already_passed() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let mut passed = Wall::from_draw(1, 0.75, &config, 0.0);
        passed.y = 30.0;
        state.walls.push(passed);
        // Ball is centred and nothing is ahead: stay put
        assert_eq!(autopilot(&state, &config), TickInput::default());
    }

    #[test]
    fn test_survives_long_run() {
        let mut game = Game::new(GameConfig::default(), 2024);
        for _ in 0..6_000 {
            let input = autopilot(game.state(), game.config());
            game.set_input(input);
            game.tick();
        }
        assert_eq!(game.lives(), 3);
        assert_eq!(game.score(), 50);
    }
}
