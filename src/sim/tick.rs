//! Per-frame simulation tick
//!
//! One call advances the session by exactly one tick, in this order:
//! clear, draw ball, advance and draw walls, spawn on cadence, draw metrics,
//! collisions, then held controls. Everything is tick-counted so a seed and an
//! input sequence always replay the same run.

use rand::Rng;

use super::game::Game;
use super::state::{GameConfig, GameEvent, GameState, TickInput};
use super::surface::{DrawSurface, NullSurface};
use super::wall::Wall;

/// What a tick did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continued,
    /// The last life was lost and `state` now holds a fresh session
    SessionReset,
}

/// Advance `state` by one tick.
///
/// Events are appended to `events`. On game over the session is replaced
/// before controls would apply, so held signals do not move the new ball.
pub fn tick<R, S>(
    state: &mut GameState,
    config: &GameConfig,
    input: &TickInput,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
    surface: &mut S,
) -> TickOutcome
where
    R: Rng + ?Sized,
    S: DrawSurface + ?Sized,
{
    surface.clear(config.field_width, config.field_height);
    surface.draw_ball(&state.ball);

    advance_walls(state);
    for wall in &state.walls {
        surface.draw_wall(wall);
    }

    spawn_on_cadence(state, config, rng, events);
    surface.draw_metrics(&state.metrics);

    let outcome = detect_collisions(state, config, events);
    if outcome == TickOutcome::Continued {
        apply_input(state, input);
    }
    outcome
}

impl Game {
    /// Advance one tick without drawing
    pub fn tick(&mut self) {
        self.tick_with(&mut NullSurface);
    }

    /// Advance one tick, drawing onto `surface` along the way
    pub fn tick_with<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.paused {
            return;
        }
        self.time_ticks += 1;

        let outcome = tick(
            &mut self.state,
            &self.config,
            &self.input,
            &mut self.rng,
            &mut self.events,
            surface,
        );
        if outcome == TickOutcome::SessionReset {
            self.clear_controls();
        }
    }
}

/// Move every wall up and drop the ones that left the field.
///
/// Removal happens after the whole pass, so several walls leaving on the
/// same tick are all dropped and spawn order is kept.
fn advance_walls(state: &mut GameState) {
    let before = state.walls.len();
    state.walls.retain_mut(|wall| wall.advance());
    let removed = before - state.walls.len();
    if removed > 0 {
        log::debug!("Despawned {} wall(s), {} active", removed, state.walls.len());
    }
}

fn spawn_on_cadence<R: Rng + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    state.frame_counter += 1;
    if state.frame_counter < config.spawn_interval_ticks {
        return;
    }
    state.frame_counter = 0;

    spawn_wall(state, config, rng, 0.0);
    state.metrics.increment_score();
    events.push(GameEvent::ScoreIncreased {
        score: state.metrics.score,
    });
}

fn spawn_wall<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R, offset_y: f32) {
    let id = state.next_wall_id();
    let wall = Wall::spawn(id, rng, config, offset_y);
    log::debug!(
        "Spawned wall {} ({:?}, width {:.1}), {} this session",
        id,
        wall.anchor(),
        wall.width,
        state.spawned + 1
    );
    state.walls.push(wall);
    state.spawned += 1;
}

/// Test the ball against the walls unless the grace window is still open.
///
/// The grace counter counts down first; collisions are tested again on the
/// tick it reaches zero.
fn detect_collisions(
    state: &mut GameState,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> TickOutcome {
    if state.grace_ticks > 0 {
        state.grace_ticks -= 1;
        if state.grace_ticks > 0 {
            return TickOutcome::Continued;
        }
    }

    let ball = state.ball.pos;
    let Some(hit) = state.walls.iter().find(|w| w.test_collision(ball)) else {
        return TickOutcome::Continued;
    };
    log::debug!("Ball hit wall {} at ({:.1}, {:.1})", hit.id, ball.x, ball.y);

    let outcome = if state.metrics.lose_life() {
        events.push(GameEvent::LifeLost {
            remaining: state.metrics.lives,
        });
        TickOutcome::Continued
    } else {
        let final_score = state.metrics.score;
        log::info!("Game over, final score {}", final_score);
        events.push(GameEvent::GameOver { final_score });
        *state = GameState::new(config);
        TickOutcome::SessionReset
    };
    state.grace_ticks = config.grace_ticks;
    outcome
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    if input.move_right {
        state.ball.move_right();
    }
    if input.move_left {
        state.ball.move_left();
    }
}
