//! Drawing hooks called from inside a tick
//!
//! The simulation never depends on a concrete renderer. A tick hands
//! read-only references to whatever surface the host passes in.

use super::ball::Ball;
use super::metrics::Metrics;
use super::wall::Wall;

pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn draw_ball(&mut self, ball: &Ball);
    fn draw_wall(&mut self, wall: &Wall);
    fn draw_metrics(&mut self, metrics: &Metrics);
}

/// Surface that draws nothing (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn draw_ball(&mut self, _ball: &Ball) {}
    fn draw_wall(&mut self, _wall: &Wall) {}
    fn draw_metrics(&mut self, _metrics: &Metrics) {}
}
