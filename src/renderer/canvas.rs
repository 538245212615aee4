//! `DrawSurface` backed by a `CanvasRenderingContext2d`

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{BALL_COLOR, HUD_COLOR, HUD_FONT, WALL_COLOR, hud_lines};
use crate::sim::{Ball, DrawSurface, Metrics, Wall};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Wrap the 2D context of `canvas`. None if the browser refuses one.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl DrawSurface for CanvasRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_ball(&mut self, ball: &Ball) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            ball.pos.x as f64,
            ball.pos.y as f64,
            ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(BALL_COLOR);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_wall(&mut self, wall: &Wall) {
        self.ctx.set_fill_style_str(WALL_COLOR);
        self.ctx.fill_rect(
            wall.x as f64,
            wall.y as f64,
            wall.width as f64,
            wall.height as f64,
        );
    }

    fn draw_metrics(&mut self, metrics: &Metrics) {
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_fill_style_str(HUD_COLOR);
        for (text, x, y) in hud_lines(metrics) {
            let _ = self.ctx.fill_text(&text, x, y);
        }
    }
}
