//! Canvas-2D rendering
//!
//! Draws the arena, net, scores, paddles, and ball from an immutable
//! `GameState` borrow. Render-only: nothing here feeds back into the
//! simulation, and a failed draw call is ignored.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::GameState;

const BACKGROUND_COLOR: &str = "#313131";
const FOREGROUND_COLOR: &str = "white";
const SCORE_COLOR: &str = "darkgray";
const SCORE_FONT: &str = "100px Arial";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one full frame
    pub fn render(&self, state: &GameState) {
        // Clear
        self.fill_rect(0.0, 0.0, self.width, self.height, BACKGROUND_COLOR);

        self.draw_net(FOREGROUND_COLOR);
        self.draw_scores(state);

        for paddle in [&state.player, &state.opponent] {
            self.fill_rect(
                paddle.pos.x as f64,
                paddle.pos.y as f64,
                paddle.width as f64,
                paddle.height as f64,
                FOREGROUND_COLOR,
            );
        }

        let ball = &state.ball;
        let center = ball.center();
        self.fill_circle(
            center.x as f64,
            center.y as f64,
            ball.width as f64 / 2.0,
            FOREGROUND_COLOR,
        );
    }

    fn draw_net(&self, color: &str) {
        let mut x = 60.0;
        while x < self.width - 60.0 {
            self.fill_rect(x, self.height / 2.0, 10.0, 5.0, color);
            x += 30.0;
        }
    }

    fn draw_scores(&self, state: &GameState) {
        self.ctx.set_fill_style_str(SCORE_COLOR);
        self.ctx.set_font(SCORE_FONT);
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(
            &state.player.score.to_string(),
            self.width / 2.0,
            self.height / 4.0 * 3.0 + 50.0,
        );
        let _ = self.ctx.fill_text(
            &state.opponent.score.to_string(),
            self.width / 2.0,
            self.height / 4.0 + 50.0,
        );
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx.close_path();
        self.ctx.fill();
    }
}
