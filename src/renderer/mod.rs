//! Canvas 2D rendering
//!
//! A pure projection of [`GameState`] onto the drawing context: no state is
//! retained between frames, so repainting an unchanged state is
//! pixel-identical.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{GameState, Owner};

const COURT_COLOR: &str = "#ffffff";
const PLAYER_BALL_COLOR: &str = "#4CAF50";
const OPPONENT_BALL_COLOR: &str = "#F44336";
const CAUGHT_OUTLINE_COLOR: &str = "#FFEB3B";
const PLAYER_FIGURE_COLOR: &str = "#61dafb";
const OPPONENT_FIGURE_COLOR: &str = "#ff7043";

/// Renderer over a canvas 2D context
pub struct CourtRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CourtRenderer {
    /// Acquire the 2D context. Returns `None` when the context is not
    /// available, in which case the game runs nothing at all.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    /// Paint one frame from the current state
    pub fn render(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, COURT_WIDTH as f64, COURT_HEIGHT as f64);

        // Court divider
        ctx.set_stroke_style_str(COURT_COLOR);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(0.0, COURT_DIVIDER as f64);
        ctx.line_to(COURT_WIDTH as f64, COURT_DIVIDER as f64);
        ctx.stroke();

        // Court labels
        ctx.set_fill_style_str(COURT_COLOR);
        ctx.set_font("20px Arial");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("OPPONENT COURT", (COURT_WIDTH / 2.0) as f64, 30.0);
        let _ = ctx.fill_text(
            "YOUR COURT",
            (COURT_WIDTH / 2.0) as f64,
            (COURT_HEIGHT - 20.0) as f64,
        );

        // Balls, colored by owner, outlined while caught
        for ball in &state.balls {
            let color = match ball.owner {
                Some(Owner::Player) => PLAYER_BALL_COLOR,
                _ => OPPONENT_BALL_COLOR,
            };
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            let _ = ctx.arc(ball.pos.x as f64, ball.pos.y as f64, ball.radius as f64, 0.0, TAU);
            ctx.fill();

            if ball.caught {
                ctx.set_stroke_style_str(CAUGHT_OUTLINE_COLOR);
                ctx.set_line_width(3.0);
                ctx.stroke();
            }
        }

        // Figures: opponent at the top, player at the bottom
        self.draw_figure(state.opponent_x, 20.0, OPPONENT_FIGURE_COLOR);
        self.draw_figure(
            state.player_x,
            COURT_HEIGHT - FIGURE_HEIGHT - 10.0,
            PLAYER_FIGURE_COLOR,
        );

        // Score labels
        ctx.set_fill_style_str(COURT_COLOR);
        ctx.set_font("16px Arial");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("THEM: {}", state.score.opponent), 10.0, 60.0);
        let _ = ctx.fill_text(
            &format!("YOU: {}", state.score.player),
            10.0,
            (COURT_HEIGHT - 40.0) as f64,
        );
    }

    /// Five-segment stick figure: head, spine, arms, two legs. `y` is the
    /// head center.
    fn draw_figure(&self, x: f32, y: f32, color: &str) {
        let ctx = &self.ctx;
        let (x, y) = (x as f64, y as f64);

        // Head
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 12.0, 0.0, TAU);
        ctx.fill();

        ctx.set_stroke_style_str(color);
        ctx.set_line_width(3.0);

        // Spine
        ctx.begin_path();
        ctx.move_to(x, y + 12.0);
        ctx.line_to(x, y + 30.0);
        ctx.stroke();

        // Arms
        ctx.begin_path();
        ctx.move_to(x - 15.0, y + 20.0);
        ctx.line_to(x, y + 15.0);
        ctx.line_to(x + 15.0, y + 20.0);
        ctx.stroke();

        // Legs
        ctx.begin_path();
        ctx.move_to(x, y + 30.0);
        ctx.line_to(x - 10.0, y + 45.0);
        ctx.move_to(x, y + 30.0);
        ctx.line_to(x + 10.0, y + 45.0);
        ctx.stroke();
    }
}
