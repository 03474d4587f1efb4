//! Browser platform: requestAnimationFrame, canvas 2D and DOM HUD

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Window};

use super::{Hud, RenderError, RenderSurface, Scheduler};
use crate::sim::PlayArea;

/// Runs callbacks via `window.requestAnimationFrame`
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for AnimationFrameScheduler {
    fn run_next(&self, callback: Box<dyn FnOnce()>) {
        let closure = Closure::once(move |_time: f64| callback());
        if let Err(err) = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
        closure.forget();
    }
}

fn backend_err(err: JsValue) -> RenderError {
    RenderError::Backend(format!("{:?}", err))
}

/// Canvas with its 2D context. The context is optional so a browser that
/// refuses one still runs the simulation.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
        if ctx.is_none() {
            log::warn!("canvas 2d context unavailable, rendering disabled");
        }
        Self { canvas, ctx }
    }

    fn ctx(&self) -> Result<&CanvasRenderingContext2d, RenderError> {
        self.ctx.as_ref().ok_or(RenderError::Unavailable)
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> PlayArea {
        PlayArea::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self, color: &str) -> Result<(), RenderError> {
        let ctx = self.ctx()?;
        ctx.set_fill_style_str(color);
        ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        Ok(())
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), RenderError> {
        let ctx = self.ctx()?;
        ctx.set_fill_style_str(color);
        ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: &str,
        stroke: &str,
        line_width: f32,
    ) -> Result<(), RenderError> {
        let ctx = self.ctx()?;
        ctx.begin_path();
        ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )
        .map_err(backend_err)?;
        ctx.set_fill_style_str(fill);
        ctx.fill();
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(line_width as f64);
        ctx.stroke();
        Ok(())
    }

    fn draw_crosshair(
        &mut self,
        center: Vec2,
        half_length: f32,
        color: &str,
        line_width: f32,
    ) -> Result<(), RenderError> {
        let ctx = self.ctx()?;
        let (x, y, h) = (center.x as f64, center.y as f64, half_length as f64);
        ctx.begin_path();
        ctx.move_to(x - h, y);
        ctx.line_to(x + h, y);
        ctx.move_to(x, y - h);
        ctx.line_to(x, y + h);
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(line_width as f64);
        ctx.stroke();
        Ok(())
    }
}

/// Element ids the page must provide
pub mod ids {
    pub const CANVAS: &str = "gameCanvas";
    pub const SCORE: &str = "score";
    pub const LIVES: &str = "lives";
    pub const GAME_OVER: &str = "gameOver";
    pub const FINAL_SCORE: &str = "finalScore";
    pub const RESTART: &str = "restartBtn";
}

/// Score/lives text plus the game-over overlay.
/// Missing elements are skipped silently.
pub struct DomHud {
    score: Option<Element>,
    lives: Option<Element>,
    game_over: Option<Element>,
    final_score: Option<Element>,
}

impl DomHud {
    pub fn new(document: &Document) -> Self {
        Self {
            score: document.get_element_by_id(ids::SCORE),
            lives: document.get_element_by_id(ids::LIVES),
            game_over: document.get_element_by_id(ids::GAME_OVER),
            final_score: document.get_element_by_id(ids::FINAL_SCORE),
        }
    }
}

impl Hud for DomHud {
    fn show_score(&mut self, score: u64) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn show_lives(&mut self, lives: u32) {
        if let Some(el) = &self.lives {
            el.set_text_content(Some(&lives.to_string()));
        }
    }

    fn show_game_over(&mut self, final_score: u64) {
        if let Some(el) = &self.final_score {
            el.set_text_content(Some(&final_score.to_string()));
        }
        if let Some(el) = &self.game_over {
            let _ = el.class_list().remove_1("hidden");
        }
    }

    fn hide_game_over(&mut self) {
        if let Some(el) = &self.game_over {
            let _ = el.class_list().add_1("hidden");
        }
    }
}
