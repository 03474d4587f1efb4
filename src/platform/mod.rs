//! Platform abstraction layer
//!
//! The game loop only talks to its host through these traits:
//! - `Scheduler`: "run this again at the next refresh"
//! - `RenderSurface`: size query plus a handful of 2D draw calls
//! - `Hud`: fire-and-forget score/lives/game-over display
//!
//! `headless` backs them with in-memory fakes (tests, native demo);
//! `web` backs them with requestAnimationFrame, canvas 2D and the DOM.

use std::fmt;

use glam::Vec2;

use crate::sim::PlayArea;

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{HeadlessSurface, ManualScheduler, RecordingHud};

/// Defers a callback until the next display refresh.
///
/// The only guarantee is ordering: the callback runs after the current
/// frame has returned.
pub trait Scheduler {
    fn run_next(&self, callback: Box<dyn FnOnce()>);
}

/// Error from a draw call. Rendering is best-effort; callers log and move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No drawing context is attached
    Unavailable,
    /// The backend rejected a call
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Unavailable => write!(f, "render surface unavailable"),
            RenderError::Backend(msg) => write!(f, "render backend error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// A 2D drawing target
pub trait RenderSurface {
    /// Current drawable size
    fn size(&self) -> PlayArea;

    /// Fill the whole surface with `color`
    fn clear(&mut self, color: &str) -> Result<(), RenderError>;

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) -> Result<(), RenderError>;

    /// Filled circle with an outline
    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: &str,
        stroke: &str,
        line_width: f32,
    ) -> Result<(), RenderError>;

    /// Plus-shaped crosshair centered on `center`
    fn draw_crosshair(
        &mut self,
        center: Vec2,
        half_length: f32,
        color: &str,
        line_width: f32,
    ) -> Result<(), RenderError>;
}

/// Score/lives display sinks and the game-over panel
pub trait Hud {
    fn show_score(&mut self, score: u64);
    fn show_lives(&mut self, lives: u32);
    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);
}
