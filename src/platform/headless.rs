//! In-memory platform for tests and the native demo

use std::cell::RefCell;
use std::collections::VecDeque;

use glam::Vec2;

use super::{Hud, RenderError, RenderSurface, Scheduler};
use crate::sim::PlayArea;

/// Queues frame callbacks until the owner steps them by hand
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next refresh
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the oldest pending callback. Returns false if nothing was queued.
    pub fn advance(&self) -> bool {
        // Release the queue before running: the callback usually reschedules
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run up to `frames` callbacks, returning how many ran
    pub fn advance_by(&self, frames: usize) -> usize {
        (0..frames).take_while(|_| self.advance()).count()
    }
}

impl Scheduler for ManualScheduler {
    fn run_next(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(callback);
    }
}

/// Surface that counts draw calls instead of drawing
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: PlayArea,
    /// When false every draw call fails with `RenderError::Unavailable`
    pub available: bool,
    pub clears: usize,
    pub rects: usize,
    pub circles: usize,
    pub crosshairs: usize,
}

impl HeadlessSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: PlayArea::new(width, height),
            available: true,
            clears: 0,
            rects: 0,
            circles: 0,
            crosshairs: 0,
        }
    }

    fn check(&self) -> Result<(), RenderError> {
        if self.available {
            Ok(())
        } else {
            Err(RenderError::Unavailable)
        }
    }
}

impl RenderSurface for HeadlessSurface {
    fn size(&self) -> PlayArea {
        self.size
    }

    fn clear(&mut self, _color: &str) -> Result<(), RenderError> {
        self.check()?;
        self.clears += 1;
        Ok(())
    }

    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: &str) -> Result<(), RenderError> {
        self.check()?;
        self.rects += 1;
        Ok(())
    }

    fn draw_circle(
        &mut self,
        _center: Vec2,
        _radius: f32,
        _fill: &str,
        _stroke: &str,
        _line_width: f32,
    ) -> Result<(), RenderError> {
        self.check()?;
        self.circles += 1;
        Ok(())
    }

    fn draw_crosshair(
        &mut self,
        _center: Vec2,
        _half_length: f32,
        _color: &str,
        _line_width: f32,
    ) -> Result<(), RenderError> {
        self.check()?;
        self.crosshairs += 1;
        Ok(())
    }
}

/// HUD that remembers what it was last told to show
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingHud {
    pub score: u64,
    pub lives: u32,
    /// Final score while the game-over panel is visible
    pub game_over: Option<u64>,
    /// Every score pushed, in order
    pub score_updates: Vec<u64>,
}

impl Hud for RecordingHud {
    fn show_score(&mut self, score: u64) {
        self.score = score;
        self.score_updates.push(score);
    }

    fn show_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    fn show_game_over(&mut self, final_score: u64) {
        log::info!("GAME OVER - final score {}", final_score);
        self.game_over = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.game_over = None;
    }
}
