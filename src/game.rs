//! Game loop
//!
//! `Game` bundles the simulation with its render surface and HUD. One
//! `frame()` is one tick plus a best-effort redraw plus HUD notifications.
//! `GameLoop` drives frames through a `Scheduler`, asking for the next frame
//! only while the game is running, and routes clicks and restarts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;

use crate::platform::{Hud, RenderSurface, Scheduler};
use crate::renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, handle_click, tick};

/// Game instance holding all state
pub struct Game<R, H> {
    state: GameState,
    surface: R,
    hud: H,
    settings: Settings,
}

impl<R: RenderSurface, H: Hud> Game<R, H> {
    pub fn new(seed: u64, surface: R, hud: H, settings: Settings) -> Self {
        let state = GameState::new(seed, surface.size());
        Self {
            state,
            surface,
            hud,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// NotStarted -> Running, sized to the surface
    pub fn start(&mut self) -> bool {
        self.sync_play_area();
        let started = self.state.start();
        if started {
            log::info!("Game started with seed: {}", self.state.seed);
        }
        self.dispatch_events();
        started
    }

    /// Reset everything and start again
    pub fn restart(&mut self, seed: u64) {
        self.hud.hide_game_over();
        self.sync_play_area();
        self.state.restart(seed);
        log::info!("Game restarted with seed: {}", seed);
        self.dispatch_events();
    }

    /// Run one frame. Returns whether the game is still running.
    pub fn frame(&mut self) -> bool {
        tick(&mut self.state);
        self.render();
        self.dispatch_events();
        self.state.is_running()
    }

    /// Apply a click in surface coordinates. Returns the id of the hit target.
    pub fn click(&mut self, x: f32, y: f32) -> Option<u32> {
        let hit = handle_click(&mut self.state, Vec2::new(x, y));
        self.dispatch_events();
        hit
    }

    fn sync_play_area(&mut self) {
        self.state.resize(self.surface.size());
    }

    fn render(&mut self) {
        if let Err(err) = renderer::draw_frame(&mut self.surface, &self.state, &self.settings) {
            log::warn!("Render error: {}", err);
        }
    }

    /// Forward published state changes to the HUD
    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => {
                    self.hud.show_score(self.state.score);
                    self.hud.show_lives(self.state.lives);
                }
                GameEvent::Hit { score, .. } => self.hud.show_score(score),
                GameEvent::Escaped { lives, .. } => self.hud.show_lives(lives),
                GameEvent::GameOver { final_score } => self.hud.show_game_over(final_score),
                GameEvent::Spawned { id } => log::trace!("target {} on screen", id),
                GameEvent::Escalated { difficulty } => log::info!(
                    "Difficulty up: speed {:.1}, spawn every {} frames",
                    difficulty.base_speed,
                    difficulty.spawn_interval
                ),
            }
        }
    }
}

/// Shared handle that keeps a game ticking through a scheduler.
///
/// At most one frame request is outstanding at a time: `start` and
/// `restart` only schedule when the loop is idle.
pub struct GameLoop<R, H, S: ?Sized> {
    game: Rc<RefCell<Game<R, H>>>,
    scheduler: Rc<S>,
    active: Rc<Cell<bool>>,
}

impl<R, H, S: ?Sized> Clone for GameLoop<R, H, S> {
    fn clone(&self) -> Self {
        Self {
            game: Rc::clone(&self.game),
            scheduler: Rc::clone(&self.scheduler),
            active: Rc::clone(&self.active),
        }
    }
}

impl<R, H, S> GameLoop<R, H, S>
where
    R: RenderSurface + 'static,
    H: Hud + 'static,
    S: Scheduler + ?Sized + 'static,
{
    pub fn new(game: Game<R, H>, scheduler: Rc<S>) -> Self {
        Self {
            game: Rc::new(RefCell::new(game)),
            scheduler,
            active: Rc::new(Cell::new(false)),
        }
    }

    pub fn game(&self) -> &Rc<RefCell<Game<R, H>>> {
        &self.game
    }

    /// Whether a frame is currently scheduled
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Start the game and request the first frame
    pub fn start(&self) {
        if self.game.borrow_mut().start() {
            self.ensure_scheduled();
        }
    }

    /// Reset from any phase and re-enter the loop
    pub fn restart(&self, seed: u64) {
        self.game.borrow_mut().restart(seed);
        self.ensure_scheduled();
    }

    /// Pointer click in surface coordinates
    pub fn click(&self, x: f32, y: f32) -> Option<u32> {
        self.game.borrow_mut().click(x, y)
    }

    fn ensure_scheduled(&self) {
        if !self.active.replace(true) {
            self.schedule();
        }
    }

    fn schedule(&self) {
        let this = self.clone();
        self.scheduler.run_next(Box::new(move || {
            let running = this.game.borrow_mut().frame();
            if running {
                this.schedule();
            } else {
                this.active.set(false);
                log::info!("Game loop stopped");
            }
        }));
    }
}
