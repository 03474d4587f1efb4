//! Game state and core simulation types
//!
//! `GameState` is the single authoritative value mutated by the tick and by
//! click handling. Nothing else holds targets.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::Difficulty;
use super::target::Target;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created but not yet started
    NotStarted,
    /// Accepting ticks and clicks
    Running,
    /// Lives ran out; only a restart leaves this phase
    Over,
}

/// Drawable play area dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// State changes published to observers (HUD, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Started,
    Spawned { id: u32 },
    Escalated { difficulty: Difficulty },
    Hit { id: u32, score: u64 },
    Escaped { id: u32, lives: u32 },
    GameOver { final_score: u64 },
}

/// End-of-run statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: u64,
    pub hits: u32,
    pub escapes: u32,
    pub difficulty: Difficulty,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Ticks processed while running
    pub frame_count: u64,
    pub difficulty: Difficulty,
    pub play_area: PlayArea,
    /// Active targets in spawn order
    pub targets: Vec<Target>,
    /// Targets removed by clicks this run
    pub hits: u32,
    /// Targets removed by falling out this run
    pub escapes: u32,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh, not-yet-started game
    pub fn new(seed: u64, play_area: PlayArea) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            score: 0,
            lives: START_LIVES,
            frame_count: 0,
            difficulty: Difficulty::default(),
            play_area,
            targets: Vec::new(),
            hits: 0,
            escapes: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// NotStarted -> Running. Returns false (and changes nothing) otherwise.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            log::warn!("start ignored in phase {:?}", self.phase);
            return false;
        }
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        true
    }

    /// Reinitialize every field to its start value, keeping the play area.
    /// Pending events are dropped; the phase returns to NotStarted.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed, self.play_area);
    }

    /// Reset and start in one go (Over -> Running)
    pub fn restart(&mut self, seed: u64) {
        self.reset(seed);
        self.start();
    }

    /// Update the play area (e.g. after the surface was resized)
    pub fn resize(&mut self, play_area: PlayArea) {
        self.play_area = play_area;
    }

    /// Running -> Over
    pub(crate) fn end_game(&mut self) {
        self.phase = GamePhase::Over;
        log::info!(
            "game over at frame {}: score {}, hits {}, escapes {}",
            self.frame_count,
            self.score,
            self.hits,
            self.escapes
        );
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    /// Take all events published since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            frames: self.frame_count,
            score: self.score,
            hits: self.hits,
            escapes: self.escapes,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(1, PlayArea::new(800.0, 500.0));
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.frame_count, 0);
        assert!(state.targets.is_empty());
        assert_eq!(state.difficulty.base_speed, 2.0);
        assert_eq!(state.difficulty.spawn_interval, 60);
    }

    #[test]
    fn test_start_only_from_not_started() {
        let mut state = GameState::new(1, PlayArea::new(800.0, 500.0));
        assert!(state.start());
        assert!(state.is_running());
        assert!(!state.start());

        state.end_game();
        assert!(!state.start());
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = GameState::new(1, PlayArea::new(800.0, 500.0));
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(1, PlayArea::new(640.0, 500.0));
        state.start();
        state.score = 120;
        state.lives = 0;
        state.frame_count = 900;
        state.difficulty.escalate();
        state.difficulty.escalate();
        let id = state.next_entity_id();
        state.targets.push(Target {
            id,
            pos: glam::Vec2::new(50.0, 50.0),
            radius: 25.0,
            speed: 3.0,
            hue: 120.0,
        });
        state.end_game();

        state.restart(2);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.seed, 2);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.frame_count, 0);
        assert!(state.targets.is_empty());
        assert_eq!(state.difficulty, Difficulty::default());
        assert_eq!(state.play_area, PlayArea::new(640.0, 500.0));
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_summary_serializes() {
        let state = GameState::new(77, PlayArea::new(800.0, 500.0));
        let json = serde_json::to_string(&state.summary()).unwrap();
        assert!(json.contains("\"seed\":77"));
        assert!(json.contains("\"spawn_interval\":60"));
    }
}
