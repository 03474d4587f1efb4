//! Target Rush - A falling-target click arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, spawning, difficulty, hit-testing)
//! - `game`: Frame loop driving the simulation through injected collaborators
//! - `renderer`: Draws a frame onto any render surface
//! - `platform`: Scheduler/surface/HUD abstraction (headless + browser)
//! - `settings`: Display and runtime configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, GameLoop};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default play area height (pixels)
    pub const PLAY_AREA_HEIGHT: f32 = 500.0;

    /// Smallest target radius
    pub const TARGET_MIN_RADIUS: f32 = 20.0;
    /// Radius spread: radius lies in [MIN, MIN + SPREAD)
    pub const TARGET_RADIUS_SPREAD: f32 = 20.0;
    /// Speed spread above the base speed: speed lies in [base, base + SPREAD)
    pub const TARGET_SPEED_SPREAD: f32 = 2.0;

    /// Lives at the start of a run
    pub const START_LIVES: u32 = 3;
    /// Points credited per hit
    pub const HIT_SCORE: u64 = 10;

    /// Difficulty progression
    pub const BASE_SPEED_START: f32 = 2.0;
    pub const BASE_SPEED_STEP: f32 = 0.5;
    pub const SPAWN_INTERVAL_START: u32 = 60;
    pub const SPAWN_INTERVAL_STEP: u32 = 5;
    pub const SPAWN_INTERVAL_MIN: u32 = 30;
    /// Frames between difficulty escalations
    pub const ESCALATION_PERIOD: u64 = 300;
}
