//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod input;
pub mod spawner;
pub mod state;
pub mod target;
pub mod tick;

pub use autopilot::Autopilot;
pub use input::handle_click;
pub use spawner::{Difficulty, spawn_check};
pub use state::{GameEvent, GamePhase, GameState, PlayArea, RunSummary};
pub use target::Target;
pub use tick::tick;
