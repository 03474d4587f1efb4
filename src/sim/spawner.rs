//! Spawn timing and difficulty progression
//!
//! Spawning and escalation are both keyed off the frame counter, which the
//! tick increments before calling [`spawn_check`]. The first target therefore
//! appears on frame `SPAWN_INTERVAL_START`, never on frame 0.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use super::target::Target;
use crate::consts::*;

/// Difficulty parameters. Only ever get harder within one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Minimum speed assigned to newly spawned targets
    pub base_speed: f32,
    /// Frames between spawns
    pub spawn_interval: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED_START,
            spawn_interval: SPAWN_INTERVAL_START,
        }
    }
}

impl Difficulty {
    /// Whether `frame` is a spawn frame under the current interval
    pub fn spawn_due(&self, frame: u64) -> bool {
        frame > 0 && frame % u64::from(self.spawn_interval) == 0
    }

    /// Whether `frame` closes an escalation period
    pub fn escalation_due(frame: u64) -> bool {
        frame > 0 && frame % ESCALATION_PERIOD == 0
    }

    /// Bump speed and shorten the spawn interval (floored)
    pub fn escalate(&mut self) {
        self.base_speed += BASE_SPEED_STEP;
        self.spawn_interval = self
            .spawn_interval
            .saturating_sub(SPAWN_INTERVAL_STEP)
            .max(SPAWN_INTERVAL_MIN);
    }
}

/// Spawn at most one target for the current frame, then escalate difficulty
/// if this frame closes a period. The target spawned on an escalation frame
/// still uses the pre-escalation base speed.
pub fn spawn_check(state: &mut GameState) {
    let frame = state.frame_count;

    if state.difficulty.spawn_due(frame) {
        let id = state.next_entity_id();
        let target = Target::spawn(
            id,
            &mut state.rng,
            state.play_area.width,
            state.difficulty.base_speed,
        );
        log::debug!("frame {}: spawned target {} at x={:.1}", frame, id, target.pos.x);
        state.targets.push(target);
        state.events.push(GameEvent::Spawned { id });
    }

    if Difficulty::escalation_due(frame) {
        state.difficulty.escalate();
        log::debug!(
            "frame {}: difficulty up (speed {:.1}, interval {})",
            frame,
            state.difficulty.base_speed,
            state.difficulty.spawn_interval
        );
        state.events.push(GameEvent::Escalated {
            difficulty: state.difficulty,
        });
    }
}
