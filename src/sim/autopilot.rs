//! Demo player
//!
//! Aims at whichever target is closest to escaping. A reaction delay keeps
//! it beatable: once the spawn rate outpaces its click rate, it loses.

use glam::Vec2;

use super::state::GameState;

/// Default frames between autopilot clicks
pub const DEFAULT_REACTION_FRAMES: u32 = 45;

#[derive(Debug, Clone)]
pub struct Autopilot {
    reaction_frames: u32,
    cooldown: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_REACTION_FRAMES)
    }
}

impl Autopilot {
    pub fn new(reaction_frames: u32) -> Self {
        Self {
            reaction_frames: reaction_frames.max(1),
            cooldown: 0,
        }
    }

    /// Call once per frame. Returns where to click, if the autopilot is
    /// ready and something is on screen.
    pub fn next_click(&mut self, state: &GameState) -> Option<Vec2> {
        if !state.is_running() {
            return None;
        }
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        // Only aim at targets whose center is inside the play area
        let aim = state
            .targets
            .iter()
            .filter(|t| t.pos.y >= 0.0)
            .max_by(|a, b| {
                (a.pos.y - a.radius)
                    .partial_cmp(&(b.pos.y - b.radius))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|t| t.pos)?;

        self.cooldown = self.reaction_frames;
        Some(aim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::handle_click;
    use crate::sim::state::{GamePhase, PlayArea};
    use crate::sim::target::Target;
    use crate::sim::tick::tick;

    fn push_target(state: &mut GameState, x: f32, y: f32) {
        let id = state.next_entity_id();
        state.targets.push(Target {
            id,
            pos: Vec2::new(x, y),
            radius: 20.0,
            speed: 2.0,
            hue: 0.0,
        });
    }

    #[test]
    fn test_aims_at_lowest_visible_target() {
        let mut state = GameState::new(3, PlayArea::new(800.0, 500.0));
        state.start();
        push_target(&mut state, 100.0, 50.0);
        push_target(&mut state, 300.0, 400.0);
        push_target(&mut state, 500.0, -10.0);

        let mut pilot = Autopilot::new(10);
        assert_eq!(pilot.next_click(&state), Some(Vec2::new(300.0, 400.0)));
        // Cooling down
        assert_eq!(pilot.next_click(&state), None);
    }

    #[test]
    fn test_idle_without_targets() {
        let mut state = GameState::new(3, PlayArea::new(800.0, 500.0));
        state.start();
        let mut pilot = Autopilot::default();
        assert_eq!(pilot.next_click(&state), None);
    }

    #[test]
    fn test_demo_run_eventually_ends() {
        let mut state = GameState::new(2024, PlayArea::new(800.0, 500.0));
        state.start();
        let mut pilot = Autopilot::default();

        let mut frames = 0;
        while state.is_running() && frames < 200_000 {
            if let Some(point) = pilot.next_click(&state) {
                handle_click(&mut state, point);
            }
            tick(&mut state);
            frames += 1;
        }

        assert_eq!(state.phase, GamePhase::Over);
        assert!(state.hits > 0);
        assert_eq!(state.score, u64::from(state.hits) * 10);
        assert_eq!(state.escapes, 3);
    }
}
