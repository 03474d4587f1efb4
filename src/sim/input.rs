//! Pointer click handling
//!
//! A click removes at most one target. When circles overlap, the most
//! recently spawned one is in front and takes the hit.

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::HIT_SCORE;

/// Apply a click at `point` (play area coordinates).
///
/// Returns the id of the target that was hit, if any. Misses and clicks
/// outside the running phase change nothing.
pub fn handle_click(state: &mut GameState, point: Vec2) -> Option<u32> {
    if !state.is_running() {
        return None;
    }

    let index = state.targets.iter().rposition(|t| t.contains_point(point))?;
    let target = state.targets.remove(index);

    state.score += HIT_SCORE;
    state.hits += 1;
    state.events.push(GameEvent::Hit {
        id: target.id,
        score: state.score,
    });
    Some(target.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, PlayArea};
    use crate::sim::target::Target;
    use crate::sim::tick::tick;
    use proptest::prelude::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(9, PlayArea::new(800.0, 500.0));
        state.start();
        state.drain_events();
        state
    }

    fn push_target(state: &mut GameState, x: f32, y: f32, radius: f32) -> u32 {
        let id = state.next_entity_id();
        state.targets.push(Target {
            id,
            pos: Vec2::new(x, y),
            radius,
            speed: 2.0,
            hue: 0.0,
        });
        id
    }

    #[test]
    fn test_hit_scores_and_removes() {
        let mut state = running_state();
        let id = push_target(&mut state, 100.0, 100.0, 30.0);

        assert_eq!(handle_click(&mut state, Vec2::new(110.0, 95.0)), Some(id));
        assert_eq!(state.score, 10);
        assert_eq!(state.hits, 1);
        assert!(state.targets.is_empty());
        assert_eq!(state.drain_events(), vec![GameEvent::Hit { id, score: 10 }]);
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut state = running_state();
        push_target(&mut state, 100.0, 100.0, 30.0);

        assert_eq!(handle_click(&mut state, Vec2::new(400.0, 400.0)), None);
        assert_eq!(state.score, 0);
        assert_eq!(state.targets.len(), 1);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_click_on_empty_field() {
        let mut state = running_state();
        assert_eq!(handle_click(&mut state, Vec2::new(10.0, 10.0)), None);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_rim_click_is_a_miss() {
        let mut state = running_state();
        push_target(&mut state, 100.0, 100.0, 20.0);
        assert_eq!(handle_click(&mut state, Vec2::new(100.0, 120.0)), None);
        assert_eq!(state.targets.len(), 1);
    }

    #[test]
    fn test_overlap_hits_newest_only() {
        let mut state = running_state();
        let older = push_target(&mut state, 100.0, 100.0, 30.0);
        let newer = push_target(&mut state, 110.0, 100.0, 30.0);

        assert_eq!(handle_click(&mut state, Vec2::new(105.0, 100.0)), Some(newer));
        assert_eq!(state.score, 10);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.targets[0].id, older);

        assert_eq!(handle_click(&mut state, Vec2::new(105.0, 100.0)), Some(older));
        assert_eq!(state.score, 20);
    }

    #[test]
    fn test_click_ignored_when_not_running() {
        let mut state = GameState::new(9, PlayArea::new(800.0, 500.0));
        push_target(&mut state, 100.0, 100.0, 30.0);
        assert_eq!(handle_click(&mut state, Vec2::new(100.0, 100.0)), None);

        state.start();
        state.lives = 1;
        state.targets[0].pos.y = 529.0;
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Over);

        push_target(&mut state, 100.0, 100.0, 30.0);
        assert_eq!(handle_click(&mut state, Vec2::new(100.0, 100.0)), None);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_hit_target_cannot_escape_later() {
        let mut state = running_state();
        let id = push_target(&mut state, 100.0, 499.0, 20.0);
        handle_click(&mut state, Vec2::new(100.0, 499.0));

        for _ in 0..50 {
            tick(&mut state);
        }
        assert_eq!(state.lives, 3);
        assert_eq!(state.escapes, 0);
        assert!(state.targets.iter().all(|t| t.id != id));
    }

    proptest! {
        #[test]
        fn prop_removals_are_exclusive(
            seed in any::<u64>(),
            clicks in proptest::collection::vec((0u32..600, 0.0f32..800.0, 0.0f32..500.0), 0..200),
        ) {
            let mut state = GameState::new(seed, PlayArea::new(800.0, 500.0));
            state.start();

            let mut clicks = clicks;
            clicks.sort_by_key(|c| c.0);
            let mut pending = clicks.into_iter().peekable();
            let mut hit_ids = Vec::new();
            let mut escaped_ids = Vec::new();

            for frame in 0..600u32 {
                while let Some(&(at, x, y)) = pending.peek() {
                    if at != frame {
                        break;
                    }
                    pending.next();
                    let before = state.score;
                    if let Some(id) = handle_click(&mut state, Vec2::new(x, y)) {
                        prop_assert_eq!(state.score, before + 10);
                        hit_ids.push(id);
                    } else {
                        prop_assert_eq!(state.score, before);
                    }
                }
                tick(&mut state);
                for event in state.drain_events() {
                    if let GameEvent::Escaped { id, .. } = event {
                        escaped_ids.push(id);
                    }
                }
            }

            prop_assert_eq!(state.score, hit_ids.len() as u64 * 10);
            prop_assert!(hit_ids.iter().all(|id| !escaped_ids.contains(id)));
            prop_assert_eq!(state.hits as usize, hit_ids.len());
            prop_assert_eq!(state.escapes as usize, escaped_ids.len());
        }
    }
}
