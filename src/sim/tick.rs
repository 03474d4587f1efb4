//! Fixed frame simulation tick
//!
//! One call advances the simulation by exactly one frame.

use super::spawner::spawn_check;
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame. No-op unless running.
///
/// Targets are walked by index from newest to oldest, so removing the
/// current entry never shifts one that is still unvisited. The walk stops
/// at the escape that ends the game; older targets stay where they were.
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    state.frame_count += 1;
    spawn_check(state);

    let height = state.play_area.height;
    let mut i = state.targets.len();
    while i > 0 {
        i -= 1;

        let target = &mut state.targets[i];
        target.advance(1);
        if !target.is_beyond_bottom(height) {
            continue;
        }

        let escaped = state.targets.remove(i);
        state.lives = state.lives.saturating_sub(1);
        state.escapes += 1;
        state.events.push(GameEvent::Escaped {
            id: escaped.id,
            lives: state.lives,
        });

        if state.lives == 0 {
            state.end_game();
            break;
        }
    }
}
