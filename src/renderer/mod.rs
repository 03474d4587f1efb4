//! Frame rendering
//!
//! Draws the background, a fixed starfield and every active target onto a
//! `RenderSurface`. Nothing here mutates the simulation.

use glam::Vec2;

use crate::platform::{RenderError, RenderSurface};
use crate::settings::Settings;
use crate::sim::{GameState, Target};

/// CSS fill color for a target
pub fn target_color(target: &Target) -> String {
    format!("hsl({:.0}, 70%, 60%)", target.hue)
}

/// Star positions for a surface of the given size. Stable across frames.
pub fn star_positions(count: u32, width: f32, height: f32) -> impl Iterator<Item = Vec2> {
    (0..count).filter(move |_| width >= 1.0 && height >= 1.0).map(move |i| {
        let x = (i as f32 * 123.0) % width;
        let y = (i as f32 * 456.0) % height;
        Vec2::new(x, y)
    })
}

/// Draw one full frame. Stops at the first failing draw call.
pub fn draw_frame<S: RenderSurface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    settings: &Settings,
) -> Result<(), RenderError> {
    surface.clear(&settings.background)?;

    let area = surface.size();
    let star = Vec2::splat(settings.star_size);
    for pos in star_positions(settings.star_count, area.width, area.height) {
        surface.fill_rect(pos, star, &settings.star_color)?;
    }

    for target in &state.targets {
        surface.draw_circle(
            target.pos,
            target.radius,
            &target_color(target),
            &settings.target_stroke,
            settings.target_stroke_width,
        )?;
        surface.draw_crosshair(
            target.pos,
            settings.crosshair_half_length,
            &settings.target_stroke,
            settings.crosshair_width,
        )?;
    }

    Ok(())
}
