//! Falling target entity
//!
//! A target is a circle that enters fully above the play area and falls
//! straight down at a fixed speed. Radius and speed never change after spawn.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A falling, clickable circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Center position (origin top-left, y grows downward)
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical speed in pixels per frame
    pub speed: f32,
    /// Display hue in degrees [0, 360)
    pub hue: f32,
}

/// Uniform draw in `[low, high)` for positive `high`. f32 rounding can land a
/// draw on `high`; those are pulled back to the largest float below it.
fn sample_below<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    let value = rng.random_range(low..high);
    if value < high {
        value
    } else {
        f32::from_bits(high.to_bits() - 1).max(low)
    }
}

impl Target {
    /// Spawn a target above the play area.
    ///
    /// The x position keeps the whole circle inside `[0, bounds_width]`. If the
    /// play area is narrower than the circle, the target is centered instead.
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, bounds_width: f32, base_speed: f32) -> Self {
        let radius = sample_below(
            rng,
            TARGET_MIN_RADIUS,
            TARGET_MIN_RADIUS + TARGET_RADIUS_SPREAD,
        );
        let x = if bounds_width - radius * 2.0 > 0.0 {
            rng.random_range(radius..=bounds_width - radius)
        } else {
            bounds_width / 2.0
        };
        let speed = sample_below(rng, base_speed, base_speed + TARGET_SPEED_SPREAD);
        let hue = sample_below(rng, 0.0, 360.0);

        Self {
            id,
            pos: Vec2::new(x, -radius),
            radius,
            speed,
            hue,
        }
    }

    /// Move down by `frames` ticks worth of speed. No clamping.
    #[inline]
    pub fn advance(&mut self, frames: u32) {
        self.pos.y += self.speed * frames as f32;
    }

    /// True once the top of the circle has passed below `height`
    #[inline]
    pub fn is_beyond_bottom(&self, height: f32) -> bool {
        self.pos.y - self.radius > height
    }

    /// Strict containment: a point exactly on the rim is a miss
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) < self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Always yields the largest possible output
    struct MaxRng;

    impl RngCore for MaxRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(u8::MAX);
        }
    }

    fn target_at(x: f32, y: f32, radius: f32) -> Target {
        Target {
            id: 1,
            pos: Vec2::new(x, y),
            radius,
            speed: 2.0,
            hue: 0.0,
        }
    }

    #[test]
    fn test_spawn_respects_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..500 {
            let t = Target::spawn(id, &mut rng, 800.0, 3.5);
            assert!(t.radius >= 20.0 && t.radius < 40.0, "radius {}", t.radius);
            assert!(t.pos.x - t.radius >= -1e-3 && t.pos.x + t.radius <= 800.0 + 1e-3);
            assert_eq!(t.pos.y, -t.radius);
            assert!(t.speed >= 3.5 && t.speed < 5.5, "speed {}", t.speed);
            assert!((0.0..360.0).contains(&t.hue));
        }
    }

    #[test]
    fn test_spawn_max_draw_stays_below_upper_bounds() {
        for base_speed in [2.0, 4.0, 6.5, 12.0] {
            let t = Target::spawn(1, &mut MaxRng, 800.0, base_speed);
            assert!(t.radius >= 20.0 && t.radius < 40.0, "radius {}", t.radius);
            assert!(
                t.speed >= base_speed && t.speed < base_speed + 2.0,
                "speed {} at base {}",
                t.speed,
                base_speed
            );
            assert!(t.hue < 360.0, "hue {}", t.hue);
            assert!(t.pos.x - t.radius >= 0.0 && t.pos.x + t.radius <= 800.0 + 1e-3, "x {}", t.pos.x);
        }
    }

    #[test]
    fn test_sample_below_never_returns_high() {
        assert!(sample_below(&mut MaxRng, 20.0, 40.0) < 40.0);
        assert!(sample_below(&mut MaxRng, 4.0, 6.0) < 6.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            let v = sample_below(&mut rng, 2.0, 4.0);
            assert!((2.0..4.0).contains(&v));
        }
    }

    #[test]
    fn test_spawn_narrow_area_centers() {
        let mut rng = Pcg32::seed_from_u64(1);
        let t = Target::spawn(1, &mut rng, 30.0, 2.0);
        assert_eq!(t.pos.x, 15.0);
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let a = Target::spawn(1, &mut Pcg32::seed_from_u64(99), 640.0, 2.0);
        let b = Target::spawn(1, &mut Pcg32::seed_from_u64(99), 640.0, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_advance_moves_down_only() {
        let mut t = target_at(100.0, -20.0, 20.0);
        t.advance(1);
        assert_eq!(t.pos, Vec2::new(100.0, -18.0));
        t.advance(3);
        assert_eq!(t.pos.y, -12.0);
    }

    #[test]
    fn test_beyond_bottom_uses_top_edge() {
        assert!(!target_at(100.0, 481.0, 20.0).is_beyond_bottom(500.0));
        assert!(!target_at(100.0, 520.0, 20.0).is_beyond_bottom(500.0));
        assert!(target_at(100.0, 521.0, 20.0).is_beyond_bottom(500.0));
    }

    #[test]
    fn test_contains_point_strict() {
        let t = target_at(100.0, 100.0, 20.0);
        assert!(t.contains_point(Vec2::new(100.0, 100.0)));
        assert!(t.contains_point(Vec2::new(119.0, 100.0)));
        // Exactly on the rim
        assert!(!t.contains_point(Vec2::new(120.0, 100.0)));
        assert!(!t.contains_point(Vec2::new(112.0, 116.0)));
        assert!(!t.contains_point(Vec2::new(200.0, 200.0)));
    }
}
