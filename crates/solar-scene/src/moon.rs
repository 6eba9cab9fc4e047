//! Moon animation: a pulsing orbit around the Earth's anchor with periodic
//! scale and distance modulation.

use glam::{Mat4, Vec3};

/// Orbital rotation rate in degrees per second.
pub const ORBIT_RATE_DEG: f32 = 30.0;

/// Mean orbital distance from the Earth anchor, in world units.
pub const DISTANCE_BASE: f32 = 3.0;

/// Distance modulation amplitude; distance breathes at twice the orbital rate.
pub const DISTANCE_SWING: f32 = 0.4;

/// Mean visual scale of the Moon sprite.
pub const SCALE_BASE: f32 = 1.0;

/// Scale modulation amplitude; scale breathes at the orbital rate.
pub const SCALE_SWING: f32 = 0.3;

/// Animation state for the Moon sprite.
///
/// The rotation angle accumulates in degrees without wrapping, mirroring the
/// unbounded Earth phase. Distance and scale are frame-local recomputations
/// from the current angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    /// Accumulated orbital angle in degrees.
    pub rotation_deg: f32,
    /// Current sprite scale, in [0.7, 1.3].
    pub scale: f32,
    /// Current orbital distance from the Earth anchor, in [2.6, 3.4].
    pub distance: f32,
}

impl MoonState {
    /// Creates the initial state: angle zero, with scale and distance already
    /// evaluated at that angle.
    pub fn new() -> Self {
        Self {
            rotation_deg: 0.0,
            scale: SCALE_BASE,
            distance: DISTANCE_BASE + DISTANCE_SWING,
        }
    }

    /// Advances the orbit by `dt` seconds and re-derives scale and distance.
    pub fn advance(&mut self, dt: f32) {
        self.rotation_deg += ORBIT_RATE_DEG * dt;
        self.scale = SCALE_BASE - self.rotation_deg.to_radians().sin() * SCALE_SWING;
        self.distance =
            DISTANCE_BASE + (2.0 * self.rotation_deg).to_radians().cos() * DISTANCE_SWING;
    }

    /// Model matrix for rendering, chained off the Earth's unscaled anchor.
    ///
    /// The Moon has no independent world placement: its transform is always
    /// anchor, then local rotation, then orbital offset, then scale.
    pub fn model_matrix(&self, earth_anchor: Vec3) -> Mat4 {
        Mat4::from_translation(earth_anchor)
            * Mat4::from_rotation_z(self.rotation_deg.to_radians())
            * Mat4::from_translation(Vec3::new(self.distance, 0.0, 0.0))
            * Mat4::from_scale(Vec3::new(self.scale, self.scale, 1.0))
    }
}

impl Default for MoonState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let moon = MoonState::new();
        assert_eq!(moon.rotation_deg, 0.0);
        assert_eq!(moon.scale, 1.0);
        assert!((moon.distance - 3.4).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_accumulates_at_thirty_degrees_per_second() {
        let mut moon = MoonState::new();
        moon.advance(2.0);
        assert!((moon.rotation_deg - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_is_unbounded() {
        let mut moon = MoonState::new();
        for _ in 0..30 {
            moon.advance(1.0);
        }
        // 30 seconds → 900 degrees, no wrap to [0, 360).
        assert!((moon.rotation_deg - 900.0).abs() < 1e-2);
    }

    #[test]
    fn test_scale_formula_at_quarter_turn() {
        let mut moon = MoonState::new();
        moon.advance(3.0); // 90 degrees
        // scale = 1 - sin(90°) * 0.3 = 0.7
        assert!((moon.scale - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_distance_formula_at_quarter_turn() {
        let mut moon = MoonState::new();
        moon.advance(3.0); // 90 degrees → 2θ = 180°
        // distance = 3 + cos(180°) * 0.4 = 2.6
        assert!((moon.distance - 2.6).abs() < 1e-5);
    }

    #[test]
    fn test_scale_and_distance_stay_bounded() {
        let mut moon = MoonState::new();
        for _ in 0..20_000 {
            moon.advance(0.013);
            assert!((0.7 - 1e-5..=1.3 + 1e-5).contains(&moon.scale));
            assert!((2.6 - 1e-5..=3.4 + 1e-5).contains(&moon.distance));
        }
    }

    #[test]
    fn test_distance_breathes_at_twice_the_orbital_rate() {
        // A half orbit (180°) brings the distance back to its maximum while
        // the scale returns to its mean.
        let mut moon = MoonState::new();
        moon.advance(6.0); // 180 degrees
        assert!((moon.distance - 3.4).abs() < 1e-4);
        assert!((moon.scale - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_model_matrix_orbits_the_anchor() {
        let mut moon = MoonState::new();
        moon.advance(3.0); // 90 degrees
        let anchor = Vec3::new(1.5, 0.0, 0.0);
        let center = moon.model_matrix(anchor) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);

        // At 90° the orbital offset points straight up from the anchor.
        assert!((center.x - 1.5).abs() < 1e-4);
        assert!((center.y - moon.distance).abs() < 1e-4);
    }

    #[test]
    fn test_model_matrix_applies_scale_after_orbit() {
        let moon = MoonState::new();
        let m = moon.model_matrix(Vec3::ZERO);
        // At angle 0 the right edge of the unit quad lands at distance + 0.5 * scale.
        let edge = m * glam::Vec4::new(0.5, 0.0, 0.0, 1.0);
        assert!((edge.x - (moon.distance + 0.5 * moon.scale)).abs() < 1e-5);
    }

    #[test]
    fn test_moon_follows_earth_anchor() {
        let moon = MoonState::new();
        let a = moon.model_matrix(Vec3::new(-2.0, 0.0, 0.0)) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let b = moon.model_matrix(Vec3::new(2.0, 0.0, 0.0)) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        // Same local transform, shifted exactly by the anchor delta.
        assert!((b.x - a.x - 4.0).abs() < 1e-5);
        assert!((b.y - a.y).abs() < 1e-5);
    }
}
