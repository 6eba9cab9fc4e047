//! Earth animation: smooth horizontal drift driven by a cosine of an
//! accumulated phase.

use glam::{Mat4, Vec3};

/// Angular rate of the drift phase in radians per second.
pub const DRIFT_RATE: f32 = 1.2;

/// Horizontal drift amplitude in world units.
pub const DRIFT_AMPLITUDE: f32 = 2.0;

/// Visual scale applied to the Earth sprite quad.
pub const SPRITE_SCALE: f32 = 1.65;

/// Animation state for the Earth sprite.
///
/// The phase accumulator is unbounded: it grows monotonically for the
/// lifetime of the process. Wrapping it would change nothing observable at
/// typical session lengths, and the unbounded accumulation is part of the
/// documented behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthState {
    /// Accumulated phase fed to the cosine, in radians.
    pub phase: f32,
    /// Current horizontal position in world units.
    pub translate_x: f32,
}

impl EarthState {
    /// Creates the initial state: zero phase, centered horizontally.
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            translate_x: 0.0,
        }
    }

    /// Advances the drift by `dt` seconds and recomputes the position.
    pub fn advance(&mut self, dt: f32) {
        self.phase += DRIFT_RATE * dt;
        self.translate_x = self.phase.cos() * DRIFT_AMPLITUDE;
    }

    /// The translated-but-unscaled world position.
    ///
    /// This is the anchor the Moon orbits around; the Moon must never see the
    /// Earth's sprite scale.
    pub fn anchor(&self) -> Vec3 {
        Vec3::new(self.translate_x, 0.0, 0.0)
    }

    /// Model matrix for rendering, rebuilt from the identity every frame.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.anchor())
            * Mat4::from_scale(Vec3::new(SPRITE_SCALE, SPRITE_SCALE, 1.0))
    }
}

impl Default for EarthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_centered() {
        let earth = EarthState::new();
        assert_eq!(earth.phase, 0.0);
        assert_eq!(earth.translate_x, 0.0);
    }

    #[test]
    fn test_phase_accumulates_linearly() {
        let mut earth = EarthState::new();
        earth.advance(2.0);
        assert!((earth.phase - 2.4).abs() < 1e-6);
    }

    #[test]
    fn test_phase_independent_of_delta_chunking() {
        // Many small steps must accumulate the same phase as one big step.
        let mut fine = EarthState::new();
        for _ in 0..1000 {
            fine.advance(0.005);
        }
        let mut coarse = EarthState::new();
        coarse.advance(5.0);
        assert!(
            (fine.phase - coarse.phase).abs() < 1e-3,
            "phase diverged: {} vs {}",
            fine.phase,
            coarse.phase
        );
    }

    #[test]
    fn test_position_is_cosine_of_phase() {
        let mut earth = EarthState::new();
        earth.advance(1.0);
        let expected = (1.2f32).cos() * 2.0;
        assert!((earth.translate_x - expected).abs() < 1e-6);
    }

    #[test]
    fn test_position_bounded_by_amplitude() {
        let mut earth = EarthState::new();
        for _ in 0..10_000 {
            earth.advance(0.016);
            assert!(earth.translate_x.abs() <= DRIFT_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_phase_is_unbounded() {
        let mut earth = EarthState::new();
        for _ in 0..100 {
            earth.advance(1.0);
        }
        // 100 seconds at 1.2 rad/s — no wrapping to [0, 2π).
        assert!((earth.phase - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_anchor_ignores_sprite_scale() {
        let mut earth = EarthState::new();
        earth.advance(0.7);
        let anchor = earth.anchor();
        assert_eq!(anchor.x, earth.translate_x);
        assert_eq!(anchor.y, 0.0);
        assert_eq!(anchor.z, 0.0);
    }

    #[test]
    fn test_model_matrix_translates_and_scales() {
        let mut earth = EarthState::new();
        earth.advance(0.3);
        let m = earth.model_matrix();

        // A corner of the unit quad lands at translate_x + corner * scale.
        let corner = m * glam::Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!((corner.x - (earth.translate_x + 0.5 * SPRITE_SCALE)).abs() < 1e-5);
        assert!((corner.y - 0.5 * SPRITE_SCALE).abs() < 1e-5);
    }

    #[test]
    fn test_no_vertical_motion() {
        let mut earth = EarthState::new();
        for _ in 0..500 {
            earth.advance(0.02);
            let center = earth.model_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
            assert_eq!(center.y, 0.0);
        }
    }
}
