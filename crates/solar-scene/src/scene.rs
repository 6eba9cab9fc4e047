//! Whole-scene state: owns both bodies and produces the per-frame draw list.

use glam::Mat4;

use crate::earth::EarthState;
use crate::moon::MoonState;

/// Half-width of the orthographic view volume in world units (x spans −5..5).
pub const VIEW_HALF_WIDTH: f32 = 5.0;

/// Half-height of the orthographic view volume (y spans −3.75..3.75).
pub const VIEW_HALF_HEIGHT: f32 = 3.75;

/// Near plane of the view volume.
pub const VIEW_NEAR: f32 = -1.0;

/// Far plane of the view volume.
pub const VIEW_FAR: f32 = 1.0;

/// The two sprites of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Moon,
    Earth,
}

/// One entry of the per-frame draw list.
#[derive(Debug, Clone, Copy)]
pub struct SpriteDraw {
    pub body: Body,
    pub model: Mat4,
}

/// Owned scene state, passed by exclusive ownership through update and
/// render — no globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneState {
    pub earth: EarthState,
    pub moon: MoonState,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            earth: EarthState::new(),
            moon: MoonState::new(),
        }
    }

    /// Advances the animation clock by `dt` seconds for both bodies.
    pub fn advance(&mut self, dt: f32) {
        self.earth.advance(dt);
        self.moon.advance(dt);
    }

    /// Produces the draw list for the current frame.
    ///
    /// Ordering is fixed: Moon first, then Earth. Alpha blending composites
    /// back-to-front and draw order is the scene's only depth mechanism.
    pub fn draw_list(&self) -> [SpriteDraw; 2] {
        [
            SpriteDraw {
                body: Body::Moon,
                model: self.moon.model_matrix(self.earth.anchor()),
            },
            SpriteDraw {
                body: Body::Earth,
                model: self.earth.model_matrix(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moon_always_drawn_before_earth() {
        let mut scene = SceneState::new();
        for _ in 0..100 {
            scene.advance(0.016);
            let draws = scene.draw_list();
            assert_eq!(draws[0].body, Body::Moon);
            assert_eq!(draws[1].body, Body::Earth);
        }
    }

    #[test]
    fn test_advance_drives_both_bodies() {
        let mut scene = SceneState::new();
        scene.advance(1.0);
        assert!((scene.earth.phase - 1.2).abs() < 1e-6);
        assert!((scene.moon.rotation_deg - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_draw_list_chains_moon_off_earth_anchor() {
        let mut scene = SceneState::new();
        scene.advance(0.5);
        let draws = scene.draw_list();
        let expected = scene.moon.model_matrix(scene.earth.anchor());
        assert_eq!(draws[0].model, expected);
    }

    #[test]
    fn test_matrices_rebuilt_not_accumulated() {
        // Two scenes reaching the same total elapsed time by different frame
        // sequences must produce (nearly) the same matrices.
        let mut a = SceneState::new();
        let mut b = SceneState::new();
        for _ in 0..4 {
            a.advance(0.25);
        }
        b.advance(1.0);
        let ma = a.draw_list()[1].model;
        let mb = b.draw_list()[1].model;
        for col in 0..4 {
            for row in 0..4 {
                assert!((ma.col(col)[row] - mb.col(col)[row]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_view_volume_constants() {
        assert_eq!(VIEW_HALF_WIDTH, 5.0);
        assert_eq!(VIEW_HALF_HEIGHT, 3.75);
        assert_eq!(VIEW_NEAR, -1.0);
        assert_eq!(VIEW_FAR, 1.0);
        // 640x480 window: the view volume preserves the 4:3 aspect ratio.
        assert!((VIEW_HALF_WIDTH / VIEW_HALF_HEIGHT - 640.0 / 480.0).abs() < 1e-6);
    }
}
