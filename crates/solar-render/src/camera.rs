//! Fixed orthographic camera for the 2D scene.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// GPU uniform carrying the camera matrices.
///
/// View and projection are uploaded as separate slots; the shader composes
/// them with the per-sprite model matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// Orthographic camera over a fixed, centered view volume.
///
/// The view matrix is the identity: the camera never moves. Only the
/// projection maps world units to clip space.
#[derive(Debug, Clone, Copy)]
pub struct SceneCamera {
    /// Half-width of the view volume in world units.
    pub half_width: f32,
    /// Half-height of the view volume in world units.
    pub half_height: f32,
    /// Near plane (may be negative; the quad sits at z = 0).
    pub near: f32,
    /// Far plane.
    pub far: f32,
}

impl SceneCamera {
    pub fn new(half_width: f32, half_height: f32, near: f32, far: f32) -> Self {
        Self {
            half_width,
            half_height,
            near,
            far,
        }
    }

    /// The fixed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    /// Orthographic projection over the configured bounds, mapping depth to
    /// wgpu's [0, 1] range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            -self.half_width,
            self.half_width,
            -self.half_height,
            self.half_height,
            self.near,
            self.far,
        )
    }

    /// Convert the camera to a uniform suitable for GPU upload.
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
        }
    }
}
