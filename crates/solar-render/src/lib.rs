//! wgpu rendering for the solar scene: GPU context and surface management,
//! sprite pipeline, textures, quad geometry, and per-frame encoding.

pub mod buffer;
pub mod camera;
pub mod gpu;
pub mod pass;
pub mod shader;
pub mod sprite_pipeline;
pub mod texture;
pub mod viewport;

pub use buffer::{BufferAllocator, MeshBuffer, QuadVertex, unit_quad_mesh};
pub use camera::{CameraUniform, SceneCamera};
pub use gpu::{FrameAcquireError, GpuContext, GpuInitError};
pub use pass::SceneFrame;
pub use shader::{ShaderError, compile_shader};
pub use sprite_pipeline::{ModelUniform, SPRITE_SHADER_SOURCE, SpritePipeline, draw_sprite};
pub use texture::{SPRITE_FORMAT, SpriteBinder, SpriteTexture, TextureError};
pub use viewport::Viewport;

/// Acquire a headless device and queue for unit tests.
///
/// Returns `None` on machines with no usable adapter so GPU-backed tests
/// degrade to no-ops instead of failing in CI.
#[cfg(test)]
pub(crate) fn test_gpu() -> Option<(wgpu::Device, wgpu::Queue)> {
    pollster::block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .ok()?;
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("test-device"),
                ..Default::default()
            })
            .await
            .ok()
    })
}
