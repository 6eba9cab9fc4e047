//! Per-frame command encoding.
//!
//! A frame is exactly one encoder, one clearing render pass over the
//! surface, and one submit-and-present. [`SceneFrame`] owns that
//! lifecycle.

/// Commands being recorded for one frame.
pub struct SceneFrame {
    encoder: Option<wgpu::CommandEncoder>,
    surface_texture: Option<wgpu::SurfaceTexture>,
    view: wgpu::TextureView,
}

impl SceneFrame {
    /// Start recording against an acquired surface texture.
    pub fn begin(device: &wgpu::Device, surface_texture: wgpu::SurfaceTexture) -> Self {
        let encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene-frame"),
        });
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            encoder: Some(encoder),
            surface_texture: Some(surface_texture),
            view,
        }
    }

    /// Open the frame's single render pass, clearing the surface first.
    ///
    /// No depth attachment and no multisampling; the scene composites by
    /// draw order alone.
    pub fn clear_pass(&mut self, clear: wgpu::Color) -> wgpu::RenderPass<'_> {
        let encoder = self.encoder.as_mut().expect("frame already presented");
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }

    /// Submit the recorded commands and present the surface texture.
    pub fn present(mut self, queue: &wgpu::Queue) {
        if let (Some(encoder), Some(surface_texture)) =
            (self.encoder.take(), self.surface_texture.take())
        {
            queue.submit([encoder.finish()]);
            surface_texture.present();
        }
    }
}

impl Drop for SceneFrame {
    fn drop(&mut self) {
        if self.encoder.is_some() {
            log::warn!("Frame dropped without present(), discarding its commands");
        }
    }
}
