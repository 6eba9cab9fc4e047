//! GPU bring-up and surface management.
//!
//! [`GpuContext`] holds the device, queue, and configured window surface
//! for the lifetime of the process; nothing else in the workspace talks to
//! wgpu's instance layer.

use std::sync::Arc;

use winit::window::Window;

/// Startup could not reach a working device + surface pair.
#[derive(Debug, thiserror::Error)]
pub enum GpuInitError {
    #[error("no GPU adapter accepted the window surface")]
    NoAdapter,

    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
}

/// Why a frame could not be acquired from the surface.
#[derive(Debug, thiserror::Error)]
pub enum FrameAcquireError {
    #[error("surface lost and could not be restored")]
    Lost,

    #[error("out of GPU memory")]
    OutOfMemory,

    #[error("frame acquisition timed out")]
    Timeout,
}

/// Device, queue, and the configured window surface.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub surface_format: wgpu::TextureFormat,
}

impl GpuContext {
    /// Bring up the GPU for a window.
    ///
    /// `vsync` pins presentation to Fifo; otherwise the lowest-latency
    /// mode the surface offers is used.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, GpuInitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let size = window.inner_size();
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| GpuInitError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("GPU: {} [{:?}]", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("solar-device"),
                ..Default::default()
            })
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let surface_format = choose_surface_format(&caps.formats);
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: choose_present_mode(&caps.present_modes, vsync),
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            surface_format,
        })
    }

    /// [`GpuContext::new`] driven to completion on the calling thread.
    pub fn new_blocking(window: Arc<Window>, vsync: bool) -> Result<Self, GpuInitError> {
        pollster::block_on(Self::new(window, vsync))
    }

    /// Reconfigure the surface after a window resize.
    ///
    /// Dimensions are clamped to at least 1x1; a minimized window must not
    /// produce a zero-sized surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Acquire the next surface texture, reconfiguring once if the surface
    /// went stale (resize races, display changes).
    pub fn acquire_frame(&self) -> Result<wgpu::SurfaceTexture, FrameAcquireError> {
        use wgpu::SurfaceError;

        match self.surface.get_current_texture() {
            Ok(frame) => Ok(frame),
            Err(SurfaceError::Timeout) => Err(FrameAcquireError::Timeout),
            Err(SurfaceError::OutOfMemory) => Err(FrameAcquireError::OutOfMemory),
            Err(SurfaceError::Lost | SurfaceError::Outdated | SurfaceError::Other) => {
                log::warn!("Surface unusable, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                self.surface
                    .get_current_texture()
                    .map_err(|_| FrameAcquireError::Lost)
            }
        }
    }
}

/// Prefer an sRGB swapchain format so sprite colors land in the space the
/// textures were authored in.
fn choose_surface_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|format| format.is_srgb())
        .unwrap_or(formats[0])
}

fn choose_present_mode(available: &[wgpu::PresentMode], vsync: bool) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    // Unthrottled modes first; Fifo is the universal fallback.
    [wgpu::PresentMode::Mailbox, wgpu::PresentMode::Immediate]
        .into_iter()
        .find(|mode| available.contains(mode))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_format_prefers_srgb() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats),
            wgpu::TextureFormat::Bgra8UnormSrgb
        );
    }

    #[test]
    fn surface_format_falls_back_to_first_offered() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Rgba8Unorm,
        ];
        assert_eq!(
            choose_surface_format(&formats),
            wgpu::TextureFormat::Bgra8Unorm
        );
    }

    #[test]
    fn vsync_always_means_fifo() {
        let modes = [wgpu::PresentMode::Fifo, wgpu::PresentMode::Mailbox];
        assert_eq!(choose_present_mode(&modes, true), wgpu::PresentMode::Fifo);
    }

    #[test]
    fn no_vsync_prefers_mailbox() {
        let modes = [wgpu::PresentMode::Fifo, wgpu::PresentMode::Mailbox];
        assert_eq!(
            choose_present_mode(&modes, false),
            wgpu::PresentMode::Mailbox
        );
    }

    #[test]
    fn no_vsync_takes_immediate_when_mailbox_is_missing() {
        let modes = [wgpu::PresentMode::Fifo, wgpu::PresentMode::Immediate];
        assert_eq!(
            choose_present_mode(&modes, false),
            wgpu::PresentMode::Immediate
        );
    }

    #[test]
    fn no_vsync_still_falls_back_to_fifo() {
        let modes = [wgpu::PresentMode::Fifo];
        assert_eq!(choose_present_mode(&modes, false), wgpu::PresentMode::Fifo);
    }
}
