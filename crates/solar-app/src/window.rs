//! Window creation and event handling via winit.
//!
//! Provides [`App`] which implements winit's [`ApplicationHandler`] trait,
//! and a [`run`] function to start the event loop.

use std::sync::Arc;

use solar_assets::{AssetError, load_sprite};
use solar_config::Config;
use solar_render::{
    FrameAcquireError, GpuContext, GpuInitError, MeshBuffer, ModelUniform, SPRITE_SHADER_SOURCE,
    SceneCamera, SceneFrame, ShaderError, SpriteBinder, SpritePipeline, SpriteTexture,
    TextureError, Viewport, compile_shader, draw_sprite, unit_quad_mesh,
};
use solar_scene::{
    AppPhase, Body, SceneState, VIEW_FAR, VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH, VIEW_NEAR,
};
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::frame_clock::FrameClock;

/// Errors that abort startup before the first frame.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("GPU initialization failed: {0}")]
    Gpu(#[from] GpuInitError),

    #[error("shader compilation failed: {0}")]
    Shader(#[from] ShaderError),

    #[error("sprite loading failed: {0}")]
    Asset(#[from] AssetError),

    #[error("texture upload failed: {0}")]
    Texture(#[from] TextureError),
}

/// Errors surfaced by [`run`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("startup failed: {0}")]
    Startup(#[from] InitError),
}

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Center a window on whichever monitor it opened on.
///
/// Best-effort: some platforms (Wayland) expose no monitor handle and
/// position the window themselves.
fn center_on_monitor(window: &Window) {
    if let Some(monitor) = window.current_monitor() {
        let monitor_size = monitor.size();
        let monitor_pos = monitor.position();
        let window_size = window.outer_size();
        let x = monitor_pos.x + (monitor_size.width.saturating_sub(window_size.width) / 2) as i32;
        let y = monitor_pos.y + (monitor_size.height.saturating_sub(window_size.height) / 2) as i32;
        window.set_outer_position(winit::dpi::PhysicalPosition::new(x, y));
    }
}

/// GPU resources for one sprite: its texture and model uniform.
struct SpriteResources {
    texture: SpriteTexture,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

/// All GPU resources needed to draw the scene each frame.
struct SceneRenderer {
    pipeline: SpritePipeline,
    quad: MeshBuffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    earth: SpriteResources,
    moon: SpriteResources,
}

impl SceneRenderer {
    fn sprite_resources(&self, body: Body) -> &SpriteResources {
        match body {
            Body::Earth => &self.earth,
            Body::Moon => &self.moon,
        }
    }
}

/// Application state that manages the window, GPU context, and scene.
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
    viewport: Viewport,
    clock: FrameClock,
    scene: SceneState,
    phase: AppPhase,
    config: Config,
    startup_error: Option<InitError>,
}

impl App {
    /// Creates a new `App` from a [`Config`]. GPU resources are created
    /// lazily in `resumed`, once a window exists.
    pub fn with_config(config: Config) -> Self {
        Self {
            window: None,
            gpu: None,
            renderer: None,
            viewport: Viewport::new(config.window.width, config.window.height, 1.0),
            clock: FrameClock::new(),
            scene: SceneState::new(),
            phase: AppPhase::default(),
            config,
            startup_error: None,
        }
    }

    /// Record a fatal startup error. The stored error is what [`run`]
    /// returns once the event loop unwinds, so the process exits non-zero.
    fn record_startup_failure(&mut self, err: InitError) {
        error!("Startup failed: {err}");
        self.startup_error = Some(err);
        self.phase.request_shutdown();
    }

    /// Whether the event loop should stop running.
    fn should_exit(&self) -> bool {
        !self.phase.is_running()
    }

    /// The clear color from configuration.
    fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.config.background.red,
            g: self.config.background.green,
            b: self.config.background.blue,
            a: self.config.background.alpha,
        }
    }

    /// Create the window and every GPU resource the scene needs.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let attrs = window_attributes_from_config(&self.config);
        let window = Arc::new(event_loop.create_window(attrs)?);
        center_on_monitor(&window);

        let scale_factor = window.scale_factor();
        let inner_size = window.inner_size();
        self.viewport = Viewport::new(inner_size.width, inner_size.height, scale_factor);
        info!(
            "Window created: {}x{} (scale: {:.2})",
            inner_size.width, inner_size.height, scale_factor
        );

        let gpu = GpuContext::new_blocking(window.clone(), self.config.window.vsync)?;
        self.initialize_rendering(&gpu)?;
        self.gpu = Some(gpu);

        // The first measured delta should not include init time.
        self.clock = FrameClock::new();
        self.window = Some(window);
        Ok(())
    }

    /// Build the sprite pipeline, quad mesh, camera uniform, and both
    /// sprite textures.
    fn initialize_rendering(&mut self, gpu: &GpuContext) -> Result<(), InitError> {
        use wgpu::util::DeviceExt;

        let shader = compile_shader(&gpu.device, "sprite", SPRITE_SHADER_SOURCE)?;
        let binder = SpriteBinder::new(&gpu.device);
        let pipeline =
            SpritePipeline::new(&gpu.device, &shader, gpu.surface_format, binder.layout());

        let quad = unit_quad_mesh(&gpu.device);

        let camera = SceneCamera::new(VIEW_HALF_WIDTH, VIEW_HALF_HEIGHT, VIEW_NEAR, VIEW_FAR);
        let camera_uniform = camera.to_uniform();
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("camera-uniform"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let earth = self.create_sprite_resources(
            gpu,
            &binder,
            &pipeline,
            "earth",
            &self.config.assets.earth_sprite,
        )?;
        let moon = self.create_sprite_resources(
            gpu,
            &binder,
            &pipeline,
            "moon",
            &self.config.assets.moon_sprite,
        )?;

        self.renderer = Some(SceneRenderer {
            pipeline,
            quad,
            camera_buffer,
            camera_bind_group,
            earth,
            moon,
        });

        info!("Rendering initialized: sprite pipeline, unit quad, two textures");
        Ok(())
    }

    /// Load one sprite from disk, upload it, and build its model uniform.
    fn create_sprite_resources(
        &self,
        gpu: &GpuContext,
        binder: &SpriteBinder,
        pipeline: &SpritePipeline,
        name: &str,
        path: &std::path::Path,
    ) -> Result<SpriteResources, InitError> {
        use wgpu::util::DeviceExt;

        let image = load_sprite(path)?;
        let texture = binder.upload(
            &gpu.device,
            &gpu.queue,
            name,
            &image.pixels,
            image.width,
            image.height,
        )?;

        let model_uniform = ModelUniform {
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
        };
        let model_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{name}-model-uniform")),
                contents: bytemuck::cast_slice(&[model_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let model_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{name}-model-bind-group")),
            layout: &pipeline.model_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        Ok(SpriteResources {
            texture,
            model_buffer,
            model_bind_group,
        })
    }

    /// Advance the scene and draw one frame.
    fn redraw(&mut self) {
        let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) else {
            return;
        };

        let dt = self.clock.tick();
        self.scene.advance(dt);

        // Upload fresh model matrices before encoding the pass.
        let draws = self.scene.draw_list();
        for draw in &draws {
            let uniform = ModelUniform {
                model: draw.model.to_cols_array_2d(),
            };
            gpu.queue.write_buffer(
                &renderer.sprite_resources(draw.body).model_buffer,
                0,
                bytemuck::cast_slice(&[uniform]),
            );
        }

        let surface_texture = match gpu.acquire_frame() {
            Ok(texture) => texture,
            Err(FrameAcquireError::Timeout) => {
                warn!("Surface timeout, skipping frame");
                return;
            }
            Err(e) => {
                error!("Failed to acquire surface: {e}");
                self.phase.request_shutdown();
                return;
            }
        };

        let mut frame = SceneFrame::begin(&gpu.device, surface_texture);
        {
            let mut pass = frame.clear_pass(self.clear_color());
            // Back-to-front: the moon first, then the earth over it.
            for draw in &draws {
                let sprite = renderer.sprite_resources(draw.body);
                draw_sprite(
                    &mut pass,
                    &renderer.pipeline,
                    &renderer.camera_bind_group,
                    &sprite.texture.bind_group,
                    &sprite.model_bind_group,
                    &renderer.quad,
                );
            }
        }
        frame.present(&gpu.queue);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.start(event_loop) {
            self.record_startup_failure(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if self.phase.request_shutdown() {
                    info!("Close requested, shutting down");
                }
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some((w, h)) = self.viewport.handle_resize(new_size.width, new_size.height)
                {
                    if let Some(gpu) = &mut self.gpu {
                        gpu.resize(w, h);
                    }
                    info!("Window resized to {}x{}", w, h);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let new_inner = window.inner_size();
                    if let Some((w, h)) = self.viewport.handle_scale_factor_changed(
                        scale_factor,
                        new_inner.width,
                        new_inner.height,
                    ) {
                        if let Some(gpu) = &mut self.gpu {
                            gpu.resize(w, h);
                        }
                        info!(
                            "Scale factor changed to {:.2}, resized to {}x{}",
                            scale_factor, w, h
                        );
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if !self.phase.is_running() {
                    return;
                }
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Shutdown may have been requested outside a window event (for
        // example an unrecoverable surface loss during redraw); make sure
        // the loop actually stops.
        if self.should_exit() {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the application event loop until the window closes.
///
/// A startup failure recorded by the handler is returned as
/// [`RunError::Startup`] so the caller can exit non-zero.
pub fn run(config: Config) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::with_config(config);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.startup_error.take() {
        return Err(RunError::Startup(err));
    }

    info!("Event loop exited after {} frames", app.clock.frame_count());
    Ok(())
}
