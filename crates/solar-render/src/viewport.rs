//! Viewport size tracking.
//!
//! Keeps the GPU surface dimensions in sync with the window, clamping
//! zero-size windows (common on Wayland before the compositor assigns a
//! size) to 1x1 to prevent wgpu panics.

/// Minimum surface dimension.
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Tracks the physical pixel size of the render surface.
///
/// The viewport always matches the window's inner size; there is no
/// letterboxing or independent render resolution.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale_factor: f64,
}

impl Viewport {
    /// Creates a viewport from initial physical dimensions and scale factor.
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width: width.max(MIN_SURFACE_DIMENSION),
            height: height.max(MIN_SURFACE_DIMENSION),
            scale_factor,
        }
    }

    /// Handle a window resize. Returns the clamped `(width, height)` if the
    /// dimensions actually changed.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        let width = width.max(MIN_SURFACE_DIMENSION);
        let height = height.max(MIN_SURFACE_DIMENSION);

        if width == self.width && height == self.height {
            return None;
        }

        self.width = width;
        self.height = height;
        Some((width, height))
    }

    /// Handle a scale factor change. The physical size changes even when the
    /// logical size stays the same, so this reuses the resize path.
    pub fn handle_scale_factor_changed(
        &mut self,
        new_scale_factor: f64,
        width: u32,
        height: u32,
    ) -> Option<(u32, u32)> {
        self.scale_factor = new_scale_factor;
        self.handle_resize(width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}
