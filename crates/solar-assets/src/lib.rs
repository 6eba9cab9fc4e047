//! Sprite asset loading for the solar scene.
//!
//! Decodes image files into CPU-side RGBA8 pixel buffers ready for GPU
//! upload. Loading returns an explicit [`AssetError`] instead of aborting;
//! the initialization phase decides whether a missing asset is fatal.

mod loader;

pub use loader::{AssetError, SpriteImage, load_sprite};
