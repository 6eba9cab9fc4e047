//! Image decoding into RGBA8 pixel buffers.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading a sprite image.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The file could not be read or decoded.
    #[error("unable to load sprite '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded sprite: tightly packed RGBA8 pixels, row-major, top row first.
pub struct SpriteImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl SpriteImage {
    /// Expected byte length of the pixel buffer (4 bytes per texel).
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Loads and decodes an image file, forcing 4-channel RGBA8.
///
/// Any alpha-less source format gains an opaque alpha channel. No mipmaps,
/// no color-space conversion, no atlasing — the caller gets exactly the
/// decoded texels.
pub fn load_sprite(path: &Path) -> Result<SpriteImage, AssetError> {
    let decoded = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (width, height) = decoded.dimensions();
    log::debug!("Decoded sprite '{}' ({width}x{height})", path.display());

    Ok(SpriteImage {
        pixels: decoded.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let mut img = RgbaImage::new(width, height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgba([x as u8, y as u8, 0, 255]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_sprite_returns_rgba8_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path(), "earth.png", 4, 3);

        let sprite = load_sprite(&path).unwrap();
        assert_eq!(sprite.width, 4);
        assert_eq!(sprite.height, 3);
        assert_eq!(sprite.pixels.len(), sprite.byte_len());
    }

    #[test]
    fn test_load_sprite_preserves_texels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path(), "moon.png", 2, 2);

        let sprite = load_sprite(&path).unwrap();
        // Pixel (1, 1) was written as [1, 1, 0, 255].
        let offset = (1 * 2 + 1) * 4;
        assert_eq!(&sprite.pixels[offset..offset + 4], &[1, 1, 0, 255]);
    }

    #[test]
    fn test_missing_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_sprite(&dir.path().join("nonexistent.png"));
        let err = result.err().expect("expected a load error");
        let message = err.to_string();
        assert!(message.contains("nonexistent.png"), "message: {message}");
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_sprite(&path).is_err());
    }
}
