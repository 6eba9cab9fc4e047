//! Sprite texture upload.
//!
//! Sprites are decoded RGBA8 images sampled with bilinear filtering and a
//! single mip level. [`SpriteBinder`] owns the sampler and bind group
//! layout every sprite shares; [`SpriteBinder::upload`] turns a pixel
//! buffer into a GPU texture with a ready-to-bind [`wgpu::BindGroup`].

/// All sprites are uploaded in this format.
pub const SPRITE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

const BYTES_PER_TEXEL: u32 = 4;

/// Rejected pixel data.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("sprite '{label}' has empty dimensions {width}x{height}")]
    ZeroSize {
        label: String,
        width: u32,
        height: u32,
    },

    #[error(
        "sprite '{label}' carries {actual} bytes of pixel data, \
         expected {expected} for {width}x{height} RGBA8"
    )]
    SizeMismatch {
        label: String,
        actual: usize,
        expected: usize,
        width: u32,
        height: u32,
    },
}

/// A sprite's GPU texture together with its view and bind group.
pub struct SpriteTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

/// Shared sampler and bind group layout for sprite textures (group 1 of
/// the sprite pipeline).
pub struct SpriteBinder {
    sampler: wgpu::Sampler,
    layout: wgpu::BindGroupLayout,
}

impl SpriteBinder {
    pub fn new(device: &wgpu::Device) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite-sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite-texture-layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        Self { sampler, layout }
    }

    /// The texture + sampler bind group layout shared by all sprites.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Upload RGBA8 pixels as a sprite texture.
    ///
    /// One mip level, no atlasing; the scene never minifies its sprites
    /// far enough to alias.
    pub fn upload(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<SpriteTexture, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroSize {
                label: label.to_string(),
                width,
                height,
            });
        }
        let expected = rgba_byte_len(width, height);
        if pixels.len() != expected {
            return Err(TextureError::SizeMismatch {
                label: label.to_string(),
                actual: pixels.len(),
                expected,
                width,
                height,
            });
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SPRITE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * BYTES_PER_TEXEL),
                rows_per_image: None,
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label}-texture-bind-group")),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        log::info!("Uploaded sprite '{label}' ({width}x{height})");
        Ok(SpriteTexture {
            texture,
            view,
            bind_group,
            width,
            height,
        })
    }
}

fn rgba_byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_TEXEL as usize
}
