//! Checker texture synthesis and upload

use crate::backend::traits::*;
use crate::backend::types::*;
use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Errors raised while building texture data on the CPU
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    #[error("Invalid texture parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Texture pixels ready for upload
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub data: Vec<u8>,
    pub name: String,
}

impl TextureData {
    /// Create texture from image
    pub fn from_image(img: RgbaImage, name: &str) -> Self {
        let (width, height) = img.dimensions();

        Self {
            width,
            height,
            format: TextureFormat::Rgba8UnormSrgb,
            data: img.into_raw(),
            name: name.to_string(),
        }
    }

    /// Create a `size` x `size` checkerboard with `tile_count` tiles per side.
    ///
    /// Tile `(tx, ty)` uses `color_a` when `tx + ty` is even and `color_b` otherwise.
    pub fn checkerboard(
        size: u32,
        tile_count: u32,
        color_a: [u8; 4],
        color_b: [u8; 4],
    ) -> Result<Self, TextureError> {
        if size == 0 {
            return Err(TextureError::InvalidParameter {
                name: "size",
                reason: "must be at least 1".to_string(),
            });
        }
        if tile_count == 0 {
            return Err(TextureError::InvalidParameter {
                name: "tile_count",
                reason: "must be at least 1".to_string(),
            });
        }

        let tile_of = |p: u32| (p as u64 * tile_count as u64 / size as u64) as u32;
        let img = RgbaImage::from_fn(size, size, |x, y| {
            if (tile_of(x) + tile_of(y)) % 2 == 0 {
                Rgba(color_a)
            } else {
                Rgba(color_b)
            }
        });

        Ok(Self::from_image(img, "checkerboard"))
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let bpp = self.format.bytes_per_pixel() as usize;
        let offset = (y as usize * self.width as usize + x as usize) * bpp;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.data[offset..offset + 4]);
        pixel
    }
}

/// GPU texture with associated view
pub struct GpuTexture {
    pub handle: TextureHandle,
    pub view: TextureViewHandle,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub name: String,
}

impl GpuTexture {
    /// Create and upload texture to GPU
    pub fn create<B: GraphicsBackend + ?Sized>(
        backend: &mut B,
        data: &TextureData,
    ) -> BackendResult<Self> {
        let handle = backend.create_texture(&TextureDescriptor {
            label: Some(data.name.clone()),
            width: data.width,
            height: data.height,
            format: data.format,
            usage: TextureUsage::TEXTURE_BINDING | TextureUsage::COPY_DST,
        })?;

        let view = match backend.create_texture_view(handle) {
            Ok(view) => view,
            Err(err) => {
                backend.destroy_texture(handle);
                return Err(err);
            }
        };
        backend.write_texture(handle, &data.data, data.width, data.height);

        log::debug!(
            "Uploaded texture '{}' ({}x{})",
            data.name,
            data.width,
            data.height
        );

        Ok(Self {
            handle,
            view,
            width: data.width,
            height: data.height,
            format: data.format,
            name: data.name.clone(),
        })
    }

    /// Release the view and then the texture behind it
    pub fn destroy<B: GraphicsBackend + ?Sized>(self, backend: &mut B) {
        backend.destroy_texture_view(self.view);
        backend.destroy_texture(self.handle);
    }
}
