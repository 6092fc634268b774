use std::path::Path;

use crate::colors::unpack_color;
use crate::math::vec3::Vec3;

/// Represents a 2D texture for texture mapping.
#[derive(Debug)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format, row 0 at the top.
    width: u32,     // The width of the texture in pixels.
    height: u32,    // The height of the texture in pixels.
}

impl Texture {
    // Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap already-decoded ARGB pixels.
    ///
    /// Returns `None` when the dimensions are zero or don't match `data`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Option<Self> {
        if width == 0 || height == 0 || data.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering.
    ///
    /// # UV Coordinate Convention
    /// - UVs are clamped to [0,1] (no wrapping)
    /// - (0,0) = bottom-left, but image row 0 is the top, so V is flipped
    /// - Texel index is `floor(u * (width - 1))`, `floor((1 - v) * (height - 1))`
    ///
    /// Returns the texel's RGB normalized to [0,1].
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        // NaN UVs clamp to NaN and then cast to texel 0.
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let x = (u * (self.width - 1) as f32) as u32;
        let y = ((1.0 - v) * (self.height - 1) as f32) as u32;

        unpack_color(self.data[(y * self.width + x) as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
}
