//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer decides coverage and depth; the shader turns the
//! barycentric weights of a covered pixel into a packed colour.
//!
//! | Shader | Source of colour |
//! |--------|------------------|
//! | [`FlatShader`] | One colour computed per triangle |
//! | [`GouraudShader`] | Per-vertex lit colours, interpolated |
//! | [`TextureShader`] | Texture lookup at interpolated UVs, no lighting |

use crate::colors::{pack_color, WHITE};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// # Barycentric Coordinates
///
/// The `lambda` parameter contains three weights [λ₀, λ₁, λ₂] that:
/// - Sum to 1.0 for any point inside the triangle
/// - Can be used to interpolate any per-vertex attribute:
///   `attr_at_pixel = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`
pub trait PixelShader {
    /// Compute the packed ARGB colour for a pixel.
    fn shade(&self, lambda: [f32; 3]) -> u32;
}

/// Flat shader - returns a constant color for all pixels.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    pub fn new(color: u32) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: [f32; 3]) -> u32 {
        self.color
    }
}

/// Gouraud shader - interpolates vertex colors using barycentric coordinates.
///
/// Colours stay unclamped floats until packing, so vertices brighter than
/// 1.0 still blend before saturating.
pub struct GouraudShader {
    colors: [Vec3; 3],
}

impl GouraudShader {
    pub fn new(colors: [Vec3; 3]) -> Self {
        Self { colors }
    }
}

impl PixelShader for GouraudShader {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> u32 {
        let color = lambda[0] * self.colors[0]
            + lambda[1] * self.colors[1]
            + lambda[2] * self.colors[2];
        pack_color(color)
    }
}

/// Texture shader - samples texture at interpolated UV coordinates.
///
/// The texture colour replaces lighting entirely. Without a loaded texture
/// every pixel is opaque white.
pub struct TextureShader<'a> {
    texture: Option<&'a Texture>,
    uvs: [Vec2; 3],
}

impl<'a> TextureShader<'a> {
    pub fn new(texture: Option<&'a Texture>, uvs: [Vec2; 3]) -> Self {
        Self { texture, uvs }
    }

    /// Affine UV interpolation; no perspective correction.
    #[inline]
    fn interpolate_uv(&self, lambda: [f32; 3]) -> (f32, f32) {
        let u = lambda[0] * self.uvs[0].x + lambda[1] * self.uvs[1].x + lambda[2] * self.uvs[2].x;
        let v = lambda[0] * self.uvs[0].y + lambda[1] * self.uvs[1].y + lambda[2] * self.uvs[2].y;
        (u, v)
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> u32 {
        match self.texture {
            Some(texture) => {
                let (u, v) = self.interpolate_uv(lambda);
                pack_color(texture.sample(u, v))
            }
            None => WHITE,
        }
    }
}
