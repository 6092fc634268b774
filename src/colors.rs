//! Packed ARGB8888 colour helpers.
//!
//! Byte layout from most to least significant: alpha, red, green, blue.
//! Every pixel the rasterizer writes carries alpha 0xFF.

use crate::math::vec3::Vec3;

pub const BACKGROUND: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;

/// Convert one `[0, 1]` channel to a byte: clamp, scale by 255, truncate.
#[inline]
fn channel_to_byte(value: f32) -> u32 {
    // `as` saturates and maps NaN to 0.
    (value.clamp(0.0, 1.0) * 255.0) as u32
}

/// Pack an RGB colour into an opaque ARGB8888 value.
#[inline]
pub fn pack_color(color: Vec3) -> u32 {
    0xFF00_0000
        | (channel_to_byte(color.x) << 16)
        | (channel_to_byte(color.y) << 8)
        | channel_to_byte(color.z)
}

/// Unpack the RGB channels of an ARGB8888 value into `[0, 1]`. Alpha is dropped.
#[inline]
pub fn unpack_color(color: u32) -> Vec3 {
    Vec3::new(
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    )
}
