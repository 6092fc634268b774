//! Small `f32` vector types and the triangle helpers shared by shading,
//! shadowing and vertex-normal accumulation.

pub mod vec2;
pub mod vec3;

use vec3::Vec3;

/// Unit normal of the triangle `(a, b, c)` by the right-hand rule on
/// `(b - a) × (c - a)`.
///
/// Degenerate triangles produce a NaN vector; callers treat that as
/// "no contribution" rather than an error.
#[inline]
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize()
}

#[inline]
pub fn triangle_centroid(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (a + b + c) / 3.0
}
