//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A single point light with a uniform ambient term.
///
/// Both values are scene constants: input never changes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Ambient intensity in `[0, 1)`.
    pub ambient: f32,
}

impl Default for PointLight {
    /// A ceiling light above the demonstration box.
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 6.4, 1.0), 0.2)
    }
}

impl PointLight {
    pub fn new(position: Vec3, ambient: f32) -> Self {
        PointLight { position, ambient }
    }

    /// Unit vector from `point` toward the light.
    #[inline]
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }

    /// Lambertian term `max(0, n · l)` for a surface at `point`.
    ///
    /// Returns 0.0 when either vector is degenerate.
    #[inline]
    pub fn diffuse(&self, normal: Vec3, point: Vec3) -> f32 {
        // f32::max discards a NaN operand.
        normal
            .normalize()
            .dot(self.direction_from(point))
            .max(0.0)
    }
}
