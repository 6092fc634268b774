//! Lighting models applied per triangle before rasterization.
//!
//! - **Flat**: one normal and one colour per triangle, lit at the centroid,
//!   with ambient blended as `ambient + (1 - ambient) * diffuse`.
//! - **Gouraud**: one lit colour per vertex from the vertex normals,
//!   `diffuse_color * (ambient + diffuse)`, with the diffuse part dropped
//!   when the triangle is shadowed. The rasterizer interpolates the three
//!   colours.

use crate::light::PointLight;
use crate::math::vec3::Vec3;
use crate::math::{triangle_centroid, triangle_normal};

/// Which lighting model the frame driver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ShadingMode {
    /// One colour per triangle, no shadows, no texturing.
    Flat,
    /// Interpolated per-vertex colours, hard shadows and floor texturing.
    #[default]
    Gouraud,
}

impl std::fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShadingMode::Flat => write!(f, "Flat"),
            ShadingMode::Gouraud => write!(f, "Gouraud"),
        }
    }
}

/// Flat-shaded colour of a triangle (unclamped).
pub fn flat_color(vertices: [Vec3; 3], diffuse_color: Vec3, light: &PointLight) -> Vec3 {
    let [a, b, c] = vertices;
    let normal = triangle_normal(a, b, c);
    let diffuse = light.diffuse(normal, triangle_centroid(a, b, c));
    let intensity = light.ambient + (1.0 - light.ambient) * diffuse;
    diffuse_color * intensity
}

/// Lit colour at each vertex for Gouraud interpolation (unclamped).
///
/// `shadowed` is one decision for the whole triangle.
pub fn gouraud_vertex_colors(
    vertices: [Vec3; 3],
    normals: [Vec3; 3],
    diffuse_color: Vec3,
    light: &PointLight,
    shadowed: bool,
) -> [Vec3; 3] {
    std::array::from_fn(|i| {
        let diffuse = if shadowed {
            0.0
        } else {
            light.diffuse(normals[i], vertices[i])
        };
        diffuse_color * (light.ambient + diffuse)
    })
}
