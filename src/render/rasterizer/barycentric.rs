//! Bounding-box triangle rasterization with barycentric coverage.
//!
//! # Algorithm Overview
//!
//! 1. Compute the integer bounding box of the three screen points and clamp
//!    it to the buffer
//! 2. For every pixel center `(x + 0.5, y + 0.5)` in the box, compute the
//!    barycentric weights `(w0, w1, w2)`
//! 3. The pixel is covered iff all three weights are `>= 0`
//! 4. Interpolate depth with the weights and keep the fragment only if it is
//!    strictly nearer than what the depth buffer holds
//! 5. Ask the shader for the colour
//!
//! # Barycentric Weights
//!
//! For triangle `(a, b, c)` and point `p`:
//!
//! ```text
//! det = (b.y - c.y)(a.x - c.x) + (c.x - b.x)(a.y - c.y)
//! w0  = ((b.y - c.y)(p.x - c.x) + (c.x - b.x)(p.y - c.y)) / det
//! w1  = ((c.y - a.y)(p.x - c.x) + (a.x - c.x)(p.y - c.y)) / det
//! w2  = 1 - w0 - w1
//! ```
//!
//! `det` is twice the signed area, so both windings produce non-negative
//! weights inside the triangle.
//!
//! # Edges and ties
//!
//! The `>= 0` test has no tie-break rule: two triangles sharing an edge may
//! both cover a pixel on it. Whichever is strictly nearer keeps it; at equal
//! depth the first one drawn wins.

use super::shader::PixelShader;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::render::framebuffer::FrameBuffer;

/// Twice the signed area of `(a, b, c)` in the weight formula's orientation.
#[inline]
fn determinant(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y)
}

#[inline]
fn weights(p: Vec2, a: Vec2, b: Vec2, c: Vec2, det: f32) -> [f32; 3] {
    let w0 = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / det;
    let w1 = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / det;
    [w0, w1, 1.0 - w0 - w1]
}

/// Barycentric weights of `p` with respect to triangle `(a, b, c)`.
///
/// The weights sum to 1. For a degenerate (zero-area) triangle they are
/// infinite or NaN, and never all `>= 0`.
pub fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> [f32; 3] {
    weights(p, a, b, c, determinant(a, b, c))
}

/// Fill one triangle into `buffer`.
///
/// `points` are screen-space positions whose `z` holds the model-space depth
/// to interpolate. Zero-area triangles are skipped without touching the
/// buffer.
pub fn fill_triangle<S: PixelShader>(points: [Vec3; 3], buffer: &mut FrameBuffer, shader: &S) {
    let [a, b, c] = points;
    let (a2, b2, c2) = (Vec2::new(a.x, a.y), Vec2::new(b.x, b.y), Vec2::new(c.x, c.y));

    let det = determinant(a2, b2, c2);
    if det == 0.0 || !det.is_finite() {
        return;
    }

    let min_x = (a.x.min(b.x).min(c.x).floor() as i32).max(0);
    let max_x = (a.x.max(b.x).max(c.x).ceil() as i32).min(buffer.width() as i32 - 1);
    let min_y = (a.y.min(b.y).min(c.y).floor() as i32).max(0);
    let max_y = (a.y.max(b.y).max(c.y).ceil() as i32).min(buffer.height() as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let lambda = weights(p, a2, b2, c2, det);

            if lambda[0] >= 0.0 && lambda[1] >= 0.0 && lambda[2] >= 0.0 {
                let depth = lambda[0] * a.z + lambda[1] * b.z + lambda[2] * c.z;
                if buffer.test_and_set_depth(x, y, depth) {
                    buffer.set_pixel(x, y, shader.shade(lambda));
                }
            }
        }
    }
}
