//! Orthographic projection onto the pixel grid.
//!
//! There is no perspective divide and no near/far clipping: a view-space
//! point is scaled by the camera's zoom, flipped so +Y is up, and offset to
//! the viewport center plus the camera's pan and tilt.

use crate::camera::OrbitCamera;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Pixels kept free on each side of the binding axis when fitting a model.
pub const FIT_MARGIN: f32 = 20.0;

/// Viewport dimensions for the orthographic camera.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    width: f32,
    height: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Maps a world-space vertex to a screen coordinate.
    #[inline]
    pub fn project(&self, vertex: Vec3, camera: &OrbitCamera) -> Vec2 {
        let p = self.project_with_depth(vertex, camera);
        Vec2::new(p.x, p.y)
    }

    /// Like [`project`](Self::project) but keeps the vertex's own model z
    /// in the third component, which the depth test compares (larger =
    /// nearer). The orbit rotation does not touch it.
    #[inline]
    pub fn project_with_depth(&self, vertex: Vec3, camera: &OrbitCamera) -> Vec3 {
        let view = camera.view_transform(vertex);
        let pan = camera.pan();
        Vec3::new(
            view.x * camera.scale() + self.width / 2.0 + pan.x,
            -view.y * camera.scale() + self.height / 2.0 + pan.y + camera.tilt(),
            vertex.z,
        )
    }

    /// Uniform scale that fits a model of `size` into the viewport, leaving
    /// [`FIT_MARGIN`] pixels on the binding axis.
    ///
    /// A zero extent on one axis yields an infinite candidate for that axis,
    /// so the other axis binds.
    pub fn fit_scale(&self, size: Vec3) -> f32 {
        let scale_x = (self.width - 2.0 * FIT_MARGIN) / size.x;
        let scale_y = (self.height - 2.0 * FIT_MARGIN) / size.y;
        scale_x.min(scale_y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
