//! Orbit camera
//!
//! The camera never moves through the scene. It rotates the model about the
//! world origin and then shifts and scales the orthographic image:
//!
//! - **Yaw** (`orbit_x`): rotation around the Y axis
//! - **Pitch** (`orbit_y`): rotation around the X axis
//! - **Scale**: pixels per world unit, changed multiplicatively by zoom
//! - **Pan** / **Tilt**: screen-space offsets in pixels
//!
//! Angles are not wrapped or clamped.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::window::Key;

/// View parameters owned by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    scale: f32,
    pan: Vec2,
    tilt: f32,
    orbit_x: f32, // yaw, radians
    orbit_y: f32, // pitch, radians
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
            tilt: 0.0,
            orbit_x: 0.0,
            orbit_y: 0.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotates a world-space point into view space: pitch about X is applied
    /// to the vertex first, then yaw about Y.
    #[inline]
    pub fn view_transform(&self, vertex: Vec3) -> Vec3 {
        vertex.rotate_x(self.orbit_y).rotate_y(self.orbit_x)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Multiplies the projection scale by `factor`.
    pub fn zoom(&mut self, factor: f32) {
        self.scale *= factor;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan = self.pan + Vec2::new(dx, dy);
    }

    /// Shifts the image vertically by `delta` pixels (positive = down).
    pub fn tilt_by(&mut self, delta: f32) {
        self.tilt += delta;
    }

    pub fn orbit(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.orbit_x += yaw_delta;
        self.orbit_y += pitch_delta;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn yaw(&self) -> f32 {
        self.orbit_x
    }

    pub fn pitch(&self) -> f32 {
        self.orbit_y
    }
}

// =============================================================================
// Camera Controller
// =============================================================================

/// Fixed key-to-delta table for the orbit camera.
#[derive(Debug, Clone)]
pub struct OrbitCameraController {
    /// Scale multiplier per zoom step.
    pub zoom_factor: f32,
    /// Pixels per pan step.
    pub pan_step: f32,
    /// Pixels per tilt step.
    pub tilt_step: f32,
    /// Radians per orbit step.
    pub orbit_step: f32,
}

impl Default for OrbitCameraController {
    fn default() -> Self {
        Self {
            zoom_factor: 1.1,
            pan_step: 10.0,
            tilt_step: 10.0,
            orbit_step: 0.1,
        }
    }
}

impl OrbitCameraController {
    /// Applies the delta bound to `key`. Returns `false` for keys that are
    /// not camera controls.
    ///
    /// # Input Mapping
    /// - W/S: Zoom in/out
    /// - A/D: Pan left/right
    /// - Q/E: Tilt down/up
    /// - Left/Right: Yaw
    /// - Up/Down: Pitch
    pub fn handle_key(&self, camera: &mut OrbitCamera, key: Key) -> bool {
        match key {
            Key::W => camera.zoom(self.zoom_factor),
            Key::S => camera.zoom(1.0 / self.zoom_factor),
            Key::A => camera.pan_by(-self.pan_step, 0.0),
            Key::D => camera.pan_by(self.pan_step, 0.0),
            Key::Q => camera.tilt_by(self.tilt_step),
            Key::E => camera.tilt_by(-self.tilt_step),
            Key::Left => camera.orbit(-self.orbit_step, 0.0),
            Key::Right => camera.orbit(self.orbit_step, 0.0),
            Key::Up => camera.orbit(0.0, self.orbit_step),
            Key::Down => camera.orbit(0.0, -self.orbit_step),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
