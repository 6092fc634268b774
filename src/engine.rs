//! Core rendering engine.
//!
//! The [`Engine`] struct is the frame driver. It owns the model, the orbit
//! camera, the light, the optional floor texture and the colour/depth
//! buffers, and turns them into one frame per [`render`](Engine::render)
//! call:
//!
//! 1. Clear the colour buffer to the background and the depth buffer to
//!    [`DEPTH_CLEAR`](crate::render::DEPTH_CLEAR)
//! 2. For every face: project its vertices, compute the shading inputs once,
//!    and rasterize with the matching pixel shader
//!
//! Faces are drawn in model order. Visibility comes from the depth test
//! alone.

use std::time::Instant;

use log::{debug, info};

use crate::camera::OrbitCamera;
use crate::colors::{self, pack_color};
use crate::light::PointLight;
use crate::math::triangle_centroid;
use crate::model::Model;
use crate::projection::Projection;
use crate::render::{fill_triangle, FlatShader, GouraudShader, Renderer, TextureShader};
use crate::shading::{flat_color, gouraud_vertex_colors};
use crate::shadow::is_occluded;
use crate::texture::Texture;

pub use crate::shading::ShadingMode;

pub struct Engine {
    renderer: Renderer,
    model: Model,
    camera: OrbitCamera,
    projection: Projection,
    light: PointLight,
    texture: Option<Texture>,
    shading_mode: ShadingMode,
    /// Hard shadows in Gouraud mode.
    pub shadows: bool,
}

impl Engine {
    pub fn new(width: u32, height: u32, model: Model) -> Self {
        Self {
            renderer: Renderer::new(width, height),
            model,
            camera: OrbitCamera::new(),
            projection: Projection::new(width, height),
            light: PointLight::default(),
            texture: None,
            shading_mode: ShadingMode::default(),
            shadows: true,
        }
    }

    /// Translate the model so its bounding box is centred on the origin and
    /// zoom the camera so it fits the viewport.
    ///
    /// Run once after loading, before the first frame. A model with no
    /// vertices is left alone; a model flat in both x and y keeps the
    /// current scale.
    pub fn center_model(&mut self) {
        let Some(bounds) = self.model.recenter() else {
            return;
        };

        let scale = self.projection.fit_scale(bounds.size());
        if scale.is_finite() && scale > 0.0 {
            self.camera.set_scale(scale);
        }

        let center = bounds.center();
        info!(
            "Model centered: offset ({:.3}, {:.3}, {:.3}), scale {:.3}",
            center.x,
            center.y,
            center.z,
            self.camera.scale()
        );
    }

    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.texture = texture;
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    pub fn set_shading_mode(&mut self, mode: ShadingMode) {
        self.shading_mode = mode;
    }

    pub fn shading_mode(&self) -> ShadingMode {
        self.shading_mode
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.light = light;
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Packed ARGB pixels of the last frame, row-major.
    pub fn pixels(&self) -> &[u32] {
        self.renderer.pixels()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.renderer.get_pixel(x, y)
    }

    /// Render the current frame
    pub fn render(&mut self) {
        let start = Instant::now();

        self.renderer.clear(colors::BACKGROUND);
        self.renderer.clear_depth();

        let mut fb = self.renderer.as_framebuffer();
        let model = &self.model;

        for face in model.faces() {
            let vertices = model.face_vertices(face);
            let points = vertices.map(|v| self.projection.project_with_depth(v, &self.camera));
            let material = model.face_material(face);

            match self.shading_mode {
                ShadingMode::Flat => {
                    let color = flat_color(vertices, material.diffuse, &self.light);
                    fill_triangle(points, &mut fb, &FlatShader::new(pack_color(color)));
                }
                ShadingMode::Gouraud if material.textured => match face.uvs {
                    Some(uvs) => {
                        let shader = TextureShader::new(self.texture.as_ref(), uvs);
                        fill_triangle(points, &mut fb, &shader);
                    }
                    None => fill_triangle(points, &mut fb, &FlatShader::new(colors::WHITE)),
                },
                ShadingMode::Gouraud => {
                    let [a, b, c] = vertices;
                    let shadowed = self.shadows
                        && is_occluded(triangle_centroid(a, b, c), self.light.position, model);
                    let vertex_colors = gouraud_vertex_colors(
                        vertices,
                        model.face_vertex_normals(face),
                        material.diffuse,
                        &self.light,
                        shadowed,
                    );
                    fill_triangle(points, &mut fb, &GouraudShader::new(vertex_colors));
                }
            }
        }

        debug!(
            "Rendered {} faces ({}) in {:?}",
            model.face_count(),
            self.shading_mode,
            start.elapsed()
        );
    }
}
