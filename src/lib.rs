//! A CPU software rasterizer for a small lit OBJ scene.
//!
//! An orthographic orbit camera projects the model, a barycentric
//! bounding-box rasterizer fills it with a strict depth test, and faces are
//! flat or Gouraud shaded by one point light with hard shadows. The floor
//! material is texture mapped. SDL2 is used only to show the finished
//! frame.
//!
//! # Quick Start
//!
//! ```ignore
//! use boxlight::prelude::*;
//!
//! let model = load_model("box/box.obj")?;
//! let mut engine = Engine::new(640, 480, model);
//! engine.center_model();
//! engine.render();
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod capture;
pub mod colors;
pub mod config;
pub mod engine;
pub mod light;
pub mod loader;
pub mod math;
pub mod model;
pub mod projection;
pub mod shading;
pub mod shadow;
pub mod texture;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use engine::{Engine, ShadingMode};
pub use loader::{load_model, load_texture, LoadError};
pub use model::Model;
pub use projection::Projection;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use boxlight::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{OrbitCamera, OrbitCameraController};

    // Engine
    pub use crate::engine::{Engine, ShadingMode};

    // Scene
    pub use crate::light::PointLight;
    pub use crate::loader::{load_model, load_texture, LoadError};
    pub use crate::model::{Face, Material, Model};
    pub use crate::texture::Texture;

    // Projection
    pub use crate::projection::Projection;

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Window & Input
    pub use crate::capture::FrameCapture;
    pub use crate::config::Config;
    pub use crate::window::{FrameGate, Key, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        barycentric, fill_triangle, FlatShader, FrameBuffer, GouraudShader, PixelShader, TextureShader,
        DEPTH_CLEAR,
    };
    pub use crate::shadow::is_occluded;
}
