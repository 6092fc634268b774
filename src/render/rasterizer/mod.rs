//! Triangle rasterization.
//!
//! Coverage is decided per pixel center inside the triangle's clamped
//! bounding box using barycentric weights; a depth test then decides whether
//! the [`PixelShader`] runs for that pixel.
//!
//! - [`barycentric`]: signed-area weights of a point against a triangle
//! - [`fill_triangle`]: the bounding-box fill loop with depth testing

mod barycentric;
mod shader;

pub use barycentric::{barycentric, fill_triangle};
pub use shader::{FlatShader, GouraudShader, PixelShader, TextureShader};
