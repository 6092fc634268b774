//! Pixel and depth buffers plus the triangle rasterizer that fills them.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::{FrameBuffer, DEPTH_CLEAR};
pub use rasterizer::{
    barycentric, fill_triangle, FlatShader, GouraudShader, PixelShader, TextureShader,
};
pub use renderer::Renderer;
