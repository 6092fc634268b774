//! Per-frame PNG capture.
//!
//! Frames are written as `frame_00000.png`, `frame_00001.png`, ... into one
//! directory. The sequence number advances for every frame handed in, so a
//! failed write leaves a gap instead of shifting later frames.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb};
use log::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("capture I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode frame: {0}")]
    Image(#[from] image::ImageError),

    #[error("frame has {actual} pixels, expected {expected}")]
    Size { expected: usize, actual: usize },
}

pub struct FrameCapture {
    dir: PathBuf,
    next_index: u32,
}

impl FrameCapture {
    /// Create the capture directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, CaptureError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!("Capturing frames to {}", dir.display());
        Ok(Self { dir, next_index: 0 })
    }

    /// Path of the `index`-th frame.
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", index))
    }

    /// Index the next saved frame will get.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Save packed ARGB pixels as an RGB PNG. Returns the written path.
    pub fn save(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<PathBuf, CaptureError> {
        let path = self.frame_path(self.next_index);
        self.next_index += 1;

        let expected = (width * height) as usize;
        if pixels.len() != expected {
            return Err(CaptureError::Size {
                expected,
                actual: pixels.len(),
            });
        }

        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
            let color = pixels[(y * width + x) as usize];
            Rgb([
                ((color >> 16) & 0xFF) as u8,
                ((color >> 8) & 0xFF) as u8,
                (color & 0xFF) as u8,
            ])
        });
        img.save(&path)?;

        debug!("Saved {}", path.display());
        Ok(path)
    }
}
