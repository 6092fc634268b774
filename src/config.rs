use std::path::PathBuf;

use clap::Parser;

use crate::light::PointLight;
use crate::math::vec3::Vec3;
use crate::shading::ShadingMode;

#[derive(Debug, Clone, Parser)]
#[command(name = "boxlight")]
#[command(about = "Software-rasterized viewer for a lit OBJ scene", long_about = None)]
#[command(version)]
pub struct Config {
    /// OBJ mesh; its material library is resolved relative to it
    #[arg(long, default_value = "box/box.obj")]
    pub mesh: PathBuf,

    /// Floor texture image
    #[arg(long, default_value = "box/ground.png")]
    pub texture: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Initial shading mode
    #[arg(long, value_enum, default_value_t = ShadingMode::Gouraud)]
    pub shading: ShadingMode,

    /// Start with hard shadows disabled
    #[arg(long)]
    pub no_shadows: bool,

    /// Point light position as X,Y,Z
    #[arg(long, default_value = "0,6.4,1", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub light: Vec3,

    /// Ambient intensity in [0, 1]
    #[arg(long, default_value_t = 0.2, value_parser = parse_unit)]
    pub ambient: f32,

    /// Target frame rate; 0 renders as fast as possible
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Radians added to the yaw every rendered frame (the demo turntable uses 0.01)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub spin: f32,

    /// Save every rendered frame as frame_NNNNN.png into this directory (the demo recording uses frames)
    #[arg(long)]
    pub capture_dir: Option<PathBuf>,
}

impl Config {
    pub fn point_light(&self) -> PointLight {
        PointLight::new(self.light, self.ambient)
    }
}

/// Parse `X,Y,Z` into a vector.
pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z, got '{}'", s));
    };
    let component = |c: &str| {
        c.parse::<f32>()
            .map_err(|e| format!("invalid component '{}': {}", c, e))
    };
    Ok(Vec3::new(component(x)?, component(y)?, component(z)?))
}

fn parse_unit(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("invalid number '{}': {}", s, e))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside [0, 1]", value))
    }
}
