use std::thread;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};

use boxlight::camera::OrbitCameraController;
use boxlight::capture::FrameCapture;
use boxlight::config::Config;
use boxlight::window::{FrameGate, Key, Window, WindowEvent};
use boxlight::{load_model, load_texture, Engine, ShadingMode};

fn handle_key(engine: &mut Engine, controller: &OrbitCameraController, key: Key) {
    if controller.handle_key(engine.camera_mut(), key) {
        return;
    }

    match key {
        Key::Num1 => engine.set_shading_mode(ShadingMode::Flat),
        Key::Num2 => engine.set_shading_mode(ShadingMode::Gouraud),
        Key::H => engine.shadows = !engine.shadows,
        _ => return,
    }
    info!(
        "Shading: {}, shadows {}",
        engine.shading_mode(),
        if engine.shadows { "on" } else { "off" }
    );
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    let model = load_model(&config.mesh).map_err(|e| {
        error!("{}", e);
        e.to_string()
    })?;

    let texture = match load_texture(&config.texture) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("{}; floor will be drawn white", e);
            None
        }
    };

    let mut engine = Engine::new(config.width, config.height, model);
    engine.set_texture(texture);
    engine.set_light(config.point_light());
    engine.set_shading_mode(config.shading);
    engine.shadows = !config.no_shadows;
    engine.center_model();

    let mut capture = config
        .capture_dir
        .as_ref()
        .map(FrameCapture::new)
        .transpose()
        .map_err(|e| e.to_string())?;

    let mut window = Window::new("boxlight", config.width, config.height)?;
    let controller = OrbitCameraController::default();
    let mut gate = FrameGate::new(config.fps);

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::KeyDown(key) => handle_key(&mut engine, &controller, key),
            }
        }

        let now = Instant::now();
        if !gate.ready(now) {
            thread::sleep(gate.remaining(now));
            continue;
        }

        if config.spin != 0.0 {
            engine.camera_mut().orbit(config.spin, 0.0);
        }

        engine.render();
        window.present(engine.frame_buffer())?;

        if let Some(capture) = capture.as_mut() {
            if let Err(e) = capture.save(engine.pixels(), engine.width(), engine.height()) {
                error!("Frame capture failed: {}", e);
            }
        }
    }

    info!("Shutting down");
    Ok(())
}
