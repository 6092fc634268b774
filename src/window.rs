use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

/// Keys the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    A,
    D,
    Q,
    E,
    Left,
    Right,
    Up,
    Down,
    Num1,
    Num2,
    H,
}

impl Key {
    pub fn from_keycode(keycode: Keycode) -> Option<Self> {
        let key = match keycode {
            Keycode::W => Key::W,
            Keycode::S => Key::S,
            Keycode::A => Key::A,
            Keycode::D => Key::D,
            Keycode::Q => Key::Q,
            Keycode::E => Key::E,
            Keycode::Left => Key::Left,
            Keycode::Right => Key::Right,
            Keycode::Up => Key::Up,
            Keycode::Down => Key::Down,
            Keycode::Num1 => Key::Num1,
            Keycode::Num2 => Key::Num2,
            Keycode::H => Key::H,
            _ => return None,
        };
        Some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    KeyDown(Key),
}

/// Wall-clock frame-rate gate.
///
/// A frame is due once the target interval has passed since the last frame
/// that was let through. Early calls are refused and nothing is queued, so a
/// stall never produces a burst of catch-up frames.
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: Option<Duration>,
    last_frame: Option<Instant>,
}

impl FrameGate {
    /// `fps == 0` disables gating.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64)),
            last_frame: None,
        }
    }

    /// Returns `true` and records `now` if a frame is due.
    pub fn ready(&mut self, now: Instant) -> bool {
        if let (Some(interval), Some(last)) = (self.interval, self.last_frame) {
            if now.saturating_duration_since(last) < interval {
                return false;
            }
        }
        self.last_frame = Some(now);
        true
    }

    /// Time left until the next frame is due, zero if it already is.
    pub fn remaining(&self, now: Instant) -> Duration {
        match (self.interval, self.last_frame) {
            (Some(interval), Some(last)) => {
                interval.saturating_sub(now.saturating_duration_since(last))
            }
            _ => Duration::ZERO,
        }
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // The texture field is declared first, so it is dropped first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            width,
            height,
        })
    }

    /// Drain pending events without blocking. Escape counts as a quit.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => Some(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => Key::from_keycode(keycode).map(WindowEvent::KeyDown),
                _ => None,
            })
            .collect()
    }

    /// Upload an ARGB8888 frame and show it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_viewer_keys() {
        assert_eq!(Key::from_keycode(Keycode::W), Some(Key::W));
        assert_eq!(Key::from_keycode(Keycode::Left), Some(Key::Left));
        assert_eq!(Key::from_keycode(Keycode::Num2), Some(Key::Num2));
        assert_eq!(Key::from_keycode(Keycode::H), Some(Key::H));
        assert_eq!(Key::from_keycode(Keycode::Z), None);
    }

    #[test]
    fn first_frame_is_always_ready() {
        let mut gate = FrameGate::new(30);
        assert!(gate.ready(Instant::now()));
    }

    #[test]
    fn early_frames_are_skipped() {
        let mut gate = FrameGate::new(10);
        let t0 = Instant::now();
        assert!(gate.ready(t0));
        assert!(!gate.ready(t0 + Duration::from_millis(50)));
        assert!(!gate.ready(t0 + Duration::from_millis(99)));
        assert!(gate.ready(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn stalls_do_not_queue_frames() {
        let mut gate = FrameGate::new(10);
        let t0 = Instant::now();
        assert!(gate.ready(t0));
        let late = t0 + Duration::from_secs(5);
        assert!(gate.ready(late));
        assert!(!gate.ready(late + Duration::from_millis(1)));
    }

    #[test]
    fn zero_fps_is_ungated() {
        let mut gate = FrameGate::new(0);
        let t0 = Instant::now();
        assert!(gate.ready(t0));
        assert!(gate.ready(t0));
        assert_eq!(gate.remaining(t0), Duration::ZERO);
    }

    #[test]
    fn remaining_counts_down() {
        let mut gate = FrameGate::new(10);
        let t0 = Instant::now();
        assert_eq!(gate.remaining(t0), Duration::ZERO);
        gate.ready(t0);
        assert_eq!(gate.remaining(t0 + Duration::from_millis(40)), Duration::from_millis(60));
        assert_eq!(gate.remaining(t0 + Duration::from_millis(400)), Duration::ZERO);
    }
}
