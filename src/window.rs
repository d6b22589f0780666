//! minifb front-end: one window that is the clock, the pointer and the surface.

use std::time::{Duration, Instant};

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::canvas::{Canvas, Color};
use crate::config::SceneConfig;
use crate::error::Error;
use crate::input::{InputEvent, PointerEvent};
use crate::math::Vec2;
use crate::simulation::{EventSource, FrameClock, Surface};

/// Longest step handed to the physics, so a stalled window can't tunnel dice.
pub const MAX_FRAME_TIME: f32 = 0.1;

pub struct WindowBackend {
    window: Window,
    canvas: Canvas,
    last_frame: Instant,
    button_down: bool,
    pointer: Option<Vec2>,
}

impl WindowBackend {
    pub fn open(config: &SceneConfig) -> Result<Self, Error> {
        let mut window = Window::new(
            &config.title,
            config.width,
            config.height,
            WindowOptions {
                resize: false,
                scale: minifb::Scale::X1,
                ..WindowOptions::default()
            },
        )?;
        let frame_micros = 1_000_000 / u64::from(config.target_fps.max(1));
        window.limit_update_rate(Some(Duration::from_micros(frame_micros)));
        log::info!(
            "opened {}x{} window, capped at {} fps",
            config.width,
            config.height,
            config.target_fps
        );

        Ok(Self {
            window,
            canvas: Canvas::new(config.width, config.height),
            last_frame: Instant::now(),
            button_down: false,
            pointer: None,
        })
    }
}

impl FrameClock for WindowBackend {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt.min(MAX_FRAME_TIME)
    }
}

impl EventSource for WindowBackend {
    fn poll(&mut self, out: &mut Vec<InputEvent>) {
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            out.push(InputEvent::Quit);
            return;
        }

        let pointer = self
            .window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| Vec2::new(x, y));
        if let Some(p) = pointer {
            if self.pointer != Some(p) {
                out.push(InputEvent::Pointer(PointerEvent::Move(p)));
            }
        }
        if pointer.is_some() {
            self.pointer = pointer;
        }

        let down = self.window.get_mouse_down(MouseButton::Left);
        if down != self.button_down {
            self.button_down = down;
            if let Some(p) = self.pointer {
                let event = if down {
                    PointerEvent::Press(p)
                } else {
                    PointerEvent::Release(p)
                };
                out.push(InputEvent::Pointer(event));
            }
        }
    }
}

impl Surface for WindowBackend {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.canvas.fill_polygon(points, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.canvas.fill_circle(center, radius, color);
    }

    fn draw_label(&mut self, origin: Vec2, text: &str, color: Color) {
        self.canvas.draw_label(origin, text, color);
    }

    fn present(&mut self) -> Result<(), Error> {
        self.window.update_with_buffer(
            self.canvas.color_buffer(),
            self.canvas.width(),
            self.canvas.height(),
        )?;
        Ok(())
    }
}
