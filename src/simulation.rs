//! The frame loop: input, physics, then drawing.
//!
//! Everything runs on one thread. A frame mutates the dice first and only
//! reads them while drawing.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::canvas::Color;
use crate::config::SceneConfig;
use crate::die::{Bounds, Die};
use crate::error::Error;
use crate::input::{DragContext, InputController, InputEvent};
use crate::math::{Vec2, Vec3};
use crate::projection::Projector;
use crate::render;

pub const BACKGROUND: Color = Color::BLACK;
pub const LABEL_COLOR: Color = Color::RED;
/// Label offset left of the die's screen x and up from the bottom edge.
const LABEL_INSET: Vec2 = Vec2::new(20.0, 50.0);

pub trait FrameClock {
    /// Seconds elapsed since the previous tick.
    fn tick(&mut self) -> f32;
}

pub trait EventSource {
    fn poll(&mut self, out: &mut Vec<InputEvent>);
}

pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_label(&mut self, origin: Vec2, text: &str, color: Color);
    fn present(&mut self) -> Result<(), Error>;
}

pub struct Simulation {
    dice: Vec<Die>,
    drag: DragContext,
    controller: InputController,
    projector: Projector,
    bounds: Bounds,
    screen_height: f32,
    rng: StdRng,
    quit: bool,
}

impl Simulation {
    pub fn new(config: &SceneConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dice = config
            .dice
            .iter()
            .map(|&p| Die::new(config.cube_size, Vec3::from(p), &mut rng))
            .collect();
        let projector = Projector::new(
            config.focal_length,
            Vec2::new((config.width / 2) as f32, (config.height / 2) as f32),
        );
        Self::from_parts(dice, projector, config.bounds, config.height as f32, rng)
    }

    pub fn from_parts(
        dice: Vec<Die>,
        projector: Projector,
        bounds: Bounds,
        screen_height: f32,
        rng: StdRng,
    ) -> Self {
        Self {
            dice,
            drag: DragContext::default(),
            controller: InputController::new(projector),
            projector,
            bounds,
            screen_height,
            rng,
            quit: false,
        }
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn drag(&self) -> &DragContext {
        &self.drag
    }

    /// Resolved value per die; `None` until that die has stopped.
    pub fn results(&self) -> Vec<Option<u8>> {
        self.dice
            .iter()
            .map(|die| die.stopped.then(|| die.top_face()))
            .collect()
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn run<B>(&mut self, backend: &mut B) -> Result<(), Error>
    where
        B: FrameClock + EventSource + Surface,
    {
        log::info!("simulating {} dice", self.dice.len());
        let mut events = Vec::new();
        while !self.quit {
            let dt = backend.tick();
            events.clear();
            backend.poll(&mut events);
            self.frame(dt, &events, backend);
            if self.quit {
                break;
            }
            backend.present()?;
        }
        log::info!("quit requested, leaving frame loop");
        Ok(())
    }

    /// One frame without presenting: input, physics, then draw calls.
    pub fn frame<S: Surface + ?Sized>(&mut self, dt: f32, events: &[InputEvent], surface: &mut S) {
        for event in events {
            match *event {
                InputEvent::Quit => self.quit = true,
                InputEvent::Pointer(pointer) => {
                    self.controller
                        .handle(&mut self.drag, pointer, &mut self.dice, dt, &mut self.rng)
                }
            }
        }
        self.controller.drive(&mut self.drag, &mut self.dice);

        for (index, die) in self.dice.iter_mut().enumerate() {
            if die.dragging {
                continue;
            }
            let was_stopped = die.stopped;
            die.update(dt, self.bounds, &mut self.rng);
            if die.stopped && !was_stopped {
                log::info!("die {index} came to rest showing {}", die.top_face());
            }
        }

        surface.clear(BACKGROUND);
        for die in &self.dice {
            render::draw_die(die, &self.projector, surface);
        }
        for die in self.dice.iter().filter(|die| die.stopped) {
            let origin = Vec2::new(
                self.projector.center.x + die.position.x - LABEL_INSET.x,
                self.screen_height - LABEL_INSET.y,
            );
            surface.draw_label(origin, &die.top_face().to_string(), LABEL_COLOR);
        }
    }
}
