//! Frame-loop tests against scripted input and a recording surface.

use std::collections::VecDeque;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dicebox::canvas::Color;
use dicebox::input::{DragState, InputEvent, PointerEvent};
use dicebox::math::{Orientation, Vec2, Vec3};
use dicebox::projection::Projector;
use dicebox::{Bounds, Die, Error, EventSource, FrameClock, Simulation, Surface};

#[derive(Default)]
struct Recorder {
    clears: usize,
    polygons: usize,
    circles: usize,
    labels: Vec<(Vec2, String)>,
    presents: usize,
}

impl Surface for Recorder {
    fn clear(&mut self, _: Color) {
        self.clears += 1;
        self.polygons = 0;
        self.circles = 0;
        self.labels.clear();
    }
    fn fill_polygon(&mut self, _: &[Vec2], _: Color) {
        self.polygons += 1;
    }
    fn fill_circle(&mut self, _: Vec2, _: f32, _: Color) {
        self.circles += 1;
    }
    fn draw_label(&mut self, origin: Vec2, text: &str, _: Color) {
        self.labels.push((origin, text.to_string()));
    }
    fn present(&mut self) -> Result<(), Error> {
        self.presents += 1;
        Ok(())
    }
}

/// Fixed-step clock and a queue of per-frame event batches.
struct Scripted {
    dt: f32,
    frames: VecDeque<Vec<InputEvent>>,
    surface: Recorder,
}

impl FrameClock for Scripted {
    fn tick(&mut self) -> f32 {
        self.dt
    }
}

impl EventSource for Scripted {
    fn poll(&mut self, out: &mut Vec<InputEvent>) {
        out.extend(self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]));
    }
}

impl Surface for Scripted {
    fn clear(&mut self, color: Color) {
        self.surface.clear(color)
    }
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.surface.fill_polygon(points, color)
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.surface.fill_circle(center, radius, color)
    }
    fn draw_label(&mut self, origin: Vec2, text: &str, color: Color) {
        self.surface.draw_label(origin, text, color)
    }
    fn present(&mut self) -> Result<(), Error> {
        self.surface.present()
    }
}

fn upright(x: f32, y: f32) -> Die {
    Die::with_orientation(50.0, Vec3::new(x, y, 0.0), Orientation::IDENTITY)
}

fn scene(dice: Vec<Die>) -> Simulation {
    Simulation::from_parts(
        dice,
        Projector::new(400.0, Vec2::new(400.0, 300.0)),
        Bounds::new(300.0, 300.0),
        600.0,
        StdRng::seed_from_u64(42),
    )
}

fn press(x: f32, y: f32) -> InputEvent {
    InputEvent::Pointer(PointerEvent::Press(Vec2::new(x, y)))
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::Pointer(PointerEvent::Move(Vec2::new(x, y)))
}

fn release(x: f32, y: f32) -> InputEvent {
    InputEvent::Pointer(PointerEvent::Release(Vec2::new(x, y)))
}

#[test]
fn empty_scene_only_clears() {
    let mut sim = scene(Vec::new());
    let mut surface = Recorder::default();
    sim.frame(0.016, &[press(400.0, 300.0), release(410.0, 300.0)], &mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.polygons, 0);
    assert!(surface.labels.is_empty());
    assert!(sim.results().is_empty());
    assert_eq!(sim.drag().state, DragState::Free);
}

#[test]
fn pick_drag_and_throw() {
    let mut sim = scene(vec![upright(-100.0, 50.0), upright(100.0, 50.0)]);
    let mut surface = Recorder::default();

    sim.frame(0.1, &[press(500.0, 250.0)], &mut surface);
    assert_eq!(sim.drag().state, DragState::Dragging { die: 1 });
    assert_eq!(sim.dice()[1].position, Vec3::new(100.0, 150.0, -50.0));

    sim.frame(0.1, &[moved(600.0, 250.0)], &mut surface);
    assert_eq!(sim.dice()[1].position, Vec3::new(200.0, 150.0, -50.0));

    sim.frame(0.1, &[moved(700.0, 250.0), release(700.0, 250.0)], &mut surface);
    let die = &sim.dice()[1];
    assert_eq!(sim.drag().state, DragState::Free);
    assert!(!die.dragging);
    // Thrown at 10 units/s sideways, then one physics step in the same frame.
    assert_relative_eq!(die.velocity.x, 10.0, epsilon = 1e-3);
    assert_relative_eq!(die.velocity.y, 20.0 - 98.1 * 0.1, epsilon = 1e-3);
    assert!(die.position.y > 150.0);
}

#[test]
fn overlapping_dice_resolve_to_the_later_one() {
    let mut sim = scene(vec![upright(0.0, 50.0), upright(20.0, 50.0)]);
    let mut surface = Recorder::default();
    sim.frame(0.016, &[press(410.0, 250.0)], &mut surface);
    assert_eq!(sim.drag().state, DragState::Dragging { die: 1 });
    assert!(!sim.dice()[0].dragging);
}

#[test]
fn dragged_die_ignores_physics() {
    let mut sim = scene(vec![upright(100.0, 50.0)]);
    let mut surface = Recorder::default();
    sim.frame(0.016, &[press(500.0, 250.0)], &mut surface);
    for _ in 0..30 {
        sim.frame(0.016, &[], &mut surface);
    }
    let die = &sim.dice()[0];
    assert_eq!(die.position.y, 150.0);
    assert_eq!(die.velocity, Vec3::ZERO);
}

#[test]
fn resting_die_is_labelled_with_its_top_face() {
    let mut sim = scene(vec![upright(60.0, 50.0)]);
    let mut surface = Recorder::default();
    sim.frame(1.0 / 60.0, &[], &mut surface);

    assert_eq!(sim.results(), vec![Some(1)]);
    assert_eq!(surface.labels, vec![(Vec2::new(440.0, 550.0), "1".to_string())]);
}

#[test]
fn falling_die_is_not_labelled() {
    let mut sim = scene(vec![upright(0.0, 400.0)]);
    let mut surface = Recorder::default();
    sim.frame(1.0 / 60.0, &[], &mut surface);
    assert_eq!(sim.results(), vec![None]);
    assert!(surface.labels.is_empty());
    assert_eq!(surface.polygons, 1);
}

#[test]
fn release_without_press_changes_nothing() {
    let mut sim = scene(vec![upright(0.0, 50.0)]);
    let mut surface = Recorder::default();
    sim.frame(0.016, &[release(400.0, 250.0)], &mut surface);
    assert_eq!(sim.drag().state, DragState::Free);
    assert!(!sim.dice()[0].dragging);
    assert_eq!(sim.dice()[0].position, Vec3::new(0.0, 50.0, 0.0));
}

#[test]
fn run_presents_each_frame_until_quit() {
    let mut sim = scene(vec![upright(0.0, 50.0)]);
    let mut backend = Scripted {
        dt: 1.0 / 60.0,
        frames: VecDeque::from(vec![vec![], vec![moved(10.0, 10.0)], vec![]]),
        surface: Recorder::default(),
    };
    sim.run(&mut backend).unwrap();
    assert!(sim.is_quit());
    assert_eq!(backend.surface.presents, 3);
    assert_eq!(backend.surface.clears, 4);
}
