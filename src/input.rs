//! Pointer-driven pick up, drag and throw of a single die.

use rand::Rng;

use crate::die::Die;
use crate::math::{Vec2, Vec3};
use crate::projection::Projector;

/// Height above the floor at which a held die floats.
pub const DRAG_LIFT: f32 = 100.0;
/// Radians of tumble per pixel of pointer travel while held.
pub const DRAG_TUMBLE: f32 = 0.01;
/// Pointer speed (px/s) to world speed on release.
pub const THROW_SCALE: f32 = 0.01;
pub const THROW_LIFT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Vec2),
    Move(Vec2),
    Release(Vec2),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Quit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Free,
    Dragging {
        die: usize,
    },
}

/// The scene's single active drag, owned by the simulation loop.
#[derive(Clone, Debug, Default)]
pub struct DragContext {
    pub state: DragState,
    /// Latest known pointer position.
    pub pointer: Option<Vec2>,
    /// Pointer position at the previous drag sample.
    pub last_sample: Option<Vec2>,
}

impl DragContext {
    pub fn active(&self) -> Option<usize> {
        match self.state {
            DragState::Free => None,
            DragState::Dragging { die } => Some(die),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InputController {
    projector: Projector,
}

impl InputController {
    pub fn new(projector: Projector) -> Self {
        Self { projector }
    }

    /// Index of the front-most die under `point`. Later dice draw over
    /// earlier ones, so they are tested first.
    pub fn pick(&self, dice: &[Die], point: Vec2) -> Option<usize> {
        dice.iter()
            .enumerate()
            .rev()
            .find(|(_, die)| self.projector.bounds(die.world_vertices()).contains(point))
            .map(|(index, _)| index)
    }

    pub fn handle(
        &self,
        ctx: &mut DragContext,
        event: PointerEvent,
        dice: &mut [Die],
        dt: f32,
        rng: &mut impl Rng,
    ) {
        match (event, ctx.state) {
            (PointerEvent::Move(p), _) => ctx.pointer = Some(p),
            (PointerEvent::Press(p), DragState::Free) => {
                ctx.pointer = Some(p);
                let Some(index) = self.pick(dice, p) else {
                    log::trace!("press at ({:.0}, {:.0}) hit no die", p.x, p.y);
                    return;
                };
                dice[index].begin_drag();
                ctx.state = DragState::Dragging { die: index };
                ctx.last_sample = Some(p);
                log::debug!("picked up die {index}");
            }
            (PointerEvent::Press(p), DragState::Dragging { .. }) => ctx.pointer = Some(p),
            (PointerEvent::Release(p), DragState::Dragging { die }) => {
                ctx.pointer = Some(p);
                let delta = ctx.last_sample.map_or(Vec2::ZERO, |prev| p - prev);
                let velocity = throw_velocity(delta, dt);
                if let Some(held) = dice.get_mut(die) {
                    held.release(velocity, rng);
                }
                ctx.state = DragState::Free;
                ctx.last_sample = None;
                log::debug!(
                    "threw die {die} at ({:.1}, {:.1}, {:.1})",
                    velocity.x,
                    velocity.y,
                    velocity.z
                );
            }
            (PointerEvent::Release(p), DragState::Free) => ctx.pointer = Some(p),
        }
    }

    /// Moves the held die to follow the pointer and tumbles it by the
    /// pointer travel since the last sample.
    pub fn drive(&self, ctx: &mut DragContext, dice: &mut [Die]) {
        let (Some(index), Some(pointer)) = (ctx.active(), ctx.pointer) else {
            return;
        };
        let Some(die) = dice.get_mut(index) else {
            return;
        };
        die.position = Vec3::new(
            pointer.x - self.projector.center.x,
            die.cube_size() + DRAG_LIFT,
            pointer.y - self.projector.center.y,
        );
        let delta = ctx.last_sample.map_or(Vec2::ZERO, |prev| pointer - prev);
        die.orientation.rx += delta.x * DRAG_TUMBLE;
        die.orientation.ry += delta.y * DRAG_TUMBLE;
        ctx.last_sample = Some(pointer);
    }
}

/// Finite-difference throw: pointer x/y feed world x/z, plus a fixed lift.
pub fn throw_velocity(delta: Vec2, dt: f32) -> Vec3 {
    let rate = if dt > 0.0 { delta / dt } else { Vec2::ZERO };
    Vec3::new(rate.x * THROW_SCALE, THROW_LIFT, rate.y * THROW_SCALE)
}
