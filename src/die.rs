//! The die entity: cube geometry, pip layout and the per-frame physics step.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::{Orientation, Vec3};

/// Exaggerated gravity, tuned for snappy motion rather than SI units.
pub const GRAVITY: f32 = 98.1;
pub const FLOOR_RESTITUTION: f32 = 0.7;
pub const FLOOR_IMPACT_DAMPING: f32 = 0.95;
pub const FLOOR_FRICTION: f32 = 0.98;
pub const WALL_RESTITUTION: f32 = 0.8;
pub const REST_SPEED: f32 = 0.1;
/// Floor contacts whose downward speed before this step's gravity is at or
/// below this settle instead of bouncing.
pub const REST_CONTACT_SPEED: f32 = 5.0;
pub const SPIN_RANGE: f32 = 10.0;

const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Corner indices per face: front z-, right x+, back z+, left x-, top y+, bottom y-.
pub const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [1, 5, 6, 2],
    [5, 4, 7, 6],
    [4, 0, 3, 7],
    [3, 2, 6, 7],
    [4, 5, 1, 0],
];

pub const FACE_NUMBERS: [u8; 6] = [2, 4, 5, 3, 1, 6];

pub const FACE_NORMALS: [Vec3; 6] = [
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
];

/// Face index of the top (+Y) face in local space.
pub const TOP_FACE: usize = 4;

/// Pip UV coordinates for values 1 through 6.
pub static PIP_LAYOUTS: [&[(f32, f32)]; 6] = [
    &[(0.5, 0.5)],
    &[(0.25, 0.25), (0.75, 0.75)],
    &[(0.25, 0.25), (0.5, 0.5), (0.75, 0.75)],
    &[(0.25, 0.25), (0.25, 0.75), (0.75, 0.25), (0.75, 0.75)],
    &[(0.25, 0.25), (0.25, 0.75), (0.5, 0.5), (0.75, 0.25), (0.75, 0.75)],
    &[
        (0.25, 0.25),
        (0.25, 0.5),
        (0.25, 0.75),
        (0.75, 0.25),
        (0.75, 0.5),
        (0.75, 0.75),
    ],
];

/// Half-widths of the play area on the horizontal axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub z: f32,
}

impl Bounds {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(300.0, 300.0)
    }
}

#[derive(Clone, Debug)]
pub struct Die {
    cube_size: f32,
    vertices: [Vec3; 8],
    pub position: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub orientation: Orientation,
    pub dragging: bool,
    pub stopped: bool,
}

impl Die {
    /// A die at rest in velocity with a uniformly random orientation.
    pub fn new(cube_size: f32, position: Vec3, rng: &mut impl Rng) -> Self {
        let orientation = Orientation::new(
            rng.gen_range(0.0..TAU),
            rng.gen_range(0.0..TAU),
            rng.gen_range(0.0..TAU),
        );
        Self::with_orientation(cube_size, position, orientation)
    }

    pub fn with_orientation(cube_size: f32, position: Vec3, orientation: Orientation) -> Self {
        let vertices = CORNERS.map(|c| Vec3::from(c) * cube_size);
        Self {
            cube_size,
            vertices,
            position,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            orientation,
            dragging: false,
            stopped: false,
        }
    }

    pub fn cube_size(&self) -> f32 {
        self.cube_size
    }

    pub fn vertices(&self) -> &[Vec3; 8] {
        &self.vertices
    }

    /// Local point to world space: rotate, then translate.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.orientation.apply(local) + self.position
    }

    pub fn world_vertices(&self) -> [Vec3; 8] {
        self.vertices.map(|v| self.to_world(v))
    }

    pub fn rotated_normal(&self, local_normal: Vec3) -> Vec3 {
        self.orientation.apply(local_normal)
    }

    /// Local-space pip centres on `face`.
    ///
    /// Each UV is a bilinear combination of the face's two edges leaving its
    /// first corner.
    pub fn local_pips(&self, face: usize) -> impl Iterator<Item = Vec3> + '_ {
        let [a, b, _, d] = FACES[face];
        let origin = self.vertices[a];
        let u_edge = self.vertices[b] - origin;
        let v_edge = self.vertices[d] - origin;
        let value = FACE_NUMBERS[face] as usize;
        PIP_LAYOUTS[value - 1]
            .iter()
            .map(move |&(u, v)| origin + u_edge * u + v_edge * v)
    }

    pub fn world_pips(&self, face: usize) -> impl Iterator<Item = Vec3> + '_ {
        self.local_pips(face).map(|p| self.to_world(p))
    }

    /// Pip value of the face pointing most nearly up. Only meaningful once
    /// the die has stopped.
    pub fn top_face(&self) -> u8 {
        let mut best = f32::NEG_INFINITY;
        let mut value = FACE_NUMBERS[TOP_FACE];
        for (normal, &number) in FACE_NORMALS.iter().zip(FACE_NUMBERS.iter()) {
            let up = self.rotated_normal(*normal).y;
            if up > best {
                best = up;
                value = number;
            }
        }
        value
    }

    /// Exact comparison; the floor clamp writes `cube_size` verbatim.
    pub fn is_on_floor(&self) -> bool {
        self.position.y == self.cube_size
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.stopped = false;
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }

    pub fn release(&mut self, velocity: Vec3, rng: &mut impl Rng) {
        self.dragging = false;
        self.velocity = velocity;
        self.angular_velocity = random_spin(rng);
    }

    pub fn update(&mut self, dt: f32, bounds: Bounds, rng: &mut impl Rng) {
        if self.dragging {
            return;
        }

        self.velocity.y -= GRAVITY * dt;
        self.position += self.velocity * dt;
        self.orientation.integrate(self.angular_velocity * dt);

        if self.position.y <= self.cube_size {
            self.position.y = self.cube_size;
            if -self.velocity.y <= GRAVITY * dt + REST_CONTACT_SPEED {
                self.velocity.y = 0.0;
            } else {
                self.velocity.y = -self.velocity.y * FLOOR_RESTITUTION;
                self.velocity.x *= FLOOR_IMPACT_DAMPING;
                self.velocity.z *= FLOOR_IMPACT_DAMPING;
                self.angular_velocity = random_spin(rng);
            }
        }

        if self.is_on_floor() {
            self.velocity.x *= FLOOR_FRICTION;
            self.velocity.z *= FLOOR_FRICTION;
            self.angular_velocity = self.angular_velocity * FLOOR_FRICTION;
        }

        let limit_x = bounds.x - self.cube_size;
        if self.position.x.abs() > limit_x {
            self.velocity.x = -self.velocity.x * WALL_RESTITUTION;
            self.position.x = limit_x.copysign(self.position.x);
        }
        let limit_z = bounds.z - self.cube_size;
        if self.position.z.abs() > limit_z {
            self.velocity.z = -self.velocity.z * WALL_RESTITUTION;
            self.position.z = limit_z.copysign(self.position.z);
        }

        if self.velocity.length() < REST_SPEED
            && self.angular_velocity.length() < REST_SPEED
            && self.is_on_floor()
        {
            self.velocity = Vec3::ZERO;
            self.angular_velocity = Vec3::ZERO;
            self.stopped = true;
        }
    }
}

pub fn random_spin(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-SPIN_RANGE..=SPIN_RANGE),
        rng.gen_range(-SPIN_RANGE..=SPIN_RANGE),
        rng.gen_range(-SPIN_RANGE..=SPIN_RANGE),
    )
}
