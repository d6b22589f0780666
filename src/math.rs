use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Div<f32> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Rotates `point` about X, then Y, then Z.
///
/// Each step feeds the next, so the result is the intrinsic X→Y→Z
/// composition. Direction vectors can be passed as-is; translation is the
/// caller's business.
pub fn rotate(point: Vec3, rx: f32, ry: f32, rz: f32) -> Vec3 {
    let (s, c) = rx.sin_cos();
    let y1 = point.y * c - point.z * s;
    let z1 = point.y * s + point.z * c;

    let (s, c) = ry.sin_cos();
    let x2 = point.x * c + z1 * s;
    let z2 = -point.x * s + z1 * c;

    let (s, c) = rz.sin_cos();
    let x3 = x2 * c - y1 * s;
    let y3 = x2 * s + y1 * c;

    Vec3::new(x3, y3, z2)
}

/// Accumulated Euler angles of a body.
///
/// Everything that turns a local vector into a world vector goes through
/// [`Orientation::apply`], so the angle representation can change without
/// touching callers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
}

impl Orientation {
    pub const IDENTITY: Self = Self { rx: 0.0, ry: 0.0, rz: 0.0 };

    pub const fn new(rx: f32, ry: f32, rz: f32) -> Self {
        Self { rx, ry, rz }
    }

    pub fn apply(&self, v: Vec3) -> Vec3 {
        rotate(v, self.rx, self.ry, self.rz)
    }

    /// Adds per-axis angle increments, e.g. `angular_velocity * dt`.
    pub fn integrate(&mut self, delta: Vec3) {
        self.rx += delta.x;
        self.ry += delta.y;
        self.rz += delta.z;
    }
}
