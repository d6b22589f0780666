//! Pinhole projection shared by rendering and hit-testing.

use crate::math::{Vec2, Vec3};

/// Pip radius as a fraction of the cube half-extent, before perspective.
pub const PIP_RADIUS_RATIO: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub scale: f32,
}

/// Axis-aligned screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    /// Strict containment; a point on the edge is outside.
    pub fn contains(&self, p: Vec2) -> bool {
        self.min.x < p.x && p.x < self.max.x && self.min.y < p.y && p.y < self.max.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub focal_length: f32,
    pub center: Vec2,
}

impl Projector {
    pub fn new(focal_length: f32, center: Vec2) -> Self {
        Self {
            focal_length,
            center,
        }
    }

    /// Only meaningful for `z > -focal_length`; `SceneConfig::validate`
    /// keeps every scene point in that range.
    pub fn scale_at(&self, z: f32) -> f32 {
        self.focal_length / (self.focal_length + z)
    }

    /// World y is up, screen y is down.
    pub fn project(&self, p: Vec3) -> Projected {
        let scale = self.scale_at(p.z);
        Projected {
            screen: Vec2::new(self.center.x + p.x * scale, self.center.y - p.y * scale),
            scale,
        }
    }

    pub fn project_point(&self, p: Vec3) -> Vec2 {
        self.project(p).screen
    }

    pub fn bounds<I>(&self, points: I) -> ScreenRect
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in points {
            let s = self.project_point(p);
            min.x = min.x.min(s.x);
            min.y = min.y.min(s.y);
            max.x = max.x.max(s.x);
            max.y = max.y.max(s.y);
        }
        ScreenRect { min, max }
    }

    /// Screen radius of a pip centred at `p` on a die of half-extent `cube_size`.
    pub fn pip_radius(&self, cube_size: f32, p: Vec3) -> f32 {
        PIP_RADIUS_RATIO * cube_size * self.scale_at(p.z)
    }
}

/// Back-face test against a fixed camera direction: only the rotated
/// normal's z sign is consulted.
pub fn is_face_visible(rotated_normal: Vec3) -> bool {
    rotated_normal.z > 0.0
}
