use crate::canvas::Color;
use crate::die::{Die, FACES, FACE_NORMALS};
use crate::math::Vec2;
use crate::projection::{is_face_visible, Projector};
use crate::simulation::Surface;

pub const FACE_COLOR: Color = Color::WHITE;
pub const PIP_COLOR: Color = Color::BLACK;

/// Issues the fill calls for one die: each camera-facing face, then its pips.
pub fn draw_die<S: Surface + ?Sized>(die: &Die, projector: &Projector, surface: &mut S) {
    let world = die.world_vertices();
    for (face, corners) in FACES.iter().enumerate() {
        if !is_face_visible(die.rotated_normal(FACE_NORMALS[face])) {
            continue;
        }
        let outline: [Vec2; 4] = corners.map(|i| projector.project_point(world[i]));
        surface.fill_polygon(&outline, FACE_COLOR);

        for pip in die.world_pips(face) {
            let projected = projector.project(pip);
            let radius = projector.pip_radius(die.cube_size(), pip);
            surface.fill_circle(projected.screen, radius, PIP_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::math::{Orientation, Vec3};
    use std::f32::consts::FRAC_PI_4;

    #[derive(Default)]
    struct Tally {
        polygons: usize,
        circles: Vec<f32>,
    }

    impl Surface for Tally {
        fn clear(&mut self, _: Color) {}
        fn fill_polygon(&mut self, points: &[Vec2], _: Color) {
            assert_eq!(points.len(), 4);
            self.polygons += 1;
        }
        fn fill_circle(&mut self, _: Vec2, radius: f32, _: Color) {
            self.circles.push(radius);
        }
        fn draw_label(&mut self, _: Vec2, _: &str, _: Color) {}
        fn present(&mut self) -> Result<(), Error> {
            Ok(())
        }
    }

    fn projector() -> Projector {
        Projector::new(400.0, Vec2::new(400.0, 300.0))
    }

    #[test]
    fn upright_die_shows_only_back_face() {
        // Identity orientation: only the z+ face (five pips) passes culling.
        let die = Die::with_orientation(50.0, Vec3::new(0.0, 50.0, 0.0), Orientation::IDENTITY);
        let mut tally = Tally::default();
        draw_die(&die, &projector(), &mut tally);
        assert_eq!(tally.polygons, 1);
        assert_eq!(tally.circles.len(), 5);
        // All pips sit at z = 50, so they share one foreshortened radius.
        for r in tally.circles {
            assert!((r - 5.0 * 400.0 / 450.0).abs() < 1e-4);
        }
    }

    #[test]
    fn tilted_die_shows_two_faces() {
        let die = Die::with_orientation(
            50.0,
            Vec3::new(0.0, 50.0, 0.0),
            Orientation::new(0.0, FRAC_PI_4, 0.0),
        );
        let mut tally = Tally::default();
        draw_die(&die, &projector(), &mut tally);
        assert_eq!(tally.polygons, 2);
    }
}
