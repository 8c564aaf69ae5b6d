//! Ring of elliptical petals around the motif centre.
use std::f64::consts::PI;

use glam::DVec2;
use rand::RngCore;

use crate::color::Color;
use crate::rng::rand01;
use crate::scene::{Motif, PrimitiveInstruction};
use crate::shapes::ShapeGenerator;

/// Distance of each petal centre from the motif centre, as a fraction of size.
const PETAL_OFFSET: f64 = 0.4;

/// Petal rosette motif.
///
/// Draws: petal count, then per petal rx, ry, fill opacity and rotation jitter.
/// Petals are evenly spaced; each is rotated to point along its angle ±20°.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetalRosetteShape;

impl ShapeGenerator for PetalRosetteShape {
    fn generate(&self, motif: &Motif, rng: &mut dyn RngCore) -> PrimitiveInstruction {
        let size = motif.scale;
        let center = motif.center;
        let count = 4 + (rand01(rng) * 5.0).floor() as usize;

        let mut children = Vec::with_capacity(count);
        for i in 0..count {
            let angle = (i as f64 / count as f64) * PI * 2.0;
            let petal_center = DVec2::new(
                center.x + angle.cos() * size * PETAL_OFFSET,
                center.y + angle.sin() * size * PETAL_OFFSET,
            );
            let rx = size * (0.2 + rand01(rng) * 0.4);
            let ry = size * (0.45 + rand01(rng) * 0.35);
            let fill_opacity = 0.6 + rand01(rng) * 0.4;
            let rotation_degrees = angle * (180.0 / PI) + rand01(rng) * 40.0 - 20.0;
            children.push(PrimitiveInstruction::Ellipse {
                center: petal_center,
                radii: DVec2::new(rx, ry),
                fill: Color::Hsl(motif.color),
                fill_opacity,
                rotation_degrees,
            });
        }

        PrimitiveInstruction::Group {
            children,
            rotation_degrees: 0.0,
            rotation_center: center,
        }
    }
}
