//! Rounded square rotated about the motif centre.
use glam::DVec2;
use rand::RngCore;

use crate::color::Color;
use crate::rng::rand01;
use crate::scene::{Motif, PrimitiveInstruction};
use crate::shapes::ShapeGenerator;

/// Corner radius as a fraction of the side length.
const CORNER_RATIO: f64 = 0.2;

/// Rectangle motif. Draws: side, fill opacity, rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectShape;

impl ShapeGenerator for RectShape {
    fn generate(&self, motif: &Motif, rng: &mut dyn RngCore) -> PrimitiveInstruction {
        let side = motif.scale * (0.45 + rand01(rng) * 0.9);
        let fill_opacity = 0.9 - rand01(rng) * 0.4;
        let rotation_degrees = rand01(rng) * 50.0 - 25.0;
        PrimitiveInstruction::Rectangle {
            origin: DVec2::new(motif.center.x - side / 2.0, motif.center.y - side / 2.0),
            size: DVec2::splat(side),
            corner_radius: side * CORNER_RATIO,
            fill: Color::Hsl(motif.color),
            fill_opacity,
            rotation_degrees,
        }
    }
}
