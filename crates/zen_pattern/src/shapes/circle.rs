//! Single filled circle.
use glam::DVec2;
use rand::RngCore;

use crate::color::Color;
use crate::rng::rand01;
use crate::scene::{Motif, PrimitiveInstruction};
use crate::shapes::ShapeGenerator;

/// Circle motif. Draws: radius, fill opacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleShape;

impl ShapeGenerator for CircleShape {
    fn generate(&self, motif: &Motif, rng: &mut dyn RngCore) -> PrimitiveInstruction {
        let radius = motif.scale * (0.5 + rand01(rng) * 0.9);
        let fill_opacity = 0.92 - rand01(rng) * 0.3;
        PrimitiveInstruction::Ellipse {
            center: motif.center,
            radii: DVec2::splat(radius),
            fill: Color::Hsl(motif.color),
            fill_opacity,
            rotation_degrees: 0.0,
        }
    }
}
