//! Bundle of horizontal strokes rotated together about the motif centre.
use glam::DVec2;
use rand::RngCore;

use crate::color::Color;
use crate::rng::rand01;
use crate::scene::{Motif, PrimitiveInstruction};
use crate::shapes::ShapeGenerator;

/// Line cluster motif.
///
/// Draws: segment count, then per segment left extent, right extent, vertical offset,
/// stroke width and opacity, then one group rotation in [-90, 90).
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClusterShape;

impl ShapeGenerator for LineClusterShape {
    fn generate(&self, motif: &Motif, rng: &mut dyn RngCore) -> PrimitiveInstruction {
        let size = motif.scale;
        let center = motif.center;
        let count = 3 + (rand01(rng) * 5.0).floor() as usize;

        let mut children = Vec::with_capacity(count);
        for _ in 0..count {
            let x1 = center.x - size * (0.5 + rand01(rng) * 0.4);
            let x2 = center.x + size * (0.5 + rand01(rng) * 0.4);
            let y = center.y + (rand01(rng) - 0.5) * size * 0.4;
            let stroke_width = 1.0 + rand01(rng) * 3.0;
            let opacity = 0.6 + rand01(rng) * 0.4;
            children.push(PrimitiveInstruction::LineSegment {
                from: DVec2::new(x1, y),
                to: DVec2::new(x2, y),
                stroke: Color::Hsl(motif.color),
                stroke_width,
                opacity,
            });
        }

        PrimitiveInstruction::Group {
            children,
            rotation_degrees: rand01(rng) * 180.0 - 90.0,
            rotation_center: center,
        }
    }
}
