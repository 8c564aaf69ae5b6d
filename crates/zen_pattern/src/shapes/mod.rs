//! Procedural motif generators.
//!
//! Each generator turns a [`Motif`] into one top-level [`PrimitiveInstruction`],
//! drawing further values from the shared stream. The literal order of those draws is
//! fixed per generator; changing it changes every motif placed after it.
use rand::RngCore;

use crate::params::ShapeKind;
use crate::scene::{Motif, PrimitiveInstruction};

pub mod circle;
pub mod line_cluster;
pub mod petal_rosette;
pub mod rect;

pub use circle::CircleShape;
pub use line_cluster::LineClusterShape;
pub use petal_rosette::PetalRosetteShape;
pub use rect::RectShape;

/// Trait for motif generation.
pub trait ShapeGenerator: Send + Sync {
    fn generate(&self, motif: &Motif, rng: &mut dyn RngCore) -> PrimitiveInstruction;
}

impl ShapeKind {
    /// Generator responsible for this kind.
    pub fn generator(&self) -> &'static dyn ShapeGenerator {
        match self {
            ShapeKind::Circle => &CircleShape,
            ShapeKind::Rect => &RectShape,
            ShapeKind::Line => &LineClusterShape,
            ShapeKind::Petal => &PetalRosetteShape,
        }
    }
}
