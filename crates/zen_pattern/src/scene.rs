//! Scene description: the ordered primitive instructions a generation run produces.
//!
//! The scene is the only output of the core. Renderers walk
//! [`Scene::instructions`] in order; the first instruction is always the
//! full-canvas background.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsl, BACKGROUND};

/// One drawable primitive. Rotations are in degrees, clockwise in a y-down canvas.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveInstruction {
    /// Filled ellipse, rotated about its own centre.
    Ellipse {
        center: DVec2,
        radii: DVec2,
        fill: Color,
        fill_opacity: f64,
        rotation_degrees: f64,
    },
    /// Filled rounded rectangle with top-left corner `origin`, rotated about its centre.
    Rectangle {
        origin: DVec2,
        size: DVec2,
        corner_radius: f64,
        fill: Color,
        fill_opacity: f64,
        rotation_degrees: f64,
    },
    /// Stroked segment with round caps.
    LineSegment {
        from: DVec2,
        to: DVec2,
        stroke: Color,
        stroke_width: f64,
        opacity: f64,
    },
    /// Children drawn in order, then rotated together about `rotation_center`.
    Group {
        children: Vec<PrimitiveInstruction>,
        rotation_degrees: f64,
        rotation_center: DVec2,
    },
}

impl PrimitiveInstruction {
    /// Full-canvas background rectangle.
    pub fn background(size: DVec2) -> Self {
        PrimitiveInstruction::Rectangle {
            origin: DVec2::ZERO,
            size,
            corner_radius: 0.0,
            fill: BACKGROUND,
            fill_opacity: 1.0,
            rotation_degrees: 0.0,
        }
    }

    /// Number of non-group primitives in this instruction, including nested ones.
    pub fn leaf_count(&self) -> usize {
        match self {
            PrimitiveInstruction::Group { children, .. } => {
                children.iter().map(PrimitiveInstruction::leaf_count).sum()
            }
            _ => 1,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, PrimitiveInstruction::Group { .. })
    }
}

/// Resolved placement of one occupied cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motif {
    /// Jittered centre in canvas units.
    pub center: DVec2,
    /// Base size the shape generator scales from.
    pub scale: f64,
    /// Palette colour.
    pub color: Hsl,
}

/// Ordered list of primitive instructions; list order is paint order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Canvas size the scene was composed for.
    pub size: DVec2,
    /// Instructions, background first.
    pub instructions: Vec<PrimitiveInstruction>,
}

impl Scene {
    /// Create a scene holding only the background instruction.
    pub fn with_background(size: DVec2) -> Self {
        Self {
            size,
            instructions: vec![PrimitiveInstruction::background(size)],
        }
    }

    pub fn push(&mut self, instruction: PrimitiveInstruction) {
        self.instructions.push(instruction);
    }

    /// The background instruction, if the scene has one.
    pub fn background(&self) -> Option<&PrimitiveInstruction> {
        self.instructions.first()
    }

    /// Motif instructions, everything after the background.
    pub fn motifs(&self) -> &[PrimitiveInstruction] {
        self.instructions.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveInstruction> {
        self.instructions.iter()
    }
}
