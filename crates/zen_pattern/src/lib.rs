#![forbid(unsafe_code)]
//! zen_pattern: Deterministic generative patterns from a seed and a handful of parameters.
//!
//! Modules:
//! - rng: the seeded Mulberry32 stream every random draw comes from
//! - palette, color: HSL palette derivation from one base hue
//! - params, grid: generation parameters, validation and the placement grid
//! - shapes: procedural motif generators (circle, rect, line cluster, petal rosette)
//! - compose: the scene composer and the [`generate_scene`] entry point
//! - scene, events: the produced instruction list and optional run observation
//!
//! The same [`params::GenerationParameters`] always yield an identical [`scene::Scene`].
pub mod color;
pub mod compose;
pub mod error;
pub mod events;
pub mod grid;
pub mod palette;
pub mod params;
pub mod rng;
pub mod scene;
pub mod shapes;

pub use compose::generate_scene;

/// Convenient re-exports for common types. Import with `use zen_pattern::prelude::*;`.
pub mod prelude {
    pub use crate::color::{Color, Hsl, BACKGROUND};
    pub use crate::compose::{generate_scene, generate_scene_with_events, SceneComposer};
    pub use crate::error::{Error, Result};
    pub use crate::events::{EventSink, FnSink, GenerationEvent, RunSummary, VecSink};
    pub use crate::grid::{Cell, Grid};
    pub use crate::palette::{generate_palette, Palette};
    pub use crate::params::{GenerationParameters, ShapeKind};
    pub use crate::rng::{rand01, Mulberry32};
    pub use crate::scene::{Motif, PrimitiveInstruction, Scene};
    pub use crate::shapes::{
        CircleShape, LineClusterShape, PetalRosetteShape, RectShape, ShapeGenerator,
    };
}
