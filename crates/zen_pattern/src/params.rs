//! Generation parameters, shape selection and input validation.
use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::{Grid, MAX_CELLS, REFERENCE_CANVAS};
use crate::rng::rand01;

/// Motif family drawn into every occupied cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Circle,
    Rect,
    Line,
    Petal,
}

impl ShapeKind {
    /// All kinds in their canonical order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rect,
        ShapeKind::Line,
        ShapeKind::Petal,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Line => "line",
            ShapeKind::Petal => "petal",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "rect" | "rectangle" => Ok(ShapeKind::Rect),
            "line" | "lines" => Ok(ShapeKind::Line),
            "petal" | "petals" => Ok(ShapeKind::Petal),
            _ => Err(Error::UnknownShape { name: s.to_owned() }),
        }
    }
}

/// Inputs of one generation run.
///
/// Identical parameters always produce an identical [`crate::scene::Scene`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParameters {
    /// Seed of the random stream.
    pub seed: u32,
    /// Grid resolution driver; 0 is allowed and yields the minimum grid.
    pub complexity: u32,
    /// Probability in [0, 1] that a cell receives a motif.
    pub density: f64,
    /// Number of palette colours, at least 1.
    pub palette_size: usize,
    /// Motif family.
    pub shape: ShapeKind,
    /// Canvas size in output units.
    pub canvas: DVec2,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            seed: 1,
            complexity: 8,
            density: 0.7,
            palette_size: 5,
            shape: ShapeKind::Circle,
            canvas: REFERENCE_CANVAS,
        }
    }
}

impl GenerationParameters {
    /// Creates parameters with default settings for the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the complexity.
    pub fn with_complexity(mut self, complexity: u32) -> Self {
        self.complexity = complexity;
        self
    }

    /// Sets the density.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the palette size.
    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Sets the shape kind.
    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the canvas size from any mint-compatible vector.
    pub fn with_canvas(mut self, canvas: impl Into<Vector2<f64>>) -> Self {
        self.canvas = DVec2::from(canvas.into());
        self
    }

    /// Draws a random but tasteful parameter set, as the interactive "randomize" action does.
    ///
    /// Consumes five draws: seed, palette size, complexity, density, shape.
    /// The canvas keeps its default size.
    pub fn randomized(rng: &mut dyn RngCore) -> Self {
        let seed = (rand01(rng) * 9999.0).floor() as u32;
        let palette_size = 3 + (rand01(rng) * 6.0).floor() as usize;
        let complexity = 3 + (rand01(rng) * 18.0).floor() as u32;
        let density = ((0.3 + rand01(rng) * 0.7) * 100.0).round() / 100.0;
        let shape = ShapeKind::ALL[(rand01(rng) * ShapeKind::ALL.len() as f64).floor() as usize];
        Self {
            seed,
            complexity,
            density,
            palette_size,
            shape,
            canvas: REFERENCE_CANVAS,
        }
    }

    /// Validates the parameters, returning an error if any is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.palette_size == 0 {
            return Err(Error::InvalidParameter("palette_size must be >= 1".into()));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidParameter(format!(
                "density must be within [0, 1], got {}",
                self.density
            )));
        }
        if !self.canvas.is_finite() || self.canvas.x <= 0.0 || self.canvas.y <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "canvas must be finite and > 0 in both components, got {}x{}",
                self.canvas.x, self.canvas.y
            )));
        }
        let grid = self.grid();
        if grid.checked_cell_count().is_none() {
            return Err(Error::InvalidParameter(format!(
                "grid of {}x{} cells exceeds the limit of {MAX_CELLS} cells",
                grid.cols, grid.rows
            )));
        }
        Ok(())
    }

    /// Placement grid implied by complexity and canvas size.
    pub fn grid(&self) -> Grid {
        Grid::for_canvas(self.complexity, self.canvas)
    }
}
