//! Palette derivation from a single base hue.
//!
//! One draw fixes the base hue; each entry then spreads evenly around the colour wheel
//! with a small jitter and draws its own saturation and lightness. The draw order is
//! part of the reproducibility contract: base, then per entry jitter, saturation, lightness.
use rand::RngCore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Hsl;
use crate::rng::rand01;

/// Ordered, index-addressable set of colours for one generation run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Hsl>,
}

impl Palette {
    pub fn new(colors: Vec<Hsl>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Hsl> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Hsl] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hsl> {
        self.colors.iter()
    }

    /// Map a unit draw to an index in `[0, len)`.
    ///
    /// `u` must be in [0, 1) and the palette non-empty.
    pub(crate) fn index_for(&self, u: f64) -> usize {
        debug_assert!(!self.colors.is_empty(), "palette must not be empty");
        ((u * self.colors.len() as f64).floor() as usize).min(self.colors.len() - 1)
    }
}

/// Generate `size` colours from `rng`.
///
/// Consumes `1 + 3 * size` draws.
pub fn generate_palette(rng: &mut dyn RngCore, size: usize) -> Palette {
    let base = (rand01(rng) * 360.0).floor() as i64;
    let step = if size > 0 {
        (360.0 / size as f64).round() as i64
    } else {
        0
    };

    let mut colors = Vec::with_capacity(size);
    for i in 0..size {
        let jitter = (rand01(rng) * 20.0 - 10.0).floor() as i64;
        let hue = (base + i as i64 * step + jitter).rem_euclid(360);
        let saturation = 50 + (rand01(rng) * 30.0).floor() as u8;
        let lightness = 45 + (rand01(rng) * 20.0).floor() as u8;
        colors.push(Hsl::new(hue as u16, saturation, lightness));
    }

    Palette { colors }
}
