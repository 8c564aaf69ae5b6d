//! Colour types used by palettes and primitive instructions.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fill of the full-canvas background instruction (`#071827`).
pub const BACKGROUND: Color = Color::Rgb([0x07, 0x18, 0x27]);

/// A hue/saturation/lightness triple.
///
/// `hue` is in degrees [0, 360); `saturation` and `lightness` are percentages.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to 8-bit sRGB channels.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let h = f64::from(self.hue % 360) / 60.0;
        let s = f64::from(self.saturation.min(100)) / 100.0;
        let l = f64::from(self.lightness.min(100)) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(r), channel(g), channel(b)]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Paint applied by a primitive instruction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A palette colour.
    Hsl(Hsl),
    /// A fixed sRGB colour such as [`BACKGROUND`].
    Rgb([u8; 3]),
}

impl Color {
    pub fn to_rgb8(&self) -> [u8; 3] {
        match self {
            Color::Hsl(hsl) => hsl.to_rgb8(),
            Color::Rgb(rgb) => *rgb,
        }
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hsl(hsl) => fmt::Display::fmt(hsl, f),
            Color::Rgb([r, g, b]) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert_exactly() {
        assert_eq!(Hsl::new(0, 100, 50).to_rgb8(), [255, 0, 0]);
        assert_eq!(Hsl::new(120, 100, 50).to_rgb8(), [0, 255, 0]);
        assert_eq!(Hsl::new(240, 100, 50).to_rgb8(), [0, 0, 255]);
    }

    #[test]
    fn zero_saturation_is_grey() {
        let [r, g, b] = Hsl::new(200, 0, 50).to_rgb8();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, 128);
    }

    #[test]
    fn extremes_of_lightness_are_black_and_white() {
        assert_eq!(Hsl::new(45, 80, 0).to_rgb8(), [0, 0, 0]);
        assert_eq!(Hsl::new(45, 80, 100).to_rgb8(), [255, 255, 255]);
    }

    #[test]
    fn display_uses_css_space_syntax() {
        assert_eq!(Hsl::new(214, 75, 58).to_string(), "hsl(214 75% 58%)");
        assert_eq!(BACKGROUND.to_string(), "#071827");
        assert_eq!(
            Color::from(Hsl::new(2, 75, 54)).to_string(),
            "hsl(2 75% 54%)"
        );
    }

    #[test]
    fn background_passes_through_unchanged() {
        assert_eq!(BACKGROUND.to_rgb8(), [7, 24, 39]);
    }
}
