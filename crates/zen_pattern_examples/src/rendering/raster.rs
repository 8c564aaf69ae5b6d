//! Software rasteriser producing an RGBA image of a scene.
//!
//! The image is sized exactly to the scene canvas and pre-filled with the background
//! colour; instructions are then composited source-over in scene order with 2x2
//! supersampling per pixel.
use std::path::Path;

use anyhow::Context;
use glam::{DAffine2, DVec2};
use image::{Rgba, RgbaImage};
use tracing::info;
use zen_pattern::color::{Color, BACKGROUND};
use zen_pattern::scene::{PrimitiveInstruction, Scene};

const SUBSAMPLES: [DVec2; 4] = [
    DVec2::new(0.25, 0.25),
    DVec2::new(0.75, 0.25),
    DVec2::new(0.25, 0.75),
    DVec2::new(0.75, 0.75),
];

/// Rasterise `scene` into a new image of `size.x` x `size.y` pixels.
pub fn render_scene_to_image(scene: &Scene) -> RgbaImage {
    let width = scene.size.x.round().max(1.0) as u32;
    let height = scene.size.y.round().max(1.0) as u32;
    let [r, g, b] = BACKGROUND.to_rgb8();
    let mut image = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));

    for instruction in scene.iter() {
        draw_instruction(&mut image, instruction, DAffine2::IDENTITY);
    }
    image
}

/// Rasterise `scene` and encode it as PNG at `path`.
pub fn save_scene_png(scene: &Scene, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    render_scene_to_image(scene)
        .save(path)
        .with_context(|| format!("encoding {}", path.display()))?;
    info!("Wrote {}.", path.display());
    Ok(())
}

fn rotation_about(center: DVec2, degrees: f64) -> DAffine2 {
    DAffine2::from_translation(center)
        * DAffine2::from_angle(degrees.to_radians())
        * DAffine2::from_translation(-center)
}

fn draw_instruction(image: &mut RgbaImage, instruction: &PrimitiveInstruction, parent: DAffine2) {
    match instruction {
        PrimitiveInstruction::Ellipse {
            center,
            radii,
            fill,
            fill_opacity,
            rotation_degrees,
        } => {
            let to_canvas = parent * rotation_about(*center, *rotation_degrees);
            let (center, radii) = (*center, *radii);
            fill_shape(
                image,
                to_canvas,
                (center - radii, center + radii),
                *fill,
                *fill_opacity,
                |p| {
                    let d = (p - center) / radii;
                    d.length_squared() <= 1.0
                },
            );
        }
        PrimitiveInstruction::Rectangle {
            origin,
            size,
            corner_radius,
            fill,
            fill_opacity,
            rotation_degrees,
        } => {
            let center = *origin + *size / 2.0;
            let half = *size / 2.0;
            let radius = corner_radius.clamp(0.0, half.min_element());
            let to_canvas = parent * rotation_about(center, *rotation_degrees);
            fill_shape(
                image,
                to_canvas,
                (*origin, *origin + *size),
                *fill,
                *fill_opacity,
                |p| {
                    let q = (p - center).abs() - (half - DVec2::splat(radius));
                    q.max(DVec2::ZERO).length() + q.max_element().min(0.0) <= radius
                },
            );
        }
        PrimitiveInstruction::LineSegment {
            from,
            to,
            stroke,
            stroke_width,
            opacity,
        } => {
            let (a, b) = (*from, *to);
            let half = stroke_width / 2.0;
            let pad = DVec2::splat(half);
            fill_shape(
                image,
                parent,
                (a.min(b) - pad, a.max(b) + pad),
                *stroke,
                *opacity,
                |p| distance_to_segment(p, a, b) <= half,
            );
        }
        PrimitiveInstruction::Group {
            children,
            rotation_degrees,
            rotation_center,
        } => {
            let to_canvas = parent * rotation_about(*rotation_center, *rotation_degrees);
            for child in children {
                draw_instruction(image, child, to_canvas);
            }
        }
    }
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Composite a shape given in local coordinates.
///
/// `bounds` is the local bounding box; `inside` tests a local point.
fn fill_shape(
    image: &mut RgbaImage,
    to_canvas: DAffine2,
    bounds: (DVec2, DVec2),
    color: Color,
    opacity: f64,
    inside: impl Fn(DVec2) -> bool,
) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 {
        return;
    }
    let to_local = to_canvas.inverse();

    let (lo, hi) = bounds;
    let corners = [
        lo,
        DVec2::new(hi.x, lo.y),
        hi,
        DVec2::new(lo.x, hi.y),
    ]
    .map(|c| to_canvas.transform_point2(c));
    let min = corners.iter().fold(DVec2::splat(f64::INFINITY), |m, c| m.min(*c));
    let max = corners
        .iter()
        .fold(DVec2::splat(f64::NEG_INFINITY), |m, c| m.max(*c));

    let (w, h) = (image.width() as f64, image.height() as f64);
    let x0 = min.x.floor().clamp(0.0, w) as u32;
    let y0 = min.y.floor().clamp(0.0, h) as u32;
    let x1 = max.x.ceil().clamp(0.0, w) as u32;
    let y1 = max.y.ceil().clamp(0.0, h) as u32;

    let src = color.to_rgb8();
    for y in y0..y1 {
        for x in x0..x1 {
            let pixel = DVec2::new(x as f64, y as f64);
            let hits = SUBSAMPLES
                .iter()
                .filter(|offset| inside(to_local.transform_point2(pixel + **offset)))
                .count();
            if hits == 0 {
                continue;
            }
            let alpha = opacity * hits as f64 / SUBSAMPLES.len() as f64;
            blend(image.get_pixel_mut(x, y), src, alpha);
        }
    }
}

fn blend(dst: &mut Rgba<u8>, src: [u8; 3], alpha: f64) {
    for (d, s) in dst.0.iter_mut().zip(src) {
        let mixed = f64::from(s) * alpha + f64::from(*d) * (1.0 - alpha);
        *d = mixed.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = 255;
}
