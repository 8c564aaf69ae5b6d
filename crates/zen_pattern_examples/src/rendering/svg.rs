//! SVG serialisation of a scene.
use std::fmt::Write;

use glam::DVec2;
use zen_pattern::scene::{PrimitiveInstruction, Scene};

/// Serialise `scene` to a standalone SVG document, preserving paint order.
///
/// Coordinates are written with two decimals.
pub fn render_scene_to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(128 + scene.len() * 160);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.size.x,
        h = scene.size.y,
    );
    for instruction in scene.iter() {
        write_instruction(&mut out, instruction, 1);
    }
    out.push_str("</svg>\n");
    out
}

fn write_instruction(out: &mut String, instruction: &PrimitiveInstruction, depth: usize) {
    let indent = "  ".repeat(depth);
    match instruction {
        PrimitiveInstruction::Ellipse {
            center,
            radii,
            fill,
            fill_opacity,
            rotation_degrees,
        } => {
            let _ = writeln!(
                out,
                r#"{indent}<ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" fill="{fill}" fill-opacity="{:.3}"{}/>"#,
                center.x,
                center.y,
                radii.x,
                radii.y,
                fill_opacity,
                rotate_attr(*rotation_degrees, *center),
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
            let _ = writeln!(
                out,
                r#"{indent}<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{fill}" fill-opacity="{:.3}"{}/>"#,
                origin.x,
                origin.y,
                size.x,
                size.y,
                corner_radius,
                fill_opacity,
                rotate_attr(*rotation_degrees, *origin + *size / 2.0),
            );
        }
        PrimitiveInstruction::LineSegment {
            from,
            to,
            stroke,
            stroke_width,
            opacity,
        } => {
            let _ = writeln!(
                out,
                r#"{indent}<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{stroke}" stroke-width="{:.2}" stroke-linecap="round" opacity="{:.3}"/>"#,
                from.x, from.y, to.x, to.y, stroke_width, opacity,
            );
        }
        PrimitiveInstruction::Group {
            children,
            rotation_degrees,
            rotation_center,
        } => {
            let _ = writeln!(
                out,
                "{indent}<g{}>",
                rotate_attr(*rotation_degrees, *rotation_center)
            );
            for child in children {
                write_instruction(out, child, depth + 1);
            }
            let _ = writeln!(out, "{indent}</g>");
        }
    }
}

fn rotate_attr(degrees: f64, center: DVec2) -> String {
    if degrees == 0.0 {
        String::new()
    } else {
        format!(
            r#" transform="rotate({:.2} {:.2} {:.2})""#,
            degrees, center.x, center.y
        )
    }
}
