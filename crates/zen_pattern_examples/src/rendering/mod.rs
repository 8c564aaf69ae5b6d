//! Renderers and exporters for composed scenes.
//!
//! The core crate stops at a [`zen_pattern::scene::Scene`]; everything here maps that
//! instruction list onto a concrete surface: SVG markup or an RGBA raster.
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zen_pattern::scene::Scene;

mod raster;
mod svg;

pub use raster::{render_scene_to_image, save_scene_png};
pub use svg::render_scene_to_svg;

/// Install a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Write the scene as SVG markup to `path`.
pub fn save_scene_svg(scene: &Scene, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    fs::write(path, render_scene_to_svg(scene))
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {}.", path.display());
    Ok(())
}

/// Write the scene to `path`, choosing SVG or PNG from the file extension.
pub fn save_scene(scene: &Scene, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => save_scene_svg(scene, path),
        Some("png") => save_scene_png(scene, path),
        _ => bail!(
            "unsupported output '{}': expected a .svg or .png path",
            path.display()
        ),
    }
}
