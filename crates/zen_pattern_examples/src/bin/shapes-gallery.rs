use zen_pattern::prelude::*;
use zen_pattern_examples::{init_tracing, save_scene_png, save_scene_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // One seed, every motif family: the palette and placement draws are shared, so
    // only the shapes themselves differ between the outputs.
    let base = GenerationParameters::new(2024)
        .with_complexity(10)
        .with_density(0.75)
        .with_palette_size(5);

    for shape in ShapeKind::ALL {
        let scene = generate_scene(&base.clone().with_shape(shape))?;
        save_scene_svg(&scene, format!("shapes-gallery-{shape}.svg"))?;
        save_scene_png(&scene, format!("shapes-gallery-{shape}.png"))?;
    }

    Ok(())
}
