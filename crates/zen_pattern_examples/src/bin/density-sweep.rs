use zen_pattern::prelude::*;
use zen_pattern_examples::{init_tracing, save_scene_png};

const DENSITIES: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

fn main() -> anyhow::Result<()> {
    init_tracing();
    let base = GenerationParameters::new(42)
        .with_complexity(14)
        .with_palette_size(4)
        .with_shape(ShapeKind::Petal);

    for density in DENSITIES {
        let mut sink = VecSink::new();
        let scene = generate_scene_with_events(&base.clone().with_density(density), &mut sink)?;
        let placed = sink
            .as_slice()
            .iter()
            .filter(|e| matches!(e, GenerationEvent::MotifPlaced { .. }))
            .count();
        tracing::info!("density {density:.1}: {placed} motifs");
        save_scene_png(&scene, format!("density-sweep-{:03}.png", (density * 100.0) as u32))?;
    }

    Ok(())
}
