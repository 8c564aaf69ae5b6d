//! Scene composition: the single entry point from parameters to a [`Scene`].
//!
//! A run creates one [`Mulberry32`] from the seed and draws everything from it in a
//! fixed order: the palette, then per cell (row-major) an occupancy value and, for
//! occupied cells, centre jitter, palette index, scale and the shape's own draws.
//! Skipped cells still consume their occupancy draw.
use tracing::{debug, info, trace, warn};

use crate::error::Result;
use crate::events::{EventSink, GenerationEvent, RunSummary};
use crate::palette::generate_palette;
use crate::params::GenerationParameters;
use crate::rng::Mulberry32;
use crate::scene::{Motif, Scene};

/// Fraction of the smaller cell gap a motif's scale is derived from.
const SCALE_FACTOR: f64 = 0.6;

/// Composer bound to a validated parameter set.
#[derive(Debug, Clone)]
pub struct SceneComposer {
    params: GenerationParameters,
}

impl SceneComposer {
    /// Validates `params` and binds them to a new composer.
    pub fn try_new(params: GenerationParameters) -> Result<Self> {
        if let Err(e) = params.validate() {
            warn!("Rejecting generation parameters: {e}.");
            return Err(e);
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Composes the scene. Every call yields the same result.
    pub fn compose(&self) -> Scene {
        let mut rng = Mulberry32::new(self.params.seed);
        compose_into(&self.params, &mut rng, &mut ())
    }

    /// Composes the scene while reporting progress to `sink`.
    pub fn compose_with_events(&self, sink: &mut dyn EventSink) -> Scene {
        let mut rng = Mulberry32::new(self.params.seed);
        compose_into(&self.params, &mut rng, sink)
    }
}

/// Generates the scene for `params`.
///
/// Fails with [`crate::error::Error::InvalidParameter`] before any random draw when
/// the parameters are out of range; otherwise cannot fail.
pub fn generate_scene(params: &GenerationParameters) -> Result<Scene> {
    Ok(SceneComposer::try_new(params.clone())?.compose())
}

/// Like [`generate_scene`], additionally sending [`GenerationEvent`]s to `sink`.
pub fn generate_scene_with_events(
    params: &GenerationParameters,
    sink: &mut dyn EventSink,
) -> Result<Scene> {
    Ok(SceneComposer::try_new(params.clone())?.compose_with_events(sink))
}

fn compose_into(
    params: &GenerationParameters,
    rng: &mut Mulberry32,
    sink: &mut dyn EventSink,
) -> Scene {
    let palette = generate_palette(rng, params.palette_size);
    let grid = params.grid();
    let generator = params.shape.generator();

    debug!(
        "Composing seed {} | grid {}x{} | palette {} | shape {}.",
        params.seed,
        grid.cols,
        grid.rows,
        palette.len(),
        params.shape,
    );
    if sink.wants_events() {
        sink.send(GenerationEvent::RunStarted {
            params: params.clone(),
            grid,
            palette: palette.clone(),
        });
    }

    let mut scene = Scene::with_background(params.canvas);
    scene
        .instructions
        .reserve((grid.cell_count() as f64 * params.density).ceil() as usize);
    let mut summary = RunSummary::default();

    for cell in grid.cells() {
        summary.cells_visited += 1;

        let occupancy = rng.next_f64();
        if params.density <= 0.0 || occupancy > params.density {
            summary.cells_skipped += 1;
            if sink.wants_events() {
                sink.send(GenerationEvent::CellSkipped { cell, occupancy });
            }
            continue;
        }

        let u = rng.next_f64();
        let v = rng.next_f64();
        let center = grid.jittered_center(cell, u, v);
        let palette_index = palette.index_for(rng.next_f64());
        let scale = (0.25 + rng.next_f64() * 0.9) * grid.min_gap() * SCALE_FACTOR;
        let motif = Motif {
            center,
            scale,
            color: palette.colors()[palette_index],
        };

        let instruction = generator.generate(&motif, rng);
        trace!(
            "Motif at ({}, {}) | scale {:.2} | colour {} | {} primitives.",
            cell.col,
            cell.row,
            scale,
            motif.color,
            instruction.leaf_count(),
        );
        scene.push(instruction);
        summary.motifs_placed += 1;

        if sink.wants_events() {
            sink.send(GenerationEvent::MotifPlaced {
                cell,
                motif,
                palette_index,
            });
        }
    }

    summary.instructions = scene.len();
    info!(
        "Composed seed {}: {} motifs in {} cells ({} skipped).",
        params.seed, summary.motifs_placed, summary.cells_visited, summary.cells_skipped,
    );
    if sink.wants_events() {
        sink.send(GenerationEvent::RunFinished { summary });
    }

    scene
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::color::{Color, Hsl, BACKGROUND};
    use crate::error::Error;
    use crate::events::VecSink;
    use crate::params::ShapeKind;
    use crate::scene::PrimitiveInstruction;

    fn reference_params() -> GenerationParameters {
        GenerationParameters::new(1)
            .with_complexity(4)
            .with_density(1.0)
            .with_palette_size(3)
            .with_shape(ShapeKind::Circle)
            .with_canvas(DVec2::new(900.0, 700.0))
    }

    fn assert_ellipse(
        instruction: &PrimitiveInstruction,
        center: DVec2,
        radius: f64,
        opacity: f64,
        color: Hsl,
    ) {
        match instruction {
            PrimitiveInstruction::Ellipse {
                center: c,
                radii,
                fill,
                fill_opacity,
                rotation_degrees,
            } => {
                assert_eq!(*c, center);
                assert_eq!(*radii, DVec2::splat(radius));
                assert_eq!(*fill_opacity, opacity);
                assert_eq!(*fill, Color::Hsl(color));
                assert_eq!(*rotation_degrees, 0.0);
            }
            other => panic!("expected ellipse, got {other:?}"),
        }
    }

    #[test]
    fn reference_scenario_matches_golden_values() {
        let scene = generate_scene(&reference_params()).expect("valid params");
        assert_eq!(scene.len(), 17);
        assert!(scene
            .motifs()
            .iter()
            .all(|i| matches!(i, PrimitiveInstruction::Ellipse { .. })));

        assert_ellipse(
            &scene.instructions[1],
            DVec2::new(110.98642285214737, 49.58802625653335),
            31.72277958634324,
            0.7732568313647062,
            Hsl::new(354, 58, 57),
        );
        assert_ellipse(
            &scene.instructions[2],
            DVec2::new(323.27360767289065, 115.54634272586554),
            23.846931453216207,
            0.791785413264297,
            Hsl::new(215, 65, 64),
        );
    }

    #[test]
    fn reference_scenario_reports_palette_and_grid() {
        let mut sink = VecSink::new();
        generate_scene_with_events(&reference_params(), &mut sink).expect("valid params");
        let (grid, palette) = sink
            .as_slice()
            .iter()
            .find_map(|e| match e {
                GenerationEvent::RunStarted { grid, palette, .. } => Some((*grid, palette.clone())),
                _ => None,
            })
            .expect("run started event");
        assert_eq!((grid.cols, grid.rows), (4, 4));
        assert_eq!(
            palette.colors(),
            &[
                Hsl::new(215, 65, 64),
                Hsl::new(354, 58, 57),
                Hsl::new(109, 62, 64),
            ]
        );
    }

    #[test]
    fn same_parameters_yield_identical_scenes() {
        for shape in ShapeKind::ALL {
            let params = GenerationParameters::new(77)
                .with_complexity(9)
                .with_density(0.55)
                .with_palette_size(6)
                .with_shape(shape);
            let a = generate_scene(&params).expect("valid params");
            let b = generate_scene(&params).expect("valid params");
            assert_eq!(a, b, "{shape} scene differs between runs");
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_scene(&reference_params()).expect("valid params");
        let b = generate_scene(&reference_params().with_seed(2)).expect("valid params");
        assert_ne!(a, b);
    }

    #[test]
    fn background_is_always_first_and_full_canvas() {
        for shape in ShapeKind::ALL {
            let params = GenerationParameters::new(3)
                .with_shape(shape)
                .with_canvas(DVec2::new(1234.0, 567.0));
            let scene = generate_scene(&params).expect("valid params");
            assert_eq!(
                scene.background(),
                Some(&PrimitiveInstruction::background(DVec2::new(1234.0, 567.0)))
            );
            if let Some(PrimitiveInstruction::Rectangle { fill, .. }) = scene.background() {
                assert_eq!(*fill, BACKGROUND);
            }
        }
    }

    #[test]
    fn zero_density_emits_only_background_but_still_draws() {
        let params = reference_params().with_density(0.0);
        let mut rng = Mulberry32::new(params.seed);
        let scene = compose_into(&params, &mut rng, &mut ());
        assert_eq!(scene.len(), 1);

        // palette (1 + 3 * 3) and one occupancy draw per cell
        let mut reference = Mulberry32::new(params.seed);
        for _ in 0..(10 + 16) {
            reference.next_f64();
        }
        assert_eq!(rng, reference);
    }

    #[test]
    fn full_density_fills_every_cell() {
        for shape in ShapeKind::ALL {
            let params = GenerationParameters::new(12)
                .with_complexity(7)
                .with_density(1.0)
                .with_shape(shape);
            let grid = params.grid();
            let scene = generate_scene(&params).expect("valid params");
            assert_eq!(scene.motifs().len(), grid.cell_count());
        }
    }

    #[test]
    fn zero_complexity_uses_minimum_grid() {
        let params = reference_params().with_complexity(0);
        let scene = generate_scene(&params).expect("valid params");
        assert_eq!(scene.len(), 17);
    }

    #[test]
    fn motifs_stay_inside_their_cells() {
        let params = GenerationParameters::new(8)
            .with_complexity(10)
            .with_density(1.0);
        let grid = params.grid();
        let mut sink = VecSink::new();
        generate_scene_with_events(&params, &mut sink).expect("valid params");
        for event in sink.as_slice() {
            if let GenerationEvent::MotifPlaced {
                cell,
                motif,
                palette_index,
            } = event
            {
                let origin = grid.cell_origin(*cell);
                assert!(motif.center.x > origin.x && motif.center.x < origin.x + grid.gap.x);
                assert!(motif.center.y > origin.y && motif.center.y < origin.y + grid.gap.y);
                assert!(*palette_index < params.palette_size);
                assert!(motif.scale > 0.0);
            }
        }
    }

    #[test]
    fn events_do_not_change_the_scene() {
        let params = GenerationParameters::new(31)
            .with_density(0.4)
            .with_shape(ShapeKind::Petal);
        let plain = generate_scene(&params).expect("valid params");
        let mut sink = VecSink::new();
        let observed = generate_scene_with_events(&params, &mut sink).expect("valid params");
        assert_eq!(plain, observed);

        let summary = sink
            .into_inner()
            .into_iter()
            .find_map(|e| match e {
                GenerationEvent::RunFinished { summary } => Some(summary),
                _ => None,
            })
            .expect("run finished event");
        let grid = params.grid();
        assert_eq!(summary.cells_visited, grid.cell_count());
        assert_eq!(
            summary.motifs_placed + summary.cells_skipped,
            summary.cells_visited
        );
        assert_eq!(summary.instructions, observed.len());
        assert_eq!(summary.motifs_placed, observed.motifs().len());
    }

    #[test]
    fn invalid_parameters_produce_no_scene() {
        let mut sink = VecSink::new();
        let err = generate_scene_with_events(&reference_params().with_density(2.0), &mut sink)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(sink.is_empty());

        assert!(SceneComposer::try_new(reference_params().with_palette_size(0)).is_err());
    }

    #[test]
    fn composer_is_reusable() {
        let composer = SceneComposer::try_new(reference_params()).expect("valid params");
        assert_eq!(composer.params().seed, 1);
        assert_eq!(composer.compose(), composer.compose());
    }
}
