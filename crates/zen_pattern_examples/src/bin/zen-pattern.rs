use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use zen_pattern::prelude::*;
use zen_pattern_examples::{init_tracing, save_scene};

#[derive(Parser, Debug)]
#[command(name = "zen-pattern")]
#[command(about = "Generate a deterministic pattern and write it as SVG or PNG")]
struct Cli {
    /// Output path; the extension (.svg or .png) selects the format
    #[arg(short, long, default_value = "zen-pattern.svg")]
    out: PathBuf,

    /// RON file with a full parameter set; flags below override its fields
    #[arg(long)]
    params: Option<PathBuf>,

    /// Draw a random parameter set instead of starting from the defaults
    #[arg(long, conflicts_with = "params")]
    randomize: bool,

    /// Seed for --randomize (defaults to the current time)
    #[arg(long, requires = "randomize")]
    random_seed: Option<u64>,

    #[arg(long)]
    seed: Option<u32>,

    /// Grid resolution; 0..=4 yields the minimum 4x4 grid
    #[arg(long)]
    complexity: Option<u32>,

    /// Cell occupancy probability in [0, 1]
    #[arg(long)]
    density: Option<f64>,

    #[arg(long)]
    palette_size: Option<usize>,

    /// circle, rect, line or petal
    #[arg(long)]
    shape: Option<ShapeKind>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Print the resolved parameters as RON and exit
    #[arg(long)]
    dump_params: bool,
}

impl Cli {
    fn base_params(&self) -> anyhow::Result<GenerationParameters> {
        if let Some(path) = &self.params {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return ron::from_str(&text).with_context(|| format!("parsing {}", path.display()));
        }
        if self.randomize {
            let seed = self.random_seed.unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0)
            });
            let mut rng = StdRng::seed_from_u64(seed);
            return Ok(GenerationParameters::randomized(&mut rng));
        }
        Ok(GenerationParameters::default())
    }

    fn resolve(&self) -> anyhow::Result<GenerationParameters> {
        let mut params = self.base_params()?;
        if let Some(seed) = self.seed {
            params = params.with_seed(seed);
        }
        if let Some(complexity) = self.complexity {
            params = params.with_complexity(complexity);
        }
        if let Some(density) = self.density {
            params = params.with_density(density);
        }
        if let Some(palette_size) = self.palette_size {
            params = params.with_palette_size(palette_size);
        }
        if let Some(shape) = self.shape {
            params = params.with_shape(shape);
        }
        let canvas = DVec2::new(
            self.width.unwrap_or(params.canvas.x),
            self.height.unwrap_or(params.canvas.y),
        );
        Ok(params.with_canvas(canvas))
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let params = cli.resolve()?;

    if cli.dump_params {
        let text = ron::ser::to_string_pretty(&params, ron::ser::PrettyConfig::default())?;
        println!("{text}");
        return Ok(());
    }

    info!(
        "seed {} | complexity {} | density {:.2} | palette {} | shape {}",
        params.seed, params.complexity, params.density, params.palette_size, params.shape
    );
    let scene = generate_scene(&params)?;
    save_scene(&scene, &cli.out)
}
