mod scenes;

use crate::scenes::SceneKind;
use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use lumen::aliases::RandGen;
use lumen::film::ImageFilm;
use lumen::renderer;
use lumen::setup::Setup;
use rand::SeedableRng;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "A Whitted-style ray tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Number of jittered samples per pixel
    #[arg(long, short = 's', default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..))]
    samples: u32,

    /// Maximum scatter recursion depth
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(0..))]
    max_depth: i32,

    /// Disable shadow rays in the direct-lighting pass
    #[arg(long)]
    no_shadows: bool,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::ThreeSpheres)]
    scene: SceneKind,

    /// Seed for the sampling generator; renders are reproducible per seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();
    let start_time = Instant::now();

    let scene = scenes::get(args.scene, args.width, args.height);
    let mut setup = Setup {
        samples: args.samples,
        max_depth: args.max_depth,
        shadows: !args.no_shadows,
        ..Setup::default()
    };
    setup.init_shading();
    info!(
        "scene constructed ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed())
    );

    let mut film = ImageFilm::new(args.width, args.height);
    let mut rng = RandGen::seed_from_u64(args.seed);
    renderer::render(&scene, &setup, &mut film, &mut rng);

    film.save_png(Path::new(&args.output))
        .with_context(|| format!("failed to write {}", args.output))?;
    info!(
        "wrote {} ({:.3} secs elapsed)",
        args.output,
        duration_to_secs(&start_time.elapsed())
    );
    Ok(())
}

fn duration_to_secs(dur: &Duration) -> f32 {
    dur.as_secs() as f32 + dur.subsec_millis() as f32 * 0.001
}
