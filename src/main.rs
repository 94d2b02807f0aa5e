//! Particle Life
//!
//! Headless frame loop: builds a simulation and steps it once per frame the
//! way an animation scheduler would, logging periodic summaries.

use anyhow::{Context, Result};
use clap::Parser;
use particle_simulation::{IntegrationMode, Simulation, SimulationConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Run a particle-life simulation without a window")]
struct Args {
    /// YAML scenario to start from. Flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of particles
    #[arg(short = 'n', long)]
    particles: Option<usize>,

    /// Number of particle types
    #[arg(short = 'm', long)]
    types: Option<usize>,

    /// Seed for the attraction matrix, types and positions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Keep velocity in its own buffer instead of sharing position storage
    #[arg(long)]
    independent_velocity: bool,

    /// Log a summary every this many frames
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(particles) = args.particles {
        config.particle_count = particles;
    }
    if let Some(types) = args.types {
        config.type_count = types;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.independent_velocity {
        config.params.integration = IntegrationMode::Independent;
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut simulation = Simulation::new(&config).context("failed to build simulation")?;

    let report_every = args.report_every.max(1);
    let start = Instant::now();
    let mut last_report = Instant::now();

    for _ in 0..args.frames {
        simulation.step();

        if simulation.frame() % report_every == 0 {
            let stats = simulation.stats();
            let frame_ms = last_report.elapsed().as_secs_f32() * 1000.0 / report_every as f32;
            last_report = Instant::now();
            log::info!(
                "frame {:>6} | {:.2} ms/frame | centroid {:.3} | extent {:.3} | {} {:.4}",
                stats.frame,
                frame_ms,
                stats.centroid,
                stats.extent(),
                stats.velocity_label(),
                stats.mean_speed
            );
        }
    }

    log::info!(
        "✓ Ran {} frames of {} particles in {:.2?}",
        simulation.frame(),
        simulation.particle_count(),
        start.elapsed()
    );
    Ok(())
}
