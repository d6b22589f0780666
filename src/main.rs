use std::path::PathBuf;

use clap::Parser;

use dicebox::window::WindowBackend;
use dicebox::{SceneConfig, Simulation};

#[derive(Parser)]
#[command(name = "dicebox", about = "Throw dice around a box with the mouse")]
struct Cli {
    /// Scene description in RON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of dice, laid out in a row
    #[arg(short, long)]
    dice: Option<usize>,

    /// Seed for orientations and spin
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frame-rate cap
    #[arg(long)]
    fps: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("loading scene from {}", path.display());
            SceneConfig::load(path)?
        }
        None => SceneConfig::default(),
    };
    if let Some(count) = cli.dice {
        config.set_dice_count(count);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(fps) = cli.fps {
        config.target_fps = fps;
    }
    config.validate()?;

    let mut backend = WindowBackend::open(&config)?;
    let mut simulation = Simulation::new(&config);
    simulation.run(&mut backend)?;

    Ok(())
}
