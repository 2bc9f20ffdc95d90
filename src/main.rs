use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::PathBuf;
use torus_snake::game::GameConfig;
use torus_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "32")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "24")]
    height: usize,

    /// Simulation ticks per second
    #[arg(long, default_value = "10")]
    tps: u32,

    /// Seed for apple placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file; the terminal is taken by the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => env_logger::init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = GameConfig::new(cli.width, cli.height).with_ticks_per_second(cli.tps);
    config.validate().context("Invalid command line options")?;

    let rng = match cli.seed {
        Some(seed) => {
            log::info!("Using apple seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut play_mode = PlayMode::new(config, rng)?;
    play_mode.run().await?;

    Ok(())
}
