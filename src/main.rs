use anyhow::Result;
use clap::Parser;
use tracing::info;

use arcade::app::{App, AppOptions, GameKind};
use arcade::config::Config;
use arcade::platform;

/// Headless runner for the arcade simulations
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Game to run
    #[arg(value_enum, default_value_t = GameKind::Candy)]
    game: GameKind,

    /// Random seed, overriding `ARCADE_SEED`
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Run without frame pacing
    #[arg(long)]
    fast: bool,
}

impl From<Cli> for AppOptions {
    fn from(cli: Cli) -> Self {
        AppOptions {
            kind: cli.game,
            seed: cli.seed,
            ticks: cli.ticks,
            fast: cli.fast,
        }
    }
}

/// Main entry point for the headless runner.
///
/// Sets up logging, loads configuration and runs one session until it ends.
pub fn main() -> Result<()> {
    let options = AppOptions::from(Cli::parse());
    platform::init_console()?;

    let config = Config::load()?;
    info!(?options, "Loaded configuration");

    let mut app = App::new(options, &config)?;
    while app.run() {}
    app.report();

    Ok(())
}
