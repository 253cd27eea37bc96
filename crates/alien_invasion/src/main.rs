use std::path::PathBuf;

use alien_invasion::LaunchOptions;
use alien_invasion_game::highscore::DEFAULT_HIGH_SCORE_FILE;
use alien_invasion_game::DEFAULT_SCALE;
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "alien-invasion")]
#[command(about = "Shoot down the alien fleet before it reaches the ground")]
struct Cli {
    /// JSON file holding the best score so far
    #[arg(long, default_value = DEFAULT_HIGH_SCORE_FILE)]
    high_score_file: PathBuf,
    /// JSON file overriding the default settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Integer window scale
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("High score file: '{}'", cli.high_score_file.display());

    alien_invasion::run(LaunchOptions {
        high_score_file: cli.high_score_file,
        config: cli.config,
        scale: cli.scale,
    })
}
