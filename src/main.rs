//! Strictly GTP - Unified CLI
//!
//! Plays Go against a GTP engine in the terminal.

#![warn(missing_docs)]

mod cli;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_gtp::EngineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            komi,
            handicap,
            color,
        } => {
            let config = load_config(config)?;
            let mut game = config.game().clone();
            if let Some(size) = size {
                game = game.with_board_size(size);
            }
            if let Some(komi) = komi {
                game = game.with_komi(komi);
            }
            if let Some(handicap) = handicap {
                game = game.with_handicap(handicap);
            }
            if let Some(color) = color {
                game = game.with_player_color(color);
            }
            let config = config.with_game(game);
            config.validate()?;
            play::run(config).await
        }
        Command::Info { config } => play::info(load_config(config)?).await,
    }
}

fn load_config(flag: Option<std::path::PathBuf>) -> Result<EngineConfig> {
    let path = cli::config_path(flag);
    info!(path = %path.display(), "Using engine config");
    Ok(EngineConfig::from_file(path)?)
}
