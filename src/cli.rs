//! Command-line interface for strictly_gtp.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_go::Color;

/// Environment variable naming the default engine config file.
pub const CONFIG_ENV: &str = "STRICTLY_GTP_CONFIG";

/// Strictly GTP - play Go against any GTP engine
#[derive(Parser, Debug)]
#[command(name = "strictly_gtp")]
#[command(about = "Play Go against a GTP engine from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Path to the engine config (defaults to $STRICTLY_GTP_CONFIG, then engine.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board size override
        #[arg(long)]
        size: Option<usize>,

        /// Komi override
        #[arg(long, allow_negative_numbers = true)]
        komi: Option<f64>,

        /// Handicap override
        #[arg(long)]
        handicap: Option<u32>,

        /// Your color override (black or white)
        #[arg(long)]
        color: Option<Color>,
    },

    /// Start a session and print the engine's name, version and board
    Info {
        /// Path to the engine config (defaults to $STRICTLY_GTP_CONFIG, then engine.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Resolves the config path from the flag, the environment, or the default.
pub fn config_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("engine.toml"))
}
