//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Mode;

/// Render a word as block-letter ASCII art, scrolling along a sine wave
#[derive(Parser, Debug)]
#[command(name = "ascii-banner")]
#[command(version, long_about = None)]
#[command(about = "Block-letter terminal banner with sine-wave scrolling")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Presentation mode
    #[arg(long, short, default_value = "scroll")]
    pub mode: Mode,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
