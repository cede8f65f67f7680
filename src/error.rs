//! Error type shared by the banner binary and library.

use crate::config::ConfigError;

/// Errors that can stop the banner.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    /// Reading input or writing to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Ctrl+C handler could not be installed
    #[error("Failed to install Ctrl+C handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}
