//! CLI enum types.

use clap::ValueEnum;

/// How the banner is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Animated sine-wave scroller
    #[default]
    Scroll,
    /// Bordered banner printed once
    Static,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Scroll => "scroll",
            Mode::Static => "static",
        }
    }
}
