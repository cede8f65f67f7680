//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, the interactive prompts, and
//! subcommand handlers.

mod args;
mod commands;
mod enums;
mod prompt;

pub use args::{Args, Command, ConfigAction};
pub use commands::handle_config_action;
pub use enums::Mode;
pub use prompt::{prompt_for_color, prompt_for_word, COLOR_PROMPT, INVALID_COLOR, WORD_PROMPT};
