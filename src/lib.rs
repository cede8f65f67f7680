//! ascii-banner library crate.
//!
//! Block-letter banner rendering: glyph table, column layout, the
//! sine-wave frame compositor, ANSI coloring, and the presentation loops.
//! The binary is a thin interactive front end over these modules.

pub mod banner;
pub mod cli;
pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod glyph;
pub mod interrupt;
pub mod layout;
pub mod scroll;
pub mod terminal;
