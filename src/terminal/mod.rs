//! Terminal handling - escape codes, size detection, frame buffers, and cursor cleanup.

pub mod ansi;
mod cursor;
mod frame;
mod size;

// Re-export public types from submodules
pub use cursor::CursorGuard;
pub use frame::FrameBuffer;
pub use size::{TerminalSize, FALLBACK_SIZE, MAX_AMPLITUDE, MAX_HEIGHT, MIN_HEIGHT, MIN_WIDTH};
