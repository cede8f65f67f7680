//! Terminal dimensions for the scroll animation.

use crate::glyph::LETTER_HEIGHT;

/// Size used when the terminal cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Narrowest width the animation will use.
pub const MIN_WIDTH: usize = 40;

/// Tallest height the animation will use.
pub const MAX_HEIGHT: usize = 40;

/// Shortest height the animation will use.
pub const MIN_HEIGHT: usize = LETTER_HEIGHT + 6;

/// Largest vertical wave amplitude.
pub const MAX_AMPLITUDE: usize = 6;

/// Drawing area captured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl TerminalSize {
    /// Query the terminal, falling back to 80x24.
    pub fn detect() -> Self {
        let (cols, rows) = crossterm::terminal::size().unwrap_or_else(|e| {
            log::debug!("terminal size unavailable ({}), using fallback", e);
            FALLBACK_SIZE
        });
        Self::from_raw(cols, rows)
    }

    /// Clamp raw terminal dimensions.
    ///
    /// Width is floored at [`MIN_WIDTH`]. Height is capped at
    /// [`MAX_HEIGHT`] and floored at [`MIN_HEIGHT`]; a zero row count is
    /// treated as the fallback height.
    pub fn from_raw(cols: u16, rows: u16) -> Self {
        let rows = if rows == 0 { FALLBACK_SIZE.1 } else { rows };
        Self {
            width: (cols as usize).max(MIN_WIDTH),
            height: (rows as usize).min(MAX_HEIGHT).max(MIN_HEIGHT),
        }
    }

    /// Vertical wave amplitude that keeps letters mostly on screen.
    pub fn amplitude(&self, max_amplitude: usize) -> usize {
        (self.height.saturating_sub(LETTER_HEIGHT) / 2)
            .min(max_amplitude)
            .max(1)
    }

    /// Row where an unshifted letter's top edge sits.
    pub fn baseline(&self) -> usize {
        (self.height / 2).saturating_sub(LETTER_HEIGHT / 2)
    }
}
