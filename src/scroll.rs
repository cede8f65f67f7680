//! Sine-wave scroll animation loop.
//!
//! Every tick clears the screen, homes the cursor and redraws the whole
//! frame. The text sweeps in from the right edge, leaves on the left, and
//! after a short pause starts over until a stop is requested.

use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::color::{self, Color};
use crate::compositor::{compose_frame, FrameGeometry};
use crate::config::AnimationConfig;
use crate::error::BannerError;
use crate::interrupt::pause;
use crate::layout::TextColumns;
use crate::terminal::ansi::CLEAR_AND_HOME;
use crate::terminal::{CursorGuard, FrameBuffer, TerminalSize};

/// Hint printed before the animation starts.
pub const INTRO_MESSAGE: &str = "Press Ctrl+C to stop the banner.";

/// Message printed when the animation is stopped.
pub const FAREWELL_MESSAGE: &str = "\nBanner stopped.\n";

/// Everything the loop needs besides the text itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    pub geometry: FrameGeometry,
    pub frame_delay: Duration,
    pub sweep_pause: Duration,
    pub color: Option<Color>,
}

impl ScrollSettings {
    /// Derive settings from the captured terminal size and the config.
    pub fn new(size: TerminalSize, animation: &AnimationConfig, color: Option<Color>) -> Self {
        Self {
            geometry: FrameGeometry {
                width: size.width,
                height: size.height,
                amplitude: size.amplitude(animation.max_amplitude),
                baseline: size.baseline(),
                wave_length: animation.wave_length,
            },
            frame_delay: animation.frame_delay(),
            sweep_pause: animation.sweep_pause(),
            color,
        }
    }
}

/// Frame indices for one sweep: from fully off-screen right to fully
/// off-screen left.
pub fn sweep_range(column_count: usize, width: usize) -> RangeInclusive<i64> {
    -(width as i64)..=(column_count + width) as i64
}

/// Clear the screen and write one frame, coloring lit pixels.
pub fn write_frame<W: Write>(
    out: &mut W,
    frame: &FrameBuffer,
    color: Option<Color>,
) -> io::Result<()> {
    let prefix = color::prefix(color);
    out.write_all(CLEAR_AND_HOME.as_bytes())?;
    for row in frame.rows() {
        out.write_all(color::format_line(row, prefix).as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Print the start hint and wait `delay` before the animation.
///
/// Returns `false` if a stop arrived during the wait; the farewell has
/// then already been written and the animation should not start.
pub fn intro<W: Write>(
    out: &mut W,
    delay: Duration,
    should_stop: &dyn Fn() -> bool,
) -> io::Result<bool> {
    writeln!(out, "{}", INTRO_MESSAGE)?;
    out.flush()?;
    if pause(delay, should_stop) {
        return Ok(true);
    }
    out.write_all(FAREWELL_MESSAGE.as_bytes())?;
    out.flush()?;
    Ok(false)
}

/// Run the animation until `should_stop` returns true.
///
/// `out` already has the cursor hidden; it is shown again on every exit
/// path, including errors and panics.
pub fn run<W: Write>(
    mut out: CursorGuard<W>,
    text: &TextColumns,
    settings: &ScrollSettings,
    should_stop: &dyn Fn() -> bool,
) -> Result<(), BannerError> {
    let sweep = sweep_range(text.len(), settings.geometry.width);
    log::debug!(
        "scrolling {} columns over frames {:?} at {:?}/frame",
        text.len(),
        sweep,
        settings.frame_delay
    );

    'animation: loop {
        for frame_index in sweep.clone() {
            if should_stop() {
                break 'animation;
            }
            let frame =
                compose_frame(&text.columns, &text.phases, frame_index, &settings.geometry);
            write_frame(&mut out, &frame, settings.color)?;
            if !pause(settings.frame_delay, should_stop) {
                break 'animation;
            }
        }
        if !pause(settings.sweep_pause, should_stop) {
            break;
        }
    }

    out.write_all(FAREWELL_MESSAGE.as_bytes())?;
    out.restore()?;
    Ok(())
}
