//! Frame compositor for the sine-wave scroller.
//!
//! Each screen column shows source column `frame_index + c`. Letters bob up
//! and down on a sine wave keyed to their phase anchor, and every lit pixel
//! casts a one-cell shadow down and to the right.

use crate::glyph::{BLANK_CHAR, PIXEL_ON_CHAR, PIXEL_SHADOW_CHAR};
use crate::layout::Column;
use crate::terminal::FrameBuffer;

/// Default horizontal distance, in columns, for one radian of wave phase.
pub const WAVE_LENGTH: f64 = 8.0;

/// Geometry shared by every frame of one animation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub width: usize,
    pub height: usize,
    pub amplitude: usize,
    pub baseline: usize,
    pub wave_length: f64,
}

/// Vertical offset of a column at `frame_index`, rounded half to even.
pub fn wave_offset(frame_index: i64, phase_anchor: f64, amplitude: usize, wave_length: f64) -> i64 {
    let phase = (frame_index as f64 + phase_anchor) / wave_length;
    (phase.sin() * amplitude as f64).round_ties_even() as i64
}

/// Compose one frame.
///
/// `frame_index` may be negative so the text can scroll in from the right.
/// Source columns outside `columns` leave their screen column blank, and
/// pixels pushed outside the buffer are clipped. A shadow is only painted
/// on a cell that is still blank, so it never covers a lit pixel or a
/// shadow cast by a neighbouring column.
pub fn compose_frame(
    columns: &[Column],
    phases: &[f64],
    frame_index: i64,
    geometry: &FrameGeometry,
) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(geometry.width, geometry.height);
    let height = geometry.height as i64;

    for screen_col in 0..geometry.width {
        let source = frame_index + screen_col as i64;
        if source < 0 || source >= columns.len() as i64 {
            continue;
        }
        let source = source as usize;

        let offset = wave_offset(
            frame_index,
            phases[source],
            geometry.amplitude,
            geometry.wave_length,
        );
        let top_row = geometry.baseline as i64 + offset;

        for (bit_row, &is_on) in columns[source].iter().enumerate() {
            if !is_on {
                continue;
            }
            let target_row = top_row + bit_row as i64;
            if !(0..height).contains(&target_row) {
                continue;
            }
            let target_row = target_row as usize;
            buffer.set(target_row, screen_col, PIXEL_ON_CHAR);

            let (shadow_row, shadow_col) = (target_row + 1, screen_col + 1);
            if buffer.get(shadow_row, shadow_col) == Some(BLANK_CHAR) {
                buffer.set(shadow_row, shadow_col, PIXEL_SHADOW_CHAR);
            }
        }
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_text_columns;

    fn geometry(width: usize, height: usize, amplitude: usize) -> FrameGeometry {
        FrameGeometry {
            width,
            height,
            amplitude,
            baseline: 2,
            wave_length: WAVE_LENGTH,
        }
    }

    #[test]
    fn test_wave_offset_zero_amplitude() {
        assert_eq!(wave_offset(17, 3.5, 0, WAVE_LENGTH), 0);
    }

    #[test]
    fn test_wave_offset_peak() {
        // sin(pi/2) * 4 == 4
        let anchor = std::f64::consts::FRAC_PI_2 * WAVE_LENGTH;
        assert_eq!(wave_offset(0, anchor, 4, WAVE_LENGTH), 4);
        assert_eq!(wave_offset(0, -anchor, 4, WAVE_LENGTH), -4);
    }

    #[test]
    fn test_wave_offset_is_odd_in_phase() {
        for anchor in [0.5, 1.0, 2.5, 7.25, 11.0] {
            assert_eq!(
                wave_offset(0, anchor, 6, WAVE_LENGTH),
                -wave_offset(0, -anchor, 6, WAVE_LENGTH)
            );
        }
    }

    #[test]
    fn test_single_column_with_shadow() {
        let columns = vec![[true, false, false, false, false]];
        let phases = vec![0.0];
        let frame = compose_frame(&columns, &phases, 0, &geometry(4, 6, 0));
        assert_eq!(frame.get(2, 0), Some(PIXEL_ON_CHAR));
        assert_eq!(frame.get(3, 1), Some(PIXEL_SHADOW_CHAR));
        assert_eq!(frame.chars.iter().filter(|&&c| c != BLANK_CHAR).count(), 2);
    }

    #[test]
    fn test_lit_pixel_overwrites_earlier_shadow() {
        // Column 0's shadow lands on (3, 1); column 1 then lights that cell
        let columns = vec![
            [true, false, false, false, false],
            [false, true, false, false, false],
        ];
        let frame = compose_frame(&columns, &[0.0, 0.0], 0, &geometry(3, 8, 0));
        assert_eq!(frame.get(2, 0), Some(PIXEL_ON_CHAR));
        assert_eq!(frame.get(3, 1), Some(PIXEL_ON_CHAR));
        assert_eq!(frame.get(4, 2), Some(PIXEL_SHADOW_CHAR));
    }

    #[test]
    fn test_shadow_clipped_at_right_edge() {
        let columns = vec![[true; 5]];
        let frame = compose_frame(&columns, &[0.0], 0, &geometry(1, 10, 0));
        assert!(frame.chars.iter().all(|&c| c != PIXEL_SHADOW_CHAR));
    }

    #[test]
    fn test_pixels_clipped_vertically() {
        let columns = vec![[true; 5]];
        let geo = FrameGeometry {
            width: 2,
            height: 3,
            amplitude: 0,
            baseline: 1,
            wave_length: WAVE_LENGTH,
        };
        let frame = compose_frame(&columns, &[0.0], 0, &geo);
        assert_eq!(frame.get(1, 0), Some(PIXEL_ON_CHAR));
        assert_eq!(frame.get(2, 0), Some(PIXEL_ON_CHAR));
        assert_eq!(frame.get(0, 0), Some(BLANK_CHAR));
    }

    #[test]
    fn test_frame_far_out_of_range_is_blank() {
        let text = build_text_columns("HELLO");
        let geo = geometry(40, 12, 3);
        let before = compose_frame(&text.columns, &text.phases, -1000, &geo);
        let after = compose_frame(&text.columns, &text.phases, 1000, &geo);
        assert!(before.is_blank());
        assert!(after.is_blank());
    }

    #[test]
    fn test_scroll_in_offsets_screen_column() {
        let columns = vec![[true; 5]];
        let frame = compose_frame(&columns, &[0.0], -3, &geometry(6, 10, 0));
        assert_eq!(frame.get(2, 3), Some(PIXEL_ON_CHAR));
        assert_eq!(frame.get(2, 0), Some(BLANK_CHAR));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let text = build_text_columns("WAVE");
        let geo = geometry(40, 14, 4);
        let a = compose_frame(&text.columns, &text.phases, 5, &geo);
        let b = compose_frame(&text.columns, &text.phases, 5, &geo);
        assert_eq!(a, b);
    }
}
