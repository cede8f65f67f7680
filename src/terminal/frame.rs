//! Frame buffer for one animation tick.

use crate::glyph::BLANK_CHAR;

/// Character grid for one rendered frame.
///
/// Cells are stored row-major. A buffer is built from scratch for every
/// tick and dropped once it has been written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Character data (row-major order)
    pub chars: Vec<char>,
    /// Width in characters
    pub width: usize,
    /// Height in characters
    pub height: usize,
}

impl FrameBuffer {
    /// Create a blank buffer with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            chars: vec![BLANK_CHAR; width * height],
            width,
            height,
        }
    }

    /// Character at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.chars[row * self.width + col])
        } else {
            None
        }
    }

    /// Set the cell at (`row`, `col`). Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        if row < self.height && col < self.width {
            self.chars[row * self.width + col] = ch;
        }
    }

    /// Iterate over rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on a zero chunk size
        self.chars.chunks(self.width.max(1))
    }

    /// True when every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|&c| c == BLANK_CHAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_buffer_new() {
        let frame = FrameBuffer::new(20, 10);
        assert_eq!(frame.width, 20);
        assert_eq!(frame.height, 10);
        assert_eq!(frame.chars.len(), 200);
        assert!(frame.is_blank());
    }

    #[test]
    fn test_frame_buffer_set_get() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.set(1, 2, '#');
        assert_eq!(frame.get(1, 2), Some('#'));
        assert_eq!(frame.get(0, 0), Some(' '));
        assert!(!frame.is_blank());
    }

    #[test]
    fn test_frame_buffer_out_of_bounds() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.set(2, 0, '#');
        frame.set(0, 3, '#');
        assert!(frame.is_blank());
        assert_eq!(frame.get(2, 0), None);
    }

    #[test]
    fn test_frame_buffer_rows() {
        let mut frame = FrameBuffer::new(3, 2);
        frame.set(1, 2, '.');
        let rows: Vec<&[char]> = frame.rows().collect();
        assert_eq!(rows, vec![&[' ', ' ', ' '][..], &[' ', ' ', '.'][..]]);
        assert_eq!(FrameBuffer::new(0, 0).rows().count(), 0);
    }
}
