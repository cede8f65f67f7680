//! Text layout: turns a word into pixel columns.

use crate::glyph::{self, BLANK_CHAR, LETTER_HEIGHT, PIXEL_ON_CHAR, SPACING_COLUMNS};

/// One vertical slice of a glyph, top row first.
pub type Column = [bool; LETTER_HEIGHT];

/// Column sequence for a word plus one phase anchor per column.
///
/// `phases[i]` is the horizontal center of the letter that column `i`
/// belongs to. Spacing columns carry the phase of the letter before them,
/// so a letter and its trailing gap move as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct TextColumns {
    pub columns: Vec<Column>,
    pub phases: Vec<f64>,
}

impl TextColumns {
    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Never true for output of [`build_text_columns`].
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Lay out `word` as columns.
///
/// The word is uppercased and each character is looked up in the glyph
/// table (unknown characters fall back to `?`). An empty word yields a
/// single blank column with phase 0.
pub fn build_text_columns(word: &str) -> TextColumns {
    let mut columns: Vec<Column> = Vec::new();
    let mut phases: Vec<f64> = Vec::new();

    for ch in word.to_uppercase().chars() {
        let pattern = glyph::glyph(ch);
        let width = glyph::glyph_width(&pattern);
        let letter_center = columns.len() as f64 + width as f64 / 2.0;

        let rows: Vec<Vec<char>> = pattern.iter().map(|row| row.chars().collect()).collect();
        for col_idx in 0..width {
            let mut column = [false; LETTER_HEIGHT];
            for (row, bit) in column.iter_mut().enumerate() {
                *bit = rows[row][col_idx] != BLANK_CHAR;
            }
            columns.push(column);
            phases.push(letter_center);
        }
        for _ in 0..SPACING_COLUMNS {
            columns.push([false; LETTER_HEIGHT]);
            phases.push(letter_center);
        }
    }

    if columns.is_empty() {
        log::debug!("empty word, using a single blank column");
        return TextColumns {
            columns: vec![[false; LETTER_HEIGHT]],
            phases: vec![0.0],
        };
    }

    TextColumns { columns, phases }
}

/// Render columns as [`LETTER_HEIGHT`] text rows for static output.
///
/// The spacing after the final letter is dropped; spacing between letters
/// is kept.
pub fn render_rows(columns: &[Column]) -> Vec<String> {
    let visible = if columns.len() > SPACING_COLUMNS {
        &columns[..columns.len() - SPACING_COLUMNS]
    } else {
        columns
    };

    (0..LETTER_HEIGHT)
        .map(|row| {
            visible
                .iter()
                .map(|column| if column[row] { PIXEL_ON_CHAR } else { BLANK_CHAR })
                .collect()
        })
        .collect()
}
