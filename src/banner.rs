//! Static banner: the word printed once inside a border.

use std::io::Write;

use crate::color::{self, Color};
use crate::error::BannerError;
use crate::layout::{build_text_columns, render_rows};

/// Default border fill character.
pub const DEFAULT_BORDER_CHAR: char = '*';

/// Pad `rows` to equal width and wrap them in a border.
///
/// Top and bottom lines are `width + 4` border characters; content lines
/// are `"<b> " + row + " <b>"`.
pub fn frame_lines<S: AsRef<str>>(rows: &[S], border_char: char) -> Vec<String> {
    framed(rows, border_char, None)
}

fn framed<S: AsRef<str>>(rows: &[S], border_char: char, color: Option<Color>) -> Vec<String> {
    let width = rows
        .iter()
        .map(|r| r.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let edge: String = std::iter::repeat(border_char).take(width + 4).collect();
    let prefix = color::prefix(color);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(edge.clone());
    for row in rows {
        let mut chars: Vec<char> = row.as_ref().chars().collect();
        chars.resize(width, ' ');
        lines.push(format!(
            "{b} {content} {b}",
            b = border_char,
            content = color::format_line(&chars, prefix)
        ));
    }
    lines.push(edge);
    lines
}

/// Render `word` as a bordered, optionally colored banner.
///
/// The output is a pure function of the arguments.
pub fn render_banner(word: &str, color: Option<Color>, border_char: char) -> String {
    let text = build_text_columns(word);
    let rows = render_rows(&text.columns);
    let mut out = framed(&rows, border_char, color).join("\n");
    out.push('\n');
    out
}

/// Write the banner for `word` to `out`.
pub fn print_banner<W: Write>(
    out: &mut W,
    word: &str,
    color: Option<Color>,
    border_char: char,
) -> Result<(), BannerError> {
    out.write_all(render_banner(word, color, border_char).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_lines_pads_and_borders() {
        let lines = frame_lines(&["AB", "CDE"], '*');
        assert_eq!(
            lines,
            vec!["*******", "* AB  *", "* CDE *", "*******"]
        );
    }

    #[test]
    fn test_frame_lines_empty() {
        let rows: [&str; 0] = [];
        assert_eq!(frame_lines(&rows, '='), vec!["====", "===="]);
    }

    #[test]
    fn test_render_banner_shape() {
        let out = render_banner("hi", None, '*');
        let lines: Vec<&str> = out.lines().collect();
        // Border + 5 glyph rows + border
        assert_eq!(lines.len(), 7);
        // H (5) + spacing (3) + I (5)
        assert_eq!(lines[0].len(), 13 + 4);
        assert_eq!(lines[1], "* #   #   ##### *");
    }

    #[test]
    fn test_render_banner_colored_border_stays_plain() {
        let out = render_banner("I", Some(Color::Green), '*');
        let first = out.lines().next().unwrap();
        assert_eq!(first, "*********");
        assert!(out.contains("* \x1b[32m#####\x1b[0m *"));
    }
}
