//! ANSI foreground colors and run-based line coloring.

use serde::Deserialize;

use crate::glyph::PIXEL_ON_CHAR;
use crate::terminal::ansi::RESET_COLOR;

/// Named foreground colors offered at the color prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors, in prompt order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Lowercase name used for lookup.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Name with a leading capital, for display.
    pub fn title(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Escape sequence that selects this foreground color.
    pub fn escape_code(&self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }

    /// Case-insensitive lookup by name. Surrounding whitespace is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Escape prefix for an optional color; empty when uncolored.
pub fn prefix(color: Option<Color>) -> &'static str {
    color.map(|c| c.escape_code()).unwrap_or("")
}

/// Wrap each run of lit pixels in `prefix` ... reset.
///
/// Blanks, shadows and border characters stay uncolored. An empty prefix
/// returns the row unchanged. A row that ends inside a run is closed with
/// a reset, so no color leaks past the line.
pub fn format_line(chars: &[char], prefix: &str) -> String {
    if prefix.is_empty() {
        return chars.iter().collect();
    }

    let mut result = String::with_capacity(chars.len() + 16);
    let mut in_color = false;
    for &ch in chars {
        let lit = ch == PIXEL_ON_CHAR;
        if lit && !in_color {
            result.push_str(prefix);
            in_color = true;
        } else if !lit && in_color {
            result.push_str(RESET_COLOR);
            in_color = false;
        }
        result.push(ch);
    }
    if in_color {
        result.push_str(RESET_COLOR);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: &str = "\x1b[31m";

    #[test]
    fn test_format_line_runs() {
        let line = format_line(&['#', '#', ' ', '#'], RED);
        assert_eq!(line, format!("{RED}##{RESET_COLOR} {RED}#{RESET_COLOR}"));
        assert_eq!(line.matches(RED).count(), 2);
        assert_eq!(line.matches(RESET_COLOR).count(), 2);
    }

    #[test]
    fn test_format_line_no_color() {
        assert_eq!(format_line(&['#', '.', ' '], ""), "#. ");
    }

    #[test]
    fn test_format_line_shadow_uncolored() {
        assert_eq!(
            format_line(&['.', '#', '.'], RED),
            format!(".{RED}#{RESET_COLOR}.")
        );
    }

    #[test]
    fn test_format_line_blank_row() {
        assert_eq!(format_line(&[' ', ' '], RED), "  ");
        assert_eq!(format_line(&[], RED), "");
    }

    #[test]
    fn test_color_lookup_case_insensitive() {
        assert_eq!(Color::from_name("RED"), Some(Color::Red));
        assert_eq!(Color::from_name("  Cyan "), Some(Color::Cyan));
        assert_eq!(Color::from_name("mauve"), None);
        assert_eq!(Color::from_name(""), None);
    }

    #[test]
    fn test_escape_codes_are_sequential() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.escape_code(), format!("\x1b[3{}m", i));
        }
    }

    #[test]
    fn test_title() {
        assert_eq!(Color::Magenta.title(), "Magenta");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(prefix(None), "");
        assert_eq!(prefix(Some(Color::Red)), RED);
    }
}
