//! Block-letter glyph table.
//!
//! Every glyph is [`LETTER_HEIGHT`] rows tall and all rows of one glyph have
//! the same width. A non-space character in a row is an "on" pixel.

/// Number of rows in every glyph.
pub const LETTER_HEIGHT: usize = 5;

/// Blank columns emitted after each letter.
pub const SPACING_COLUMNS: usize = 3;

/// Character drawn for an "on" pixel.
pub const PIXEL_ON_CHAR: char = '#';

/// Character drawn for a drop-shadow pixel.
pub const PIXEL_SHADOW_CHAR: char = '.';

/// Character drawn for an empty cell.
pub const BLANK_CHAR: char = ' ';

/// Character whose pattern is used for anything missing from the table.
pub const FALLBACK_CHAR: char = '?';

/// A single glyph: one string per row.
pub type Glyph = [&'static str; LETTER_HEIGHT];

const FALLBACK: Glyph = ["?????", "   ? ", "  ?  ", "     ", "  ?  "];

/// Every character with a dedicated pattern, in table order.
pub const SUPPORTED_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ?";

/// Look up the glyph for `ch`.
///
/// Lookup is exact; callers uppercase their input first. Characters without
/// a pattern get the fallback glyph.
pub fn glyph(ch: char) -> Glyph {
    lookup(ch).unwrap_or(FALLBACK)
}

/// Returns `true` if `ch` has its own pattern in the table.
pub fn is_supported(ch: char) -> bool {
    lookup(ch).is_some()
}

fn lookup(ch: char) -> Option<Glyph> {
    let g = match ch {
        'A' => ["  A  ", " A A ", "AAAAA", "A   A", "A   A"],
        'B' => ["BBBB ", "B   B", "BBBB ", "B   B", "BBBB "],
        'C' => [" CCCC", "C    ", "C    ", "C    ", " CCCC"],
        'D' => ["DDDD ", "D   D", "D   D", "D   D", "DDDD "],
        'E' => ["EEEEE", "E    ", "EEE  ", "E    ", "EEEEE"],
        'F' => ["FFFFF", "F    ", "FFF  ", "F    ", "F    "],
        'G' => [" GGGG", "G    ", "G  GG", "G   G", " GGG "],
        'H' => ["H   H", "H   H", "HHHHH", "H   H", "H   H"],
        'I' => ["IIIII", "  I  ", "  I  ", "  I  ", "IIIII"],
        'J' => ["JJJJJ", "    J", "    J", "J   J", " JJJ "],
        'K' => ["K   K", "K  K ", "K K  ", "K  K ", "K   K"],
        'L' => ["L    ", "L    ", "L    ", "L    ", "LLLLL"],
        'M' => ["M   M", "MM MM", "M M M", "M   M", "M   M"],
        'N' => ["N   N", "NN  N", "N N N", "N  NN", "N   N"],
        'O' => [" OOO ", "O   O", "O   O", "O   O", " OOO "],
        'P' => ["PPPP ", "P   P", "PPPP ", "P    ", "P    "],
        'Q' => [" QQQ ", "Q   Q", "Q   Q", "Q  Q ", " QQ Q"],
        'R' => ["RRRR ", "R   R", "RRRR ", "R  R ", "R   R"],
        'S' => [" SSS ", "S    ", " SSS ", "    S", " SSS "],
        'T' => ["TTTTT", "  T  ", "  T  ", "  T  ", "  T  "],
        'U' => ["U   U", "U   U", "U   U", "U   U", " UUU "],
        'V' => ["V   V", "V   V", "V   V", " V V ", "  V  "],
        'W' => ["W   W", "W   W", "W W W", "WW WW", "W   W"],
        'X' => ["X   X", " X X ", "  X  ", " X X ", "X   X"],
        'Y' => ["Y   Y", " Y Y ", "  Y  ", "  Y  ", "  Y  "],
        'Z' => ["ZZZZZ", "   Z ", "  Z  ", " Z   ", "ZZZZZ"],
        ' ' => ["     ", "     ", "     ", "     ", "     "],
        '?' => FALLBACK,
        _ => return None,
    };
    Some(g)
}

/// Width of a glyph in columns.
pub fn glyph_width(g: &Glyph) -> usize {
    g[0].chars().count()
}
