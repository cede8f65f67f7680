//! Interactive stdin prompts for the word and color.

use std::io::{self, BufRead, Write};

use crate::color::Color;

pub const WORD_PROMPT: &str = "Type a word and press enter: ";
pub const COLOR_PROMPT: &str = "Pick a color (or press enter for default): ";
pub const INVALID_COLOR: &str = "Invalid choice. Try again.";

/// Read one line, trimmed. `None` at end of input.
fn read_trimmed<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for the word to render. End of input counts as an empty word.
pub fn prompt_for_word<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "{}", WORD_PROMPT)?;
    out.flush()?;
    Ok(read_trimmed(input)?.unwrap_or_default())
}

/// Ask for a color until a known name (any case) or an empty line is given.
///
/// An empty line or end of input selects `default`.
pub fn prompt_for_color<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: Option<Color>,
) -> io::Result<Option<Color>> {
    writeln!(out, "Available colors:")?;
    for color in Color::ALL {
        writeln!(out, "- {}", color.title())?;
    }

    loop {
        write!(out, "{}", COLOR_PROMPT)?;
        out.flush()?;
        let choice = match read_trimmed(input)? {
            Some(choice) => choice,
            None => return Ok(default),
        };
        if choice.is_empty() {
            return Ok(default);
        }
        if let Some(color) = Color::from_name(&choice) {
            return Ok(Some(color));
        }
        log::debug!("rejected color choice {:?}", choice);
        writeln!(out, "{}", INVALID_COLOR)?;
    }
}
