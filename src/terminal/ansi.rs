//! Raw ANSI escape sequences used by the banner.

/// Hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Move the cursor home and clear the screen.
pub const CLEAR_AND_HOME: &str = "\x1b[H\x1b[2J";

/// Reset all attributes.
pub const RESET_COLOR: &str = "\x1b[0m";
