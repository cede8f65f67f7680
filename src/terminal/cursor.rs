//! Hidden-cursor management with panic-safe cleanup.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use super::ansi::{HIDE_CURSOR, SHOW_CURSOR};

/// Static flag to track if the terminal cursor is hidden (for panic handler).
/// Only guards created with [`CursorGuard::hide_terminal`] set it.
pub(crate) static CURSOR_HIDDEN: AtomicBool = AtomicBool::new(false);

/// Guard that shows the cursor again when dropped.
///
/// The guard owns the output it was created with and forwards writes to
/// it, so everything drawn while the cursor is hidden goes through the
/// guard. Drop covers normal exits, early returns via `?`, and unwinding.
pub struct CursorGuard<W: Write> {
    out: W,
    /// Whether this guard is responsible for cleanup
    active: bool,
    /// Whether `out` is the process stdout shared with the panic hook
    terminal: bool,
}

impl<W: Write> CursorGuard<W> {
    /// Hide the cursor on `out` and return a guard that restores it.
    ///
    /// Restoration happens only through the guard; use
    /// [`CursorGuard::hide_terminal`] when `out` is the process stdout.
    ///
    /// # Errors
    /// Returns an error if writing the escape sequence fails
    pub fn hide(out: W) -> io::Result<Self> {
        Self::hide_inner(out, false)
    }

    /// Hide the cursor on stdout (`out` must write to the process stdout).
    ///
    /// Also arms a panic hook that shows the cursor before the panic
    /// message is printed. Whichever of the hook and the guard runs first
    /// restores the cursor; the other does nothing.
    pub fn hide_terminal(out: W) -> io::Result<Self> {
        install_panic_hook();
        Self::hide_inner(out, true)
    }

    fn hide_inner(mut out: W, terminal: bool) -> io::Result<Self> {
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        if terminal {
            CURSOR_HIDDEN.store(true, Ordering::SeqCst);
        }

        Ok(Self {
            out,
            active: true,
            terminal,
        })
    }

    /// Show the cursor now. After calling this, drop is a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        // The panic hook got there first
        if self.terminal && !CURSOR_HIDDEN.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        self.out.write_all(SHOW_CURSOR.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Write for CursorGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        // Best-effort cleanup - ignore errors during drop
        let _ = self.restore();
    }
}

/// Install a panic hook that shows the cursor before the panic message.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if CURSOR_HIDDEN.swap(false, Ordering::SeqCst) {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(SHOW_CURSOR.as_bytes());
            let _ = stdout.flush();
        }

        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_hides_and_restores_on_drop() {
        let mut out: Vec<u8> = Vec::new();
        {
            let mut guard = CursorGuard::hide(&mut out).expect("hide cursor");
            guard.write_all(b"frame").unwrap();
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}frame{}", HIDE_CURSOR, SHOW_CURSOR)
        );
    }

    #[test]
    fn test_guard_manual_restore_is_idempotent() {
        let mut out: Vec<u8> = Vec::new();
        {
            let mut guard = CursorGuard::hide(&mut out).expect("hide cursor");
            guard.restore().unwrap();
            guard.restore().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(SHOW_CURSOR).count(), 1);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn draw(out: &mut Vec<u8>) -> io::Result<()> {
            let _guard = CursorGuard::hide(out)?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }

        let mut out = Vec::new();
        assert!(draw(&mut out).is_err());
        assert!(String::from_utf8(out).unwrap().ends_with(SHOW_CURSOR));
    }

    #[test]
    fn test_plain_guard_leaves_terminal_flag_alone() {
        let guard = CursorGuard::hide(Vec::new()).expect("hide cursor");
        assert!(!guard.terminal);
    }

    #[test]
    fn test_terminal_guard_skips_restore_after_panic_hook() {
        let mut out: Vec<u8> = Vec::new();
        {
            let _guard = CursorGuard::hide_terminal(&mut out).expect("hide cursor");
            assert!(CURSOR_HIDDEN.load(Ordering::SeqCst));
            // What the panic hook does before unwinding reaches the guard
            CURSOR_HIDDEN.store(false, Ordering::SeqCst);
        }
        assert_eq!(String::from_utf8(out).unwrap(), HIDE_CURSOR);

        let mut out: Vec<u8> = Vec::new();
        {
            let _guard = CursorGuard::hide_terminal(&mut out).expect("hide cursor");
        }
        assert!(!CURSOR_HIDDEN.load(Ordering::SeqCst));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}{}", HIDE_CURSOR, SHOW_CURSOR)
        );
    }

    #[test]
    fn test_panic_hook_installation() {
        install_panic_hook();
        install_panic_hook(); // Second call should be no-op
    }
}
