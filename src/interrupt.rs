//! Ctrl+C handling for the scroll loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Global flag for handling Ctrl+C across the application
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Longest uninterrupted sleep inside [`pause`].
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Check if Ctrl+C has been received.
pub fn ctrlc_received() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

/// Set up the Ctrl+C handler.
///
/// This should be called once, after the interactive prompts, so that
/// Ctrl+C at a prompt still terminates the process the usual way.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
    })
}

/// Sleep for `duration`, waking early once `should_stop` returns true.
///
/// Returns `false` if the pause was cut short.
pub fn pause(duration: Duration, should_stop: &dyn Fn() -> bool) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if should_stop() {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(POLL_INTERVAL));
    }
}
