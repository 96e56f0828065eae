//! Process signal flags.
//!
//! SIGINT requests a cooperative shutdown; SIGQUIT toggles verbose
//! per-fd I/O tracing. The handlers only flip an atomic — the reactor
//! observes both flags between readiness waits, and an interrupted
//! `poll` is simply retried.

use std::sync::atomic::{AtomicBool, Ordering};

use signal_hook::consts::{SIGINT, SIGQUIT};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);
static DEBUG: AtomicBool = AtomicBool::new(false);

/// Install the SIGINT/SIGQUIT handlers. Call once before the reactor
/// starts.
pub fn install() -> Result<(), std::io::Error> {
    // Nothing but atomic stores may happen inside a signal handler.
    unsafe {
        signal_hook::low_level::register(SIGINT, || SHUTDOWN.store(true, Ordering::SeqCst))?;
        signal_hook::low_level::register(SIGQUIT, || {
            DEBUG.fetch_xor(true, Ordering::SeqCst);
        })?;
    }
    Ok(())
}

/// True once SIGINT has been delivered; the reactor exits after the
/// current tick.
pub fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

/// True while SIGQUIT has toggled tracing on.
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::SeqCst)
}
