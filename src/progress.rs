//! Status and progress reporting.
//! The observer is injected by the caller and invoked synchronously at phase
//! checkpoints; it is purely advisory and never read back by the stage.

/// Receives phase status messages and progress markers during the build.
///
/// Each phase emits a textual message followed by a numeric percentage
/// (25, 40, 50, ...) before it starts working.
pub trait ProgressObserver {
    fn on_message(&self, message: &str);
    fn on_progress(&self, percent: u8);
}

/// Observer that discards all notifications.
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_message(&self, _message: &str) {}
    fn on_progress(&self, _percent: u8) {}
}

/// Observer that forwards notifications to the `log` crate at info level.
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_message(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_progress(&self, percent: u8) {
        log::info!("{}%", percent);
    }
}
