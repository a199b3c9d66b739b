//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Safe to call more than once; later
/// calls are ignored.
pub fn init() {
    let _ = env_logger::try_init();
}
