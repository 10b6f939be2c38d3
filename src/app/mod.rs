//! Engine state and file logging for the settings navigator.

mod logging;
mod state;

#[cfg(test)]
pub(crate) use logging::set_logging_for_tests;
pub use logging::{crash_log_path, init_logging, log_debug, log_file_path, log_panic};
pub use state::{App, INITIAL_STATUS};
