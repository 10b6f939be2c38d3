pub mod config;
pub mod devices;
pub mod doctor;
pub mod menu;
pub mod terminal_restore;
pub mod ui;

mod app;
mod telemetry;
#[cfg(test)]
mod test_env;

pub use app::{crash_log_path, init_logging, log_debug, log_file_path, log_panic};
pub use app::{App, INITIAL_STATUS};
