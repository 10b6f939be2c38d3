//! Command-line parsing and validation helpers.

mod validation;

use clap::{Parser, ValueEnum};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
pub(crate) const MIN_POLL_INTERVAL_MS: u64 = 10;
pub(crate) const MAX_POLL_INTERVAL_MS: u64 = 2_000;
pub(crate) const MAX_DEVICE_NAME_BYTES: usize = 256;

/// CLI options for the termset TUI. Validated values keep the pactl subprocess safe.
#[derive(Debug, Parser, Clone)]
#[command(about = "Terminal settings navigator", author, version)]
pub struct AppConfig {
    /// Print detected audio output devices and exit
    #[arg(long = "list-output-devices", default_value_t = false)]
    pub list_output_devices: bool,

    /// Emit the device listing as JSON (requires --list-output-devices)
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// Switch the default audio output to NAME and exit
    #[arg(long = "set-output", value_name = "NAME")]
    pub set_output: Option<String>,

    /// Print environment diagnostics and exit
    #[arg(long = "doctor", default_value_t = false)]
    pub doctor: bool,

    /// Audio backend used to list and switch output devices
    #[arg(
        long = "device-backend",
        value_enum,
        default_value_t = DeviceBackendKind::Auto
    )]
    pub device_backend: DeviceBackendKind,

    /// pactl binary location
    #[arg(long = "pactl-cmd", default_value = "pactl")]
    pub pactl_cmd: String,

    /// Keyboard poll interval for the event loop (milliseconds)
    #[arg(long = "poll-interval-ms", default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// Enable file logging (debug)
    // BoolishValueParser so TERMSET_LOGS=1 behaves like TERMSET_LOGS=true.
    #[arg(
        long = "logs",
        env = "TERMSET_LOGS",
        default_value_t = false,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(
        long = "no-logs",
        env = "TERMSET_NO_LOGS",
        default_value_t = false,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_logs: bool,
}

/// Runtime-selectable device directory backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeviceBackendKind {
    Auto,
    Pactl,
    Cpal,
}

impl DeviceBackendKind {
    pub fn label(self) -> &'static str {
        match self {
            DeviceBackendKind::Auto => "auto",
            DeviceBackendKind::Pactl => "pactl",
            DeviceBackendKind::Cpal => "cpal",
        }
    }
}
