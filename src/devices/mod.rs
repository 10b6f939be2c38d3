//! Audio output device directories.
//!
//! A directory answers "which outputs exist right now" and "make this one the
//! default". Answers describe the system at call time; callers must not cache
//! indices across calls because the device set can change between them.

mod native;
mod pactl;

pub use native::CpalDirectory;
pub use pactl::PactlDirectory;

use crate::config::{AppConfig, DeviceBackendKind};
use crate::log_debug;
use anyhow::Result;
use serde::Serialize;
use std::env;

/// Env var that swaps in a fixed device list for demos and integration tests.
/// Comma-separated descriptions; an empty value means zero devices.
pub const TEST_DEVICES_ENV: &str = "TERMSET_TEST_DEVICES";

/// One audio output endpoint as reported by a directory backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    /// Human-readable label shown in menus and listings.
    pub description: String,
    /// Opaque handle understood by the backend that produced it.
    pub name: String,
}

/// Live source of audio output devices.
pub trait DeviceDirectory {
    fn backend_name(&self) -> &'static str;

    /// Enumerate outputs in backend order. The returned sequence is the
    /// authoritative index space for exactly one screen build.
    fn list_output_devices(&self) -> Result<Vec<DeviceRecord>>;

    /// Make `record` the system default output.
    fn set_default_output(&self, record: &DeviceRecord) -> Result<()>;
}

/// Fixed in-memory directory behind the [`TEST_DEVICES_ENV`] override.
pub struct StaticDirectory {
    devices: Vec<DeviceRecord>,
}

impl StaticDirectory {
    pub fn new(devices: Vec<DeviceRecord>) -> Self {
        Self { devices }
    }

    /// Parse the comma-separated override value. Blank entries are skipped,
    /// so an empty value yields an empty directory.
    pub fn from_list(raw: &str) -> Self {
        let devices = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| DeviceRecord {
                description: entry.to_string(),
                name: entry.to_string(),
            })
            .collect();
        Self { devices }
    }
}

impl DeviceDirectory for StaticDirectory {
    fn backend_name(&self) -> &'static str {
        "static"
    }

    fn list_output_devices(&self) -> Result<Vec<DeviceRecord>> {
        Ok(self.devices.clone())
    }

    fn set_default_output(&self, _record: &DeviceRecord) -> Result<()> {
        Ok(())
    }
}

/// Honor the test override before touching real backends.
pub fn from_env_or_detect(config: &AppConfig) -> Box<dyn DeviceDirectory> {
    if let Ok(raw) = env::var(TEST_DEVICES_ENV) {
        log_debug(&format!(
            "using static device directory from {TEST_DEVICES_ENV}"
        ));
        return Box::new(StaticDirectory::from_list(&raw));
    }
    detect(config)
}

/// Pick a backend. An explicit `--device-backend` wins; auto probes pactl and
/// falls back to cpal enumeration when no PulseAudio/PipeWire daemon answers.
pub fn detect(config: &AppConfig) -> Box<dyn DeviceDirectory> {
    match config.device_backend {
        DeviceBackendKind::Pactl => Box::new(PactlDirectory::new(&config.pactl_cmd)),
        DeviceBackendKind::Cpal => Box::new(CpalDirectory::new()),
        DeviceBackendKind::Auto => {
            let pactl = PactlDirectory::new(&config.pactl_cmd);
            if pactl.probe() {
                Box::new(pactl)
            } else {
                log_debug("pactl probe failed, falling back to cpal enumeration");
                Box::new(CpalDirectory::new())
            }
        }
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedDirectory;
