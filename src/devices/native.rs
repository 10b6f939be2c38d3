//! Output enumeration through the system audio host.

use super::{DeviceDirectory, DeviceRecord};
use anyhow::{bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait};

/// Directory backed by the default cpal host.
///
/// Enumeration works on every platform the host supports. Changing the
/// default output is an OS mixer operation the host API does not expose, so
/// `set_default_output` always reports a backend failure and the UI shows it
/// as a status message.
pub struct CpalDirectory;

impl CpalDirectory {
    pub fn new() -> Self {
        CpalDirectory
    }
}

impl Default for CpalDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDirectory for CpalDirectory {
    fn backend_name(&self) -> &'static str {
        "cpal"
    }

    fn list_output_devices(&self) -> Result<Vec<DeviceRecord>> {
        let host = cpal::default_host();
        let devices = host
            .output_devices()
            .context("no output devices available")?;
        let mut records = Vec::new();
        for device in devices {
            if let Ok(name) = device.name() {
                records.push(DeviceRecord {
                    description: name.clone(),
                    name,
                });
            }
        }
        Ok(records)
    }

    fn set_default_output(&self, record: &DeviceRecord) -> Result<()> {
        bail!(
            "the cpal backend cannot switch the default output (wanted '{}'); run with --device-backend pactl on PulseAudio/PipeWire systems",
            record.description
        );
    }
}
