//! PulseAudio/PipeWire directory that shells out to `pactl`.
//!
//! pactl is the one interface that can both enumerate sinks and change the
//! default on PulseAudio and PipeWire systems, so this backend covers the
//! common Linux desktop. Listing uses the JSON output format added in
//! PulseAudio 16.

use super::{DeviceDirectory, DeviceRecord};
use crate::log_debug;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::process::{Command, Stdio};

/// Sink entry as printed by `pactl --format=json list sinks`. Only the fields
/// we read are declared; the real output carries dozens more.
#[derive(Debug, Deserialize)]
struct PactlSink {
    name: String,
    #[serde(default)]
    description: String,
}

pub struct PactlDirectory {
    pactl_cmd: String,
}

impl PactlDirectory {
    pub fn new(pactl_cmd: &str) -> Self {
        Self {
            pactl_cmd: pactl_cmd.to_string(),
        }
    }

    /// Cheap availability check used by backend auto-detection. `pactl info`
    /// fails fast when no daemon is listening.
    pub fn probe(&self) -> bool {
        Command::new(&self.pactl_cmd)
            .arg("info")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn run_pactl(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.pactl_cmd)
            .args(args)
            .output()
            .with_context(|| format!("failed to run {} {}", self.pactl_cmd, args.join(" ")))?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if !output.status.success() {
            return Err(anyhow!(
                "{} {} failed with status {}: {}",
                self.pactl_cmd,
                args.join(" "),
                output.status,
                stderr.trim()
            ));
        }
        Ok(stdout)
    }
}

impl DeviceDirectory for PactlDirectory {
    fn backend_name(&self) -> &'static str {
        "pactl"
    }

    fn list_output_devices(&self) -> Result<Vec<DeviceRecord>> {
        let raw = self.run_pactl(&["--format=json", "list", "sinks"])?;
        parse_sink_listing(&raw)
    }

    fn set_default_output(&self, record: &DeviceRecord) -> Result<()> {
        self.run_pactl(&["set-default-sink", &record.name])?;
        log_debug(&format!("default sink set to {}", record.name));
        Ok(())
    }
}

/// Parse the sink array, falling back to the sink name when a description is
/// missing (monitor sinks sometimes ship without one).
pub(super) fn parse_sink_listing(raw: &str) -> Result<Vec<DeviceRecord>> {
    let sinks: Vec<PactlSink> =
        serde_json::from_str(raw.trim()).context("failed to parse pactl sink listing")?;
    Ok(sinks
        .into_iter()
        .map(|sink| DeviceRecord {
            description: if sink.description.is_empty() {
                sink.name.clone()
            } else {
                sink.description
            },
            name: sink.name,
        })
        .collect())
}
