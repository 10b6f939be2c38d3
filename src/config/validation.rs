use super::{AppConfig, MAX_DEVICE_NAME_BYTES, MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS};
use anyhow::{anyhow, bail, Context, Result};
use std::{fs, path::Path};

impl AppConfig {
    /// Check CLI values and normalize paths.
    pub fn validate(&mut self) -> Result<()> {
        if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            bail!(
                "--poll-interval-ms must be between {MIN_POLL_INTERVAL_MS} and {MAX_POLL_INTERVAL_MS}, got {}",
                self.poll_interval_ms
            );
        }

        if self.json && !self.list_output_devices {
            bail!("--json only applies together with --list-output-devices");
        }

        // The name is handed to pactl as a single argv entry, so only sanity limits apply.
        if let Some(name) = &self.set_output {
            if name.trim().is_empty() {
                bail!("--set-output requires a non-empty device name");
            }
            if name.len() > MAX_DEVICE_NAME_BYTES {
                bail!("--set-output name must be <={MAX_DEVICE_NAME_BYTES} bytes");
            }
            if name.chars().any(char::is_control) {
                bail!("--set-output name must not contain control characters");
            }
        }

        self.pactl_cmd = sanitize_binary(&self.pactl_cmd, "--pactl-cmd", &["pactl"])?;

        Ok(())
    }
}

/// Allow either a known binary name or an absolute path.
pub(super) fn sanitize_binary(value: &str, flag: &str, allowlist: &[&str]) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail!("{flag} cannot be empty");
    }
    if let Some(allowed) = allowlist
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(trimmed))
    {
        return Ok((*allowed).to_string());
    }

    let path = Path::new(trimmed);
    if path.is_absolute() || trimmed.contains(std::path::MAIN_SEPARATOR) {
        let canonical = path
            .canonicalize()
            .with_context(|| format!("failed to canonicalize {flag} '{trimmed}'"))?;
        let metadata = fs::metadata(&canonical)
            .with_context(|| format!("failed to inspect {flag} '{}'", canonical.display()))?;
        if !metadata.is_file() {
            bail!("{flag} '{}' is not a file", canonical.display());
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = metadata.permissions().mode();
            if mode & 0o111 == 0 {
                bail!(
                    "{flag} '{}' exists but is not executable (mode {:o})",
                    canonical.display(),
                    mode
                );
            }
        }
        return canonical
            .to_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow!("{flag} must be valid UTF-8"));
    }

    bail!("{flag} must be one of {allowlist:?} or an existing binary path");
}
