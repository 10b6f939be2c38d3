use crate::config::AppConfig;
use crate::devices;
use crate::telemetry::tracing_log_path;
use crate::{crash_log_path, log_file_path};
use crossterm::terminal::size as terminal_size;
use std::{env, fmt::Display};

pub struct DoctorReport {
    lines: Vec<String>,
}

impl DoctorReport {
    pub fn new(title: &str) -> Self {
        Self {
            lines: vec![title.to_string()],
        }
    }

    pub fn section(&mut self, title: &str) {
        self.lines.push(String::new());
        self.lines.push(format!("{title}:"));
    }

    pub fn push_kv(&mut self, key: &str, value: impl Display) {
        self.lines.push(format!("  {key}: {value}"));
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn base_doctor_report(config: &AppConfig, binary_name: &str) -> DoctorReport {
    let mut report = DoctorReport::new("Termset Doctor");
    report.push_kv("version", env!("CARGO_PKG_VERSION"));
    report.push_kv("binary", binary_name);
    report.push_kv("os", format!("{}/{}", env::consts::OS, env::consts::ARCH));

    let mut validated = config.clone();
    let validation_result = validated.validate();
    let resolved = validation_result
        .as_ref()
        .map(|_| &validated)
        .unwrap_or(config);

    report.section("Terminal");
    match terminal_size() {
        Ok((cols, rows)) => report.push_kv("size", format!("{cols}x{rows}")),
        Err(err) => report.push_kv("size", format!("error: {err}")),
    }
    if let Ok(term) = env::var("TERM") {
        report.push_kv("term", term);
    }
    if let Ok(colorterm) = env::var("COLORTERM") {
        report.push_kv("colorterm", colorterm);
    }
    // The menu palette uses RGB colors, so truecolor support matters here.
    report.push_kv("color_mode", color_support());
    report.push_kv("unicode", utf8_locale());
    report.push_kv("mouse_capture", "disabled (keyboard-only navigation)");

    report.section("Config");
    match validation_result {
        Ok(()) => report.push_kv("validation", "ok"),
        Err(err) => report.push_kv("validation", format!("error: {err}")),
    }
    let logs_enabled = resolved.logs && !resolved.no_logs;
    report.push_kv("logs", if logs_enabled { "enabled" } else { "disabled" });
    report.push_kv("log_file", log_file_path().display());
    report.push_kv("crash_log", crash_log_path().display());
    report.push_kv("trace_log", tracing_log_path().display());
    report.push_kv("device_backend", resolved.device_backend.label());
    report.push_kv("pactl_cmd", &resolved.pactl_cmd);
    report.push_kv("poll_interval_ms", resolved.poll_interval_ms);

    report.section("Audio");
    if env::var(devices::TEST_DEVICES_ENV).is_ok() {
        report.push_kv("device_override", devices::TEST_DEVICES_ENV);
    }
    let directory = devices::from_env_or_detect(resolved);
    report.push_kv("backend", directory.backend_name());
    match directory.list_output_devices() {
        Ok(outputs) => {
            report.push_kv("output_count", outputs.len());
            if outputs.is_empty() {
                report.push_kv("outputs", "none");
            } else {
                report.push_line("  outputs:");
                for device in outputs {
                    if device.name == device.description {
                        report.push_line(format!("    - {}", device.description));
                    } else {
                        report.push_line(format!(
                            "    - {} ({})",
                            device.description, device.name
                        ));
                    }
                }
            }
        }
        Err(err) => report.push_kv("outputs", format!("error: {err:#}")),
    }

    report
}

fn color_support() -> String {
    if env::var("NO_COLOR").is_ok() {
        return "none (NO_COLOR)".to_string();
    }
    if let Ok(colorterm) = env::var("COLORTERM") {
        let value = colorterm.to_lowercase();
        if value == "truecolor" || value == "24bit" {
            return format!("truecolor (COLORTERM={colorterm})");
        }
    }
    if let Ok(term) = env::var("TERM") {
        let value = term.to_lowercase();
        if value.contains("256color") {
            return format!("256 (TERM={term})");
        }
        if value == "dumb" {
            return "none (TERM=dumb)".to_string();
        }
        if value.contains("color") || value.contains("xterm") || value.contains("screen") {
            return format!("ansi (TERM={term})");
        }
    }
    "ansi (default)".to_string()
}

fn utf8_locale() -> String {
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = env::var(key) {
            let upper = value.to_ascii_uppercase();
            if upper.contains("UTF-8") || upper.contains("UTF8") {
                return format!("likely ({key}={value})");
            }
            return format!("unknown ({key}={value})");
        }
    }
    "unknown (locale env not set)".to_string()
}
