use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use termset::{
    config::AppConfig, devices, doctor::base_doctor_report, init_logging, log_debug,
    log_file_path, ui, App,
};

#[cfg(not(test))]
fn main() -> Result<()> {
    run_with_args(env::args_os())
}

#[cfg_attr(test, allow(dead_code))]
fn run_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut config = AppConfig::parse_from(args);
    if config.doctor {
        let report = base_doctor_report(&config, "termset");
        println!("{}", report.render());
        return Ok(());
    }

    config.validate()?;

    if config.list_output_devices {
        let output = list_output_devices_report(&config)?;
        print!("{output}");
        return Ok(());
    }

    if let Some(wanted) = config.set_output.clone() {
        let output = set_output_report(&config, &wanted)?;
        print!("{output}");
        return Ok(());
    }

    init_logging(&config);
    let log_path = log_file_path();
    log_debug("=== Termset Started ===");
    log_debug(&format!("Log file: {log_path:?}"));

    let directory = devices::from_env_or_detect(&config);
    log_debug(&format!("device backend: {}", directory.backend_name()));
    let mut app = App::new(config, directory);
    let result = ui::run_app(&mut app);

    log_debug("=== Termset Exiting ===");
    if let Err(ref e) = result {
        log_debug(&format!("Exit with error: {e:#}"));
    }

    result
}

fn list_output_devices_report(config: &AppConfig) -> Result<String> {
    let directory = devices::from_env_or_detect(config);
    let outputs = directory
        .list_output_devices()
        .context("failed to list audio output devices")?;

    if config.json {
        let mut output = serde_json::to_string_pretty(&outputs)?;
        output.push('\n');
        return Ok(output);
    }

    let mut output = String::new();
    if outputs.is_empty() {
        output.push_str("No audio output devices detected.\n");
    } else {
        output.push_str("Available audio output devices:\n");
        for device in outputs {
            if device.name == device.description {
                output.push_str(&format!("  - {}\n", device.description));
            } else {
                output.push_str(&format!("  - {} ({})\n", device.description, device.name));
            }
        }
    }
    Ok(output)
}

fn set_output_report(config: &AppConfig, wanted: &str) -> Result<String> {
    let directory = devices::from_env_or_detect(config);
    let outputs = directory
        .list_output_devices()
        .context("failed to list audio output devices")?;
    // Accept either the backend handle or the human-readable label.
    let record = outputs
        .iter()
        .find(|device| device.name == wanted)
        .or_else(|| outputs.iter().find(|device| device.description == wanted))
        .with_context(|| {
            format!("no output named '{wanted}'; run --list-output-devices to see what is attached")
        })?;
    directory.set_default_output(record).with_context(|| {
        format!(
            "could not switch the default output to '{}'",
            record.description
        )
    })?;
    Ok(format!("Default output set to {}.\n", record.description))
}
