//! Screen construction for each menu identity.

use super::registry::{self, EntryAction, BACK_LABEL};
use super::{ItemAction, MenuId, MenuItem, Screen};
use crate::devices::{DeviceDirectory, DeviceRecord};
use crate::log_debug;
use std::rc::Rc;
use std::time::Instant;

/// Result of building one screen: the items plus an optional status notice
/// produced while building. Directory failures surface through the notice so
/// the build itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenBuild {
    pub screen: Screen,
    pub notice: Option<String>,
}

/// Build the screen for `menu`. Static menus come from the registry tables;
/// the output-select screen pulls a fresh enumeration from `directory`.
pub fn build_screen(menu: MenuId, directory: &dyn DeviceDirectory) -> ScreenBuild {
    match menu {
        MenuId::Main | MenuId::Audio | MenuId::Display => ScreenBuild {
            screen: static_screen(menu),
            notice: None,
        },
        MenuId::AudioOutputSelect => device_screen(directory),
    }
}

fn static_screen(menu: MenuId) -> Screen {
    let items = registry::entries(menu)
        .iter()
        .map(|(label, action)| MenuItem {
            label: (*label).to_string(),
            action: bind(*action),
        })
        .collect();
    Screen { items }
}

fn bind(action: EntryAction) -> ItemAction {
    match action {
        EntryAction::Navigate(target) => ItemAction::Navigate(target),
        EntryAction::SetStatus(status) => ItemAction::SetStatus(status),
        EntryAction::StatusThenNavigate { status, target } => {
            ItemAction::StatusThenNavigate { status, target }
        }
        EntryAction::Exit => ItemAction::Exit,
    }
}

/// One device row per enumerated output, each action holding this build's
/// snapshot by value, then a trailing Back row. A failed or empty enumeration
/// still yields the Back row, so the screen is never empty.
fn device_screen(directory: &dyn DeviceDirectory) -> ScreenBuild {
    let started = Instant::now();
    let (devices, notice) = match directory.list_output_devices() {
        Ok(devices) => (devices, None),
        Err(err) => {
            log_debug(&format!("device listing failed: {err:#}"));
            (
                Vec::new(),
                Some(format!("Could not reach the audio service: {err:#}")),
            )
        }
    };
    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        devices = devices.len(),
        backend = directory.backend_name(),
        "output devices enumerated"
    );

    let devices: Rc<[DeviceRecord]> = devices.into();
    let mut items: Vec<MenuItem> = devices
        .iter()
        .enumerate()
        .map(|(index, record)| MenuItem {
            label: record.description.clone(),
            action: ItemAction::SelectDevice {
                devices: Rc::clone(&devices),
                index,
            },
        })
        .collect();
    items.push(MenuItem {
        label: BACK_LABEL.to_string(),
        action: ItemAction::Navigate(MenuId::Audio),
    });

    ScreenBuild {
        screen: Screen { items },
        notice,
    }
}
