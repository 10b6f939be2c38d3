//! Static menu tables so screens render and dispatch from one schema.

use super::MenuId;

pub const BACK_LABEL: &str = "Back";

pub const VOLUME_STATUS: &str = "Volume settings opened.";
pub const OUTPUT_SOURCE_STATUS: &str = "Audio output settings opened.";
pub const DISPLAY_STATUS: &str = "Display settings are not available yet.";

/// Action descriptor for statically registered menus. Descriptors carry no
/// runtime data, so the tables below can live in consts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Navigate(MenuId),
    SetStatus(&'static str),
    StatusThenNavigate {
        status: &'static str,
        target: MenuId,
    },
    Exit,
}

pub const MAIN_ENTRIES: &[(&str, EntryAction)] = &[
    ("Audio", EntryAction::Navigate(MenuId::Audio)),
    (
        "Display",
        EntryAction::StatusThenNavigate {
            status: DISPLAY_STATUS,
            target: MenuId::Display,
        },
    ),
    ("Exit", EntryAction::Exit),
];

pub const AUDIO_ENTRIES: &[(&str, EntryAction)] = &[
    ("Volume", EntryAction::SetStatus(VOLUME_STATUS)),
    (
        "Output Source",
        EntryAction::StatusThenNavigate {
            status: OUTPUT_SOURCE_STATUS,
            target: MenuId::AudioOutputSelect,
        },
    ),
    (BACK_LABEL, EntryAction::Navigate(MenuId::Main)),
];

pub const DISPLAY_ENTRIES: &[(&str, EntryAction)] =
    &[(BACK_LABEL, EntryAction::Navigate(MenuId::Main))];

/// Table for a static menu. The device screen is assembled by the screen
/// builder from a live enumeration and has no table here.
pub fn entries(menu: MenuId) -> &'static [(&'static str, EntryAction)] {
    match menu {
        MenuId::Main => MAIN_ENTRIES,
        MenuId::Audio => AUDIO_ENTRIES,
        MenuId::Display => DISPLAY_ENTRIES,
        MenuId::AudioOutputSelect => {
            debug_assert!(false, "device screen has no static table");
            &[]
        }
    }
}
