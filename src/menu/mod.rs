//! Menu model: identities, items, actions, and per-menu screens.

mod builder;
mod focus;
mod nav;
mod registry;
#[cfg(test)]
mod tests;

pub use builder::{build_screen, ScreenBuild};
pub use focus::{first_focus, next_index, previous_index};
pub use nav::Navigator;
pub use registry::{entries, EntryAction, DISPLAY_STATUS, OUTPUT_SOURCE_STATUS, VOLUME_STATUS};

use crate::devices::DeviceRecord;
use std::rc::Rc;

/// Identity of one menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    Main,
    Audio,
    Display,
    AudioOutputSelect,
}

impl MenuId {
    /// Pane title shown above the item list.
    pub fn title(self) -> &'static str {
        match self {
            MenuId::Main => "Settings",
            MenuId::Audio => "Audio",
            MenuId::Display => "Display",
            MenuId::AudioOutputSelect => "Audio Output",
        }
    }
}

/// What activating a focused item does.
///
/// Actions are command objects bound fresh on every screen build. The device
/// variant owns the enumeration snapshot it indexes into, so a directory whose
/// answers change after the build cannot redirect a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    Navigate(MenuId),
    SetStatus(&'static str),
    StatusThenNavigate {
        status: &'static str,
        target: MenuId,
    },
    SelectDevice {
        devices: Rc<[DeviceRecord]>,
        index: usize,
    },
    Exit,
}

/// One focusable row on a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: ItemAction,
}

/// Ordered items for the menu being shown. Rebuilt from scratch on every
/// transition, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub items: Vec<MenuItem>,
}

impl Screen {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }
}
