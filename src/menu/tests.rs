use super::{
    build_screen, entries, first_focus, next_index, previous_index, ItemAction, MenuId, Navigator,
    DISPLAY_STATUS, OUTPUT_SOURCE_STATUS, VOLUME_STATUS,
};
use crate::devices::ScriptedDirectory;

const ALL_MENUS: &[MenuId] = &[
    MenuId::Main,
    MenuId::Audio,
    MenuId::Display,
    MenuId::AudioOutputSelect,
];

#[test]
fn every_menu_builds_at_least_one_item() {
    let directory = ScriptedDirectory::with_devices(&["Speakers", "Headphones"]);
    for menu in ALL_MENUS {
        let build = build_screen(*menu, &directory);
        assert!(!build.screen.is_empty(), "{menu:?} built an empty screen");
    }
}

#[test]
fn every_menu_builds_items_even_without_devices() {
    let directory = ScriptedDirectory::default();
    for menu in ALL_MENUS {
        let build = build_screen(*menu, &directory);
        assert!(!build.screen.is_empty(), "{menu:?} built an empty screen");
    }
}

#[test]
fn main_screen_matches_registry_table() {
    let directory = ScriptedDirectory::default();
    let build = build_screen(MenuId::Main, &directory);
    assert_eq!(build.screen.labels(), vec!["Audio", "Display", "Exit"]);
    assert_eq!(build.notice, None);
    assert_eq!(
        build.screen.items[0].action,
        ItemAction::Navigate(MenuId::Audio)
    );
    assert_eq!(
        build.screen.items[1].action,
        ItemAction::StatusThenNavigate {
            status: DISPLAY_STATUS,
            target: MenuId::Display,
        }
    );
    assert_eq!(build.screen.items[2].action, ItemAction::Exit);
}

#[test]
fn audio_screen_matches_registry_table() {
    let directory = ScriptedDirectory::default();
    let build = build_screen(MenuId::Audio, &directory);
    assert_eq!(build.screen.labels(), vec!["Volume", "Output Source", "Back"]);
    assert_eq!(
        build.screen.items[0].action,
        ItemAction::SetStatus(VOLUME_STATUS)
    );
    assert_eq!(
        build.screen.items[1].action,
        ItemAction::StatusThenNavigate {
            status: OUTPUT_SOURCE_STATUS,
            target: MenuId::AudioOutputSelect,
        }
    );
    assert_eq!(
        build.screen.items[2].action,
        ItemAction::Navigate(MenuId::Main)
    );
}

#[test]
fn display_screen_is_back_only() {
    let directory = ScriptedDirectory::default();
    let build = build_screen(MenuId::Display, &directory);
    assert_eq!(build.screen.labels(), vec!["Back"]);
    assert_eq!(
        build.screen.items[0].action,
        ItemAction::Navigate(MenuId::Main)
    );
}

#[test]
fn device_screen_lists_devices_then_back() {
    let directory = ScriptedDirectory::with_devices(&["Speakers", "Headphones", "HDMI"]);
    let build = build_screen(MenuId::AudioOutputSelect, &directory);
    assert_eq!(
        build.screen.labels(),
        vec!["Speakers", "Headphones", "HDMI", "Back"]
    );
    assert_eq!(build.notice, None);
    for (index, item) in build.screen.items.iter().take(3).enumerate() {
        match &item.action {
            ItemAction::SelectDevice {
                devices,
                index: captured,
            } => {
                assert_eq!(*captured, index);
                assert_eq!(devices.len(), 3);
                assert_eq!(devices[index].description, item.label);
            }
            other => panic!("expected a device action, got {other:?}"),
        }
    }
    assert_eq!(
        build.screen.items[3].action,
        ItemAction::Navigate(MenuId::Audio)
    );
}

#[test]
fn device_screen_without_devices_keeps_back() {
    let directory = ScriptedDirectory::default();
    let build = build_screen(MenuId::AudioOutputSelect, &directory);
    assert_eq!(build.screen.labels(), vec!["Back"]);
    assert_eq!(build.notice, None);
}

#[test]
fn device_screen_failure_reports_notice_with_back_row() {
    let directory = ScriptedDirectory::default();
    directory.set_fail_listing(true);
    let build = build_screen(MenuId::AudioOutputSelect, &directory);
    assert_eq!(build.screen.labels(), vec!["Back"]);
    let notice = build.notice.expect("listing failure should carry a notice");
    assert!(
        notice.starts_with("Could not reach the audio service:"),
        "unexpected notice: {notice}"
    );
}

#[test]
fn device_screen_enumerates_exactly_once_per_build() {
    let directory = ScriptedDirectory::with_devices(&["Speakers"]);
    build_screen(MenuId::AudioOutputSelect, &directory);
    assert_eq!(directory.list_calls(), 1);
}

#[test]
fn device_actions_hold_the_build_snapshot() {
    let directory = ScriptedDirectory::with_devices(&["Speakers", "Headphones"]);
    let build = build_screen(MenuId::AudioOutputSelect, &directory);

    // The directory changes its mind after the build.
    directory.set_devices(&["HDMI"]);

    let ItemAction::SelectDevice { devices, index } = &build.screen.items[1].action else {
        panic!("expected a device action");
    };
    assert_eq!(*index, 1);
    assert_eq!(devices[*index].description, "Headphones");
}

#[test]
fn rebuilding_main_reproduces_labels() {
    let directory = ScriptedDirectory::default();
    let first = build_screen(MenuId::Main, &directory);
    build_screen(MenuId::Audio, &directory);
    let second = build_screen(MenuId::Main, &directory);
    assert_eq!(first.screen.labels(), second.screen.labels());
}

#[test]
fn registry_has_no_table_for_the_device_screen() {
    assert_eq!(entries(MenuId::Main).len(), 3);
    assert_eq!(entries(MenuId::Audio).len(), 3);
    assert_eq!(entries(MenuId::Display).len(), 1);
}

#[test]
fn navigator_starts_at_main() {
    let nav = Navigator::new();
    assert_eq!(nav.current(), MenuId::Main);
}

#[test]
fn navigator_transition_overwrites_current() {
    let mut nav = Navigator::new();
    nav.transition(MenuId::Audio);
    assert_eq!(nav.current(), MenuId::Audio);
    nav.transition(MenuId::AudioOutputSelect);
    assert_eq!(nav.current(), MenuId::AudioOutputSelect);
    nav.transition(MenuId::Main);
    assert_eq!(nav.current(), MenuId::Main);
}

#[test]
fn first_focus_lands_on_first_item() {
    assert_eq!(first_focus(3), Some(0));
    assert_eq!(first_focus(1), Some(0));
}

#[test]
fn first_focus_is_unset_for_empty_screens() {
    assert_eq!(first_focus(0), None);
}

#[test]
fn focus_moves_wrap_around() {
    assert_eq!(next_index(Some(0), 3), Some(1));
    assert_eq!(next_index(Some(2), 3), Some(0));
    assert_eq!(previous_index(Some(1), 3), Some(0));
    assert_eq!(previous_index(Some(0), 3), Some(2));
}

#[test]
fn focus_moves_seat_an_unset_focus() {
    assert_eq!(next_index(None, 3), Some(0));
    assert_eq!(previous_index(None, 3), Some(2));
}

#[test]
fn focus_moves_ignore_empty_screens() {
    assert_eq!(next_index(None, 0), None);
    assert_eq!(previous_index(Some(1), 0), None);
}
