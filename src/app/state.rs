use crate::config::AppConfig;
use crate::devices::{DeviceDirectory, DeviceRecord};
use crate::log_debug;
use crate::menu::{
    build_screen, first_focus, next_index, previous_index, ItemAction, MenuId, Navigator, Screen,
};
use std::time::{Duration, Instant};

/// Status panel text shown before any item has been activated.
pub const INITIAL_STATUS: &str = "Toggle Audio & Display settings";

/// Central application state shared between the event loop and renderer.
///
/// All mutation funnels through the action handlers below, and every handler
/// ends in [`App::refresh`], so the next frame always draws from a screen that
/// matches the current menu and status.
pub struct App {
    config: AppConfig,
    devices: Box<dyn DeviceDirectory>,
    nav: Navigator,
    screen: Screen,
    status: String,
    selected: Option<usize>,
    should_exit: bool,
    needs_redraw: bool,
}

impl App {
    /// Create the engine and build the first screen.
    pub fn new(config: AppConfig, devices: Box<dyn DeviceDirectory>) -> Self {
        let mut app = Self {
            config,
            devices,
            nav: Navigator::new(),
            screen: Screen::default(),
            status: INITIAL_STATUS.to_string(),
            selected: None,
            should_exit: false,
            needs_redraw: true,
        };
        app.refresh();
        app
    }

    pub fn current_menu(&self) -> MenuId {
        self.nav.current()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.poll_interval_ms)
    }

    pub(crate) fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn take_redraw_request(&mut self) -> bool {
        let requested = self.needs_redraw;
        self.needs_redraw = false;
        requested
    }

    /// Rebuild the screen for the current menu, apply any build notice to the
    /// status panel, and re-seat focus on the fresh screen. The one entry
    /// point after any state or status mutation.
    pub fn refresh(&mut self) {
        let build = build_screen(self.nav.current(), self.devices.as_ref());
        if let Some(notice) = build.notice {
            self.status = notice;
        }
        self.screen = build.screen;
        self.selected = first_focus(self.screen.len());
        self.request_redraw();
    }

    pub fn focus_next(&mut self) {
        let next = next_index(self.selected, self.screen.len());
        if next != self.selected {
            self.selected = next;
            self.request_redraw();
        }
    }

    pub fn focus_previous(&mut self) {
        let previous = previous_index(self.selected, self.screen.len());
        if previous != self.selected {
            self.selected = previous;
            self.request_redraw();
        }
    }

    /// Run the focused item's action, then refresh so the frame reflects the
    /// post-action state. With no focus there is nothing to do.
    pub fn activate_focused(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(action) = self.screen.items.get(index).map(|item| item.action.clone()) else {
            return;
        };

        match action {
            ItemAction::Navigate(target) => {
                log_debug(&format!("navigate -> {target:?}"));
                self.nav.transition(target);
            }
            ItemAction::SetStatus(status) => {
                self.status = status.to_string();
            }
            ItemAction::StatusThenNavigate { status, target } => {
                log_debug(&format!("navigate -> {target:?}"));
                self.status = status.to_string();
                self.nav.transition(target);
            }
            ItemAction::SelectDevice { devices, index } => {
                self.select_device(&devices, index);
            }
            ItemAction::Exit => {
                log_debug("exit requested from menu");
                self.should_exit = true;
                return;
            }
        }
        self.refresh();
    }

    /// Apply the device at `index` of the snapshot this action was built
    /// with. The snapshot, not a fresh enumeration, decides which record is
    /// handed to the backend.
    fn select_device(&mut self, devices: &[DeviceRecord], index: usize) {
        let Some(record) = devices.get(index) else {
            debug_assert!(false, "device action index out of range");
            return;
        };
        let started = Instant::now();
        match self.devices.set_default_output(record) {
            Ok(()) => {
                tracing::info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    device = %record.name,
                    "default output switched"
                );
                self.status = format!("Default output set to {}.", record.description);
            }
            Err(err) => {
                log_debug(&format!("device switch failed: {err:#}"));
                self.status = format!("Could not switch the audio output: {err:#}");
            }
        }
    }
}
