//! Menu-identity state machine.

use super::MenuId;

/// Tracks which menu is current. `transition` overwrites unconditionally; the
/// refresh driver rebuilds the screen afterwards, so stale screen state can
/// never outlive a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: MenuId,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: MenuId::Main,
        }
    }

    pub fn current(&self) -> MenuId {
        self.current
    }

    pub fn transition(&mut self, target: MenuId) {
        self.current = target;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
