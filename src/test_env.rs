//! Shared lock for tests that touch process-wide environment variables.
//!
//! The harness runs every test module on parallel threads inside one process,
//! and `AppConfig::parse_from` reads the log env vars on each call. Any test
//! that sets, removes, or depends on those vars must hold this guard for its
//! whole body so a writer in one module cannot land mid-parse in another.

use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// A poisoned lock still serializes, so one failed test does not take the
/// rest of the env tests down with it.
pub(crate) fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
