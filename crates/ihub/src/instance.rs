//! Process-wide hub instance.
//!
//! The host API mandates a global accessor. Installation is one-time:
//! re-installing the same hub is a no-op, installing a different one is a
//! host-contract violation and aborts.

use crate::service::ImsHub;
use std::sync::OnceLock;

static INSTANCE: OnceLock<ImsHub> = OnceLock::new();

/// Installs `hub` as the process-wide instance.
///
/// # Panics
/// Panics if a different hub is already installed.
pub fn install(hub: ImsHub) {
    let stored = INSTANCE.get_or_init(|| hub.clone());
    assert!(
        ImsHub::same_hub(stored, &hub),
        "a different IMS hub is already installed for this process"
    );
}

/// The currently installed hub, if any.
#[must_use]
pub fn current() -> Option<ImsHub> {
    INSTANCE.get().cloned()
}
