//! MMTel feature slice: the per-slot voice/video-over-IMS feature handle.
//!
//! Enabling the feature starts a registration attempt on the paired
//! [`ImsRegistration`]; disabling it tears the registration down. The actual
//! session/media signalling lives below the radio seam and is out of scope
//! here — this handle owns the feature lifecycle and its capability set.

mod error;

pub use crate::error::{MmTelError, MmTelErrorExt};

use bitflags::bitflags;
use ihub_domain::SlotId;
use ihub_event_bus::EventBus;
use ihub_registration::ImsRegistration;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

bitflags! {
    /// MMTel service capabilities a slot can offer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MmTelCapabilities: u32 {
        const VOICE = 1 << 0;
        const VIDEO = 1 << 1;
        const SMS = 1 << 2;
    }
}

/// Broadcast whenever a slot's MMTel feature is enabled or disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmTelStatusChanged {
    pub slot: SlotId,
    pub enabled: bool,
}

/// Per-slot MMTel feature handle.
///
/// Constructed once per slot by the registry, paired with the slot's
/// registration handle for its whole lifetime.
#[ihub_derive::slot_handle]
pub struct MmTelFeature {
    slot: SlotId,
    enabled: AtomicBool,
    capabilities: RwLock<MmTelCapabilities>,
    registration: ImsRegistration,
    events: EventBus,
}

impl MmTelFeature {
    /// Creates the MMTel handle for `slot`, initially disabled with voice capability.
    #[must_use]
    pub fn create(slot: SlotId, registration: ImsRegistration, events: EventBus) -> Self {
        Self::new(MmTelFeatureInner {
            slot,
            enabled: AtomicBool::new(false),
            capabilities: RwLock::new(MmTelCapabilities::VOICE),
            registration,
            events,
        })
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn capabilities(&self) -> MmTelCapabilities {
        *self.inner.capabilities.read()
    }

    pub fn set_capabilities(&self, capabilities: MmTelCapabilities) {
        *self.inner.capabilities.write() = capabilities;
    }

    /// The registration handle created alongside this feature.
    #[must_use]
    pub fn registration(&self) -> &ImsRegistration {
        &self.inner.registration
    }

    /// Enables the feature and starts an IMS registration attempt.
    ///
    /// Enabling an already-enabled feature re-attempts registration; the radio
    /// layer treats that as a refresh.
    ///
    /// # Errors
    /// Propagates failures from the paired registration handle.
    pub fn register(&self) -> Result<(), MmTelError> {
        self.inner.enabled.store(true, Ordering::Release);
        info!(slot = self.inner.slot, "MMTel feature enabled; attempting IMS registration");

        self.inner
            .registration
            .attempt_register()
            .context("enabling the MMTel feature")?;
        self.emit(true)
    }

    /// Disables the feature and tears the IMS registration down.
    ///
    /// # Errors
    /// Propagates failures from the paired registration handle.
    pub fn unregister(&self) -> Result<(), MmTelError> {
        self.inner.enabled.store(false, Ordering::Release);
        info!(slot = self.inner.slot, "MMTel feature disabled; deregistering IMS");

        self.inner
            .registration
            .notify_deregistered()
            .context("disabling the MMTel feature")?;
        self.emit(false)
    }

    fn emit(&self, enabled: bool) -> Result<(), MmTelError> {
        self.inner
            .events
            .publish(MmTelStatusChanged { slot: self.inner.slot, enabled })
            .map(|_| ())
            .map_err(|e| MmTelError::Internal {
                message: e.to_string().into(),
                context: Some("publishing MMTel status change".into()),
            })
    }
}
