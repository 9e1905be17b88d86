//! The per-slot feature registry.
//!
//! Three parallel lazy tables (MMTel features, registrations, provisioning)
//! keyed by SIM slot, guarded by the dual-IMS capability gate. Handles are
//! constructed on first access and live for the registry's lifetime; every
//! later access returns the same handle.

use crate::error::{ServiceError, ServiceErrorExt};
use fxhash::FxHashSet;
use ihub_domain::SlotId;
use ihub_domain::config::ImsConfig;
use ihub_domain::constants::{MAX_SLOTS, PRIMARY_SLOT, PROVISIONING_SLOTS};
use ihub_domain::features::SlotFeature;
use ihub_event_bus::EventBus;
use ihub_kernel::telephony::{self, ModemCapability, Telephony};
use ihub_mmtel::MmTelFeature;
use ihub_provisioning::ImsProvisioning;
use ihub_registration::ImsRegistration;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Per-slot singleton tables with capability-gated lazy construction.
///
/// The secondary slot exists only on dual-IMS hardware: any `slot > 0` request
/// first passes [`SlotRegistry::supports_dual_ims`], which is recomputed on
/// every call so a live capability provider stays authoritative. Each table
/// cell is a [`OnceLock`], so concurrent first accesses for the same slot
/// still observe exactly one handle.
#[derive(Debug)]
pub struct SlotRegistry {
    config: ImsConfig,
    events: EventBus,
    modem: Arc<dyn ModemCapability>,
    telephony: Arc<dyn Telephony>,
    mmtel: [OnceLock<MmTelFeature>; MAX_SLOTS],
    registrations: [OnceLock<ImsRegistration>; MAX_SLOTS],
    provisioning: [OnceLock<ImsProvisioning>; PROVISIONING_SLOTS],
}

impl SlotRegistry {
    #[must_use]
    pub fn new(
        config: ImsConfig,
        events: EventBus,
        modem: Arc<dyn ModemCapability>,
        telephony: Arc<dyn Telephony>,
    ) -> Self {
        Self {
            config,
            events,
            modem,
            telephony,
            mmtel: [const { OnceLock::new() }; MAX_SLOTS],
            registrations: [const { OnceLock::new() }; MAX_SLOTS],
            provisioning: [const { OnceLock::new() }; PROVISIONING_SLOTS],
        }
    }

    #[must_use]
    pub fn config(&self) -> &ImsConfig {
        &self.config
    }

    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Whether IMS can run on both slots at once.
    ///
    /// True iff the modem reports the dual-IMS capability and the device
    /// exposes more than one phone slot. Never cached.
    #[must_use]
    pub fn supports_dual_ims(&self) -> bool {
        telephony::supports_dual_ims(&*self.modem, &*self.telephony)
    }

    /// The features enabled right now, as unordered `(slot, kind)` pairs.
    ///
    /// The primary slot contributes MMTel iff its enablement flag is set;
    /// the secondary slot additionally requires the dual-IMS gate.
    #[must_use]
    pub fn enabled_features(&self) -> FxHashSet<SlotFeature> {
        let mut features = FxHashSet::default();

        if self.config.slots.enabled(PRIMARY_SLOT) {
            features.insert(SlotFeature::mmtel(PRIMARY_SLOT));
        }
        if self.supports_dual_ims() && self.config.slots.enabled(1) {
            features.insert(SlotFeature::mmtel(1));
        }

        features
    }

    /// The MMTel feature handle for `slot`, constructing it on first access.
    ///
    /// Returns `None` for gated or out-of-range slots. Constructing the
    /// feature also constructs the slot's registration handle, so the pair
    /// shares one lifetime.
    #[must_use]
    pub fn mmtel(&self, slot: SlotId) -> Option<MmTelFeature> {
        let cell = self.mmtel.get(usize::from(slot))?;
        if !self.in_gate(slot) {
            return None;
        }

        let feature = cell.get_or_init(|| {
            debug!(slot, "Creating MMTel feature");
            MmTelFeature::create(slot, self.registration_for(slot), self.events.clone())
        });
        Some(feature.clone())
    }

    /// The registration handle for `slot`, constructing it on first access.
    ///
    /// Returns `None` for gated or out-of-range slots.
    #[must_use]
    pub fn registration(&self, slot: SlotId) -> Option<ImsRegistration> {
        if usize::from(slot) >= self.registrations.len() || !self.in_gate(slot) {
            return None;
        }
        Some(self.registration_for(slot))
    }

    /// The provisioning handle for `slot`, constructing it on first access.
    ///
    /// Returns `None` for gated or out-of-range slots. The table carries one
    /// spare cell beyond the feature tables, but the gate applies to every
    /// `slot > 0`, so the spare materializes only on dual-IMS hardware.
    #[must_use]
    pub fn provisioning(&self, slot: SlotId) -> Option<ImsProvisioning> {
        let cell = self.provisioning.get(usize::from(slot))?;
        if !self.in_gate(slot) {
            return None;
        }

        let provisioning = cell.get_or_init(|| {
            debug!(slot, "Creating provisioning handle");
            ImsProvisioning::create(slot, self.events.clone())
        });
        Some(provisioning.clone())
    }

    /// Enables the MMTel feature on `slot` and starts its IMS registration.
    ///
    /// # Errors
    /// Returns [`ServiceError::UnsupportedSlot`] for gated slots and
    /// [`ServiceError::Feature`] when the feature rejects the request.
    pub fn enable_ims(&self, slot: SlotId) -> Result<(), ServiceError> {
        info!(slot, "Enabling IMS");
        self.require_mmtel(slot)?.register().context("enabling IMS")?;
        Ok(())
    }

    /// Disables the MMTel feature on `slot` and deregisters it.
    ///
    /// # Errors
    /// Returns [`ServiceError::UnsupportedSlot`] for gated slots and
    /// [`ServiceError::Feature`] when the feature rejects the request.
    pub fn disable_ims(&self, slot: SlotId) -> Result<(), ServiceError> {
        info!(slot, "Disabling IMS");
        self.require_mmtel(slot)?.unregister().context("disabling IMS")?;
        Ok(())
    }

    /// Slot 0 always passes; any other slot requires the dual-IMS gate.
    fn in_gate(&self, slot: SlotId) -> bool {
        slot == PRIMARY_SLOT || self.supports_dual_ims()
    }

    /// Caller must have bounds-checked `slot` against the registration table.
    fn registration_for(&self, slot: SlotId) -> ImsRegistration {
        self.registrations[usize::from(slot)]
            .get_or_init(|| {
                debug!(slot, "Creating registration handle");
                ImsRegistration::create(slot, self.events.clone())
            })
            .clone()
    }

    fn require_mmtel(&self, slot: SlotId) -> Result<MmTelFeature, ServiceError> {
        self.mmtel(slot).ok_or_else(|| ServiceError::UnsupportedSlot {
            message: format!("slot {slot} is not available on this device").into(),
            context: None,
        })
    }
}
