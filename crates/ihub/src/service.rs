//! Host callback surface.
//!
//! The telephony host drives the service through [`ImsEndpoints`]; [`ImsHub`]
//! implements it by delegating to the [`SlotRegistry`]. The trait replaces a
//! base-class inheritance seam, so hosts depend on exactly these operations
//! and nothing else.

use crate::error::ServiceError;
use crate::registry::SlotRegistry;
use fxhash::FxHashSet;
use ihub_domain::SlotId;
use ihub_domain::config::ImsConfig;
use ihub_domain::features::SlotFeature;
use ihub_event_bus::EventBus;
use ihub_kernel::telephony::{ModemCapability, StaticTelephony, Telephony};
use ihub_mmtel::MmTelFeature;
use ihub_provisioning::ImsProvisioning;
use ihub_registration::ImsRegistration;
use std::sync::Arc;
use tracing::info;

/// Callback operations the telephony host invokes on the IMS service.
pub trait ImsEndpoints {
    /// The host has brought the service up.
    fn on_create(&self);
    /// The host is ready for feature creation; publishes this hub as the
    /// process-wide instance.
    fn ready_for_feature_creation(&self);
    /// Enables IMS on `slot`.
    ///
    /// # Errors
    /// Returns [`ServiceError::UnsupportedSlot`] for gated slots.
    fn enable_ims(&self, slot: SlotId) -> Result<(), ServiceError>;
    /// Disables IMS on `slot`.
    ///
    /// # Errors
    /// Returns [`ServiceError::UnsupportedSlot`] for gated slots.
    fn disable_ims(&self, slot: SlotId) -> Result<(), ServiceError>;
    /// The features currently enabled across all slots.
    fn query_supported_features(&self) -> FxHashSet<SlotFeature>;
    /// The MMTel feature handle for `slot`, if the slot is available.
    fn create_mmtel_feature(&self, slot: SlotId) -> Option<MmTelFeature>;
    /// The provisioning handle for `slot`, if the slot is available.
    fn get_config(&self, slot: SlotId) -> Option<ImsProvisioning>;
    /// The registration handle for `slot`, if the slot is available.
    fn get_registration(&self, slot: SlotId) -> Option<ImsRegistration>;
}

/// The IMS service hub: a cheaply clonable handle over the slot registry.
///
/// All clones share one registry; [`ImsHub::same_hub`] compares that shared
/// identity, which is what the process-instance guard checks on install.
#[derive(Debug, Clone)]
pub struct ImsHub {
    registry: Arc<SlotRegistry>,
}

impl ImsHub {
    /// Starts building a hub from `config`.
    #[must_use]
    pub fn builder(config: ImsConfig) -> ImsHubBuilder {
        ImsHubBuilder { config, events: None, modem: None, telephony: None }
    }

    #[must_use]
    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    /// Whether two handles refer to the same underlying registry.
    #[must_use]
    pub fn same_hub(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.registry, &b.registry)
    }
}

/// Builder for [`ImsHub`].
///
/// Capability seams default to [`StaticTelephony`] fed from the modem config
/// section; hosts wired to a live radio override them.
#[derive(Debug)]
pub struct ImsHubBuilder {
    config: ImsConfig,
    events: Option<EventBus>,
    modem: Option<Arc<dyn ModemCapability>>,
    telephony: Option<Arc<dyn Telephony>>,
}

impl ImsHubBuilder {
    #[must_use]
    pub fn events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    #[must_use]
    pub fn modem(mut self, modem: Arc<dyn ModemCapability>) -> Self {
        self.modem = Some(modem);
        self
    }

    #[must_use]
    pub fn telephony(mut self, telephony: Arc<dyn Telephony>) -> Self {
        self.telephony = Some(telephony);
        self
    }

    #[must_use]
    pub fn build(self) -> ImsHub {
        let fallback = Arc::new(StaticTelephony::from(&self.config.modem));

        let modem: Arc<dyn ModemCapability> = match self.modem {
            Some(modem) => modem,
            None => fallback.clone(),
        };
        let telephony: Arc<dyn Telephony> = match self.telephony {
            Some(telephony) => telephony,
            None => fallback,
        };
        let events = self.events.unwrap_or_default();

        ImsHub { registry: Arc::new(SlotRegistry::new(self.config, events, modem, telephony)) }
    }
}

impl ImsEndpoints for ImsHub {
    fn on_create(&self) {
        let config = self.registry.config();
        info!(
            ims0 = config.slots.ims0,
            ims1 = config.slots.ims1,
            dual_ims = self.registry.supports_dual_ims(),
            "IMS service created"
        );
    }

    fn ready_for_feature_creation(&self) {
        crate::instance::install(self.clone());
    }

    fn enable_ims(&self, slot: SlotId) -> Result<(), ServiceError> {
        self.registry.enable_ims(slot)
    }

    fn disable_ims(&self, slot: SlotId) -> Result<(), ServiceError> {
        self.registry.disable_ims(slot)
    }

    fn query_supported_features(&self) -> FxHashSet<SlotFeature> {
        self.registry.enabled_features()
    }

    fn create_mmtel_feature(&self, slot: SlotId) -> Option<MmTelFeature> {
        self.registry.mmtel(slot)
    }

    fn get_config(&self, slot: SlotId) -> Option<ImsProvisioning> {
        self.registry.provisioning(slot)
    }

    fn get_registration(&self, slot: SlotId) -> Option<ImsRegistration> {
        self.registry.registration(slot)
    }
}
