//! Provisioning feature slice: per-slot provisioned IMS configuration items.
//!
//! Each slot owns a small key/value store of operator-provisioned items
//! (VoLTE, VT, WFC and the WFC mode). Writes are broadcast on the event bus
//! so interested parties can react without polling.

mod error;

pub use crate::error::{ProvisioningError, ProvisioningErrorExt};

use fxhash::FxHashMap;
use ihub_domain::SlotId;
use ihub_event_bus::EventBus;
use parking_lot::RwLock;
use tracing::info;

/// Operator-provisioned configuration items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisioningItem {
    VolteProvisioned,
    VtProvisioned,
    WfcProvisioned,
    WfcMode,
}

/// Value stored for a provisioning item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningValue {
    Int(i32),
    Text(String),
}

/// Broadcast whenever a slot's provisioning item is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisioningChanged {
    pub slot: SlotId,
    pub item: ProvisioningItem,
}

/// Per-slot provisioning handle.
///
/// Constructed once per slot by the registry; fresh handles carry the
/// carrier-default item set (VoLTE provisioned, VT and WFC not). The WFC
/// mode has no default and stays unprovisioned until written.
#[ihub_derive::slot_handle]
pub struct ImsProvisioning {
    slot: SlotId,
    items: RwLock<FxHashMap<ProvisioningItem, ProvisioningValue>>,
    events: EventBus,
}

impl ImsProvisioning {
    /// Creates the provisioning handle for `slot` with carrier defaults.
    #[must_use]
    pub fn create(slot: SlotId, events: EventBus) -> Self {
        let mut items = FxHashMap::default();
        items.insert(ProvisioningItem::VolteProvisioned, ProvisioningValue::Int(1));
        items.insert(ProvisioningItem::VtProvisioned, ProvisioningValue::Int(0));
        items.insert(ProvisioningItem::WfcProvisioned, ProvisioningValue::Int(0));

        Self::new(ImsProvisioningInner { slot, items: RwLock::new(items), events })
    }

    /// Returns the stored value for `item`, if any.
    #[must_use]
    pub fn get(&self, item: ProvisioningItem) -> Option<ProvisioningValue> {
        self.inner.items.read().get(&item).cloned()
    }

    /// Returns the integer value for `item`.
    ///
    /// # Errors
    /// Returns [`ProvisioningError::NotProvisioned`] when the item has no
    /// value and [`ProvisioningError::TypeMismatch`] when it holds text.
    pub fn get_int(&self, item: ProvisioningItem) -> Result<i32, ProvisioningError> {
        match self.get(item) {
            Some(ProvisioningValue::Int(value)) => Ok(value),
            Some(ProvisioningValue::Text(_)) => Err(ProvisioningError::TypeMismatch {
                message: format!("{item:?} holds a text value").into(),
                context: None,
            }),
            None => Err(ProvisioningError::NotProvisioned {
                message: format!("{item:?} on slot {}", self.inner.slot).into(),
                context: None,
            }),
        }
    }

    /// Writes `value` for `item` and broadcasts the change.
    ///
    /// # Errors
    /// Fails only when the change event cannot be published.
    pub fn set(
        &self,
        item: ProvisioningItem,
        value: ProvisioningValue,
    ) -> Result<(), ProvisioningError> {
        info!(slot = self.inner.slot, ?item, ?value, "Provisioning item updated");
        self.inner.items.write().insert(item, value);

        self.inner
            .events
            .publish(ProvisioningChanged { slot: self.inner.slot, item })
            .map(|_| ())
            .map_err(|e| ProvisioningError::Internal {
                message: e.to_string().into(),
                context: Some("publishing provisioning change".into()),
            })
    }
}
