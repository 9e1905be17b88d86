//! Telephony seams the registry gates on.
//!
//! The registry never talks to a radio directly; it consumes these traits and
//! recomputes every capability query on the spot, so a provider backed by live
//! modem state stays authoritative without any caching layer in between.

use ihub_domain::config::ModemConfig;
use std::fmt::Debug;

/// Modem capability identifiers, matching the vendor capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Capability {
    VolteSupport = 11,
    VideoCall = 15,
    DualIms = 21,
}

/// Answers whether the modem supports a given capability.
pub trait ModemCapability: Debug + Send + Sync {
    fn is_capability_supported(&self, capability: Capability) -> bool;
}

/// Reports runtime telephony facts about the device.
pub trait Telephony: Debug + Send + Sync {
    /// Number of phone (SIM) slots the device currently exposes.
    fn phone_count(&self) -> u8;
}

/// The dual-IMS gate: the modem must report the capability AND the device must
/// expose more than one phone slot. Recomputed on every call — the radio may
/// change its answer at runtime, so nothing caches the result.
#[must_use]
pub fn supports_dual_ims(modem: &dyn ModemCapability, telephony: &dyn Telephony) -> bool {
    modem.is_capability_supported(Capability::DualIms) && telephony.phone_count() > 1
}

/// Fixed capability provider fed from configuration.
///
/// Hosts wired to a live radio supply their own [`ModemCapability`]/[`Telephony`]
/// implementations; this one serves embedded defaults and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticTelephony {
    dual_ims: bool,
    phone_count: u8,
}

impl StaticTelephony {
    #[must_use]
    pub const fn new(dual_ims: bool, phone_count: u8) -> Self {
        Self { dual_ims, phone_count }
    }
}

impl From<&ModemConfig> for StaticTelephony {
    fn from(modem: &ModemConfig) -> Self {
        Self::new(modem.dual_ims_capable, modem.phone_count)
    }
}

impl ModemCapability for StaticTelephony {
    fn is_capability_supported(&self, capability: Capability) -> bool {
        match capability {
            Capability::DualIms => self.dual_ims,
            // Single-slot IMS basics are assumed present on supported hardware.
            Capability::VolteSupport | Capability::VideoCall => true,
        }
    }
}

impl Telephony for StaticTelephony {
    fn phone_count(&self) -> u8 {
        self.phone_count
    }
}
