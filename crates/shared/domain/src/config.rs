use crate::SlotId;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level IMS service configuration shared across subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImsConfigInner {
    pub slots: SlotsConfig,
    pub modem: ModemConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ImsConfig {
    #[serde(flatten, default)]
    inner: Arc<ImsConfigInner>,
}

impl Deref for ImsConfig {
    type Target = ImsConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ImsConfig {
    fn deref_mut(&mut self) -> &mut ImsConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Persisted per-slot IMS enablement flags.
///
/// These are written by the carrier/settings layer; the registry only reads
/// them. The primary slot ships enabled, the secondary slot disabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlotsConfig {
    pub ims0: bool,
    pub ims1: bool,
}

impl SlotsConfig {
    /// Whether IMS is enabled for `slot`. Unknown slots are disabled.
    #[must_use]
    pub const fn enabled(&self, slot: SlotId) -> bool {
        match slot {
            0 => self.ims0,
            1 => self.ims1,
            _ => false,
        }
    }
}

/// Modem capability values used by the static telephony provider.
/// Live providers query the radio instead and ignore these.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModemConfig {
    pub dual_ims_capable: bool,
    pub phone_count: u8,
}

/// Log output configuration for the service binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
}

// --- Default ---

impl Default for SlotsConfig {
    fn default() -> Self {
        Self { ims0: true, ims1: false }
    }
}

impl Default for ModemConfig {
    fn default() -> Self {
        Self { dual_ims_capable: false, phone_count: 1 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None }
    }
}
