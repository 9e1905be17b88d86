use crate::SlotId;

/// Number of SIM slots the feature and registration tables cover.
pub const MAX_SLOTS: usize = 2;

/// Capacity of the provisioning table. One spare entry beyond [`MAX_SLOTS`];
/// kept as-is pending clarification whether a third logical slot is reserved.
pub const PROVISIONING_SLOTS: usize = 3;

/// The primary slot, enabled by default and never capability-gated.
pub const PRIMARY_SLOT: SlotId = 0;

/// Feature name as it appears in configuration and diagnostics.
pub const MMTEL: &str = "mmtel";
