use crate::SlotId;
use crate::constants::MMTEL;
use serde::{Deserialize, Serialize};

/// A single IMS feature kind a slot can expose.
///
/// MMTel is the only kind the registry materializes; the tag keeps
/// `(slot, kind)` pairs self-describing if further kinds appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Multimedia Telephony: voice/video calls over IMS.
    MmTel,
}

impl FeatureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MmTel => MMTEL,
        }
    }
}

/// A feature kind pinned to a concrete SIM slot.
///
/// `(slot, kind)` pairs form the unordered answer to "which features are
/// enabled right now"; construction order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotFeature {
    pub slot: SlotId,
    pub kind: FeatureKind,
}

impl SlotFeature {
    #[must_use]
    pub const fn mmtel(slot: SlotId) -> Self {
        Self { slot, kind: FeatureKind::MmTel }
    }
}
