//! Facade crate for `ImsHub` features and shared modules.
//! Hosts build an [`ImsHub`], wire it to their callback boundary via
//! [`ImsEndpoints`], and optionally publish it through [`instance`].
//! Keep this crate thin: the registry composes the feature slices, it does
//! not implement telephony behavior itself.

pub use ihub_domain as domain;
pub use ihub_kernel as kernel;

/// Feature slices the registry materializes per slot.
pub mod features {
    pub use ihub_mmtel as mmtel;
    pub use ihub_provisioning as provisioning;
    pub use ihub_registration as registration;
}

mod error;
pub mod instance;
pub mod registry;
pub mod service;

pub use crate::error::{ServiceError, ServiceErrorExt};
pub use crate::registry::SlotRegistry;
pub use crate::service::{ImsEndpoints, ImsHub, ImsHubBuilder};
