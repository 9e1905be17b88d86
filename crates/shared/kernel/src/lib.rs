//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts config loading and the telephony
//! capability seams the registry gates on.
//!
//! ## Config loading
//! ```rust,ignore
//! use ihub_kernel::config::load_config;
//! use ihub_domain::config::ImsConfig;
//!
//! let cfg: ImsConfig = load_config(Some("service")).unwrap();
//! ```
//!
//! ## Capability gate
//! ```rust
//! use ihub_kernel::telephony::{StaticTelephony, supports_dual_ims};
//!
//! let radio = StaticTelephony::new(true, 2);
//! assert!(supports_dual_ims(&radio, &radio));
//! ```

pub mod config;
pub mod telephony;

pub use ihub_domain as domain;
