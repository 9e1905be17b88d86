//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`).
//! Keep it lean: no I/O, telephony plumbing, or heavy logic—just data and simple helpers.

pub mod config;
pub mod constants;
pub mod features;
pub mod registry;

/// Index of a physical/logical SIM slot. Dual-SIM devices expose slots 0 and 1.
pub type SlotId = u8;
