//! # Event Bus
//!
//! A type-safe, asynchronous event bus connecting the per-slot feature slices
//! to whoever wants to observe them.
//!
//! ## Overview
//!
//! Provides a centralized `EventBus` with two channel kinds (`broadcast` for
//! fan-out notifications, `watch` for latest-value state) built on `tokio`
//! primitives. Events are identified by their Rust type; publishing an event
//! type nobody subscribed to is a cheap no-op, matching how telephony
//! indications are fired regardless of listeners.
//!
//! # Example
//!
//! ```rust
//! use ihub_event_bus::{EventBus, EventBusError, EventReceiverExt};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct RegistrationChanged { slot: u8, registered: bool }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!
//!     let mut rx = bus.subscribe::<RegistrationChanged>()?;
//!     bus.publish(RegistrationChanged { slot: 0, registered: true })?;
//!
//!     if let Some(event) = EventReceiverExt::recv(&mut rx).await {
//!         assert_eq!(event.slot, 0);
//!     }
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod receiver;

pub use bus::{ChannelKind, Event, EventBus};
pub use error::{EventBusError, EventBusErrorExt};
pub use receiver::EventReceiverExt;
