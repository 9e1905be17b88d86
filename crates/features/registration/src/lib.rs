//! Registration feature slice: per-slot IMS registration state.
//!
//! The handle tracks where a slot stands with the IMS core (not registered,
//! attempting, registered) and over which radio technology. The radio layer
//! drives the transitions; observers follow along on the event bus.

mod error;

pub use crate::error::{RegistrationError, RegistrationErrorExt};

use ihub_domain::SlotId;
use ihub_event_bus::EventBus;
use parking_lot::RwLock;
use tracing::info;

/// IMS registration state of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    NotRegistered,
    Attempting,
    Registered,
}

/// Radio access technology carrying an IMS registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioTech {
    None,
    Lte,
    Iwlan,
}

/// Broadcast on the event bus whenever a slot's registration state moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationChanged {
    pub slot: SlotId,
    pub state: RegistrationState,
    pub tech: RadioTech,
}

/// Per-slot IMS registration handle.
///
/// Constructed once per slot by the registry and shared from then on; all
/// clones observe the same state.
#[ihub_derive::slot_handle]
pub struct ImsRegistration {
    slot: SlotId,
    state: RwLock<(RegistrationState, RadioTech)>,
    events: EventBus,
}

impl ImsRegistration {
    /// Creates the registration handle for `slot`, initially not registered.
    #[must_use]
    pub fn create(slot: SlotId, events: EventBus) -> Self {
        Self::new(ImsRegistrationInner {
            slot,
            state: RwLock::new((RegistrationState::NotRegistered, RadioTech::None)),
            events,
        })
    }

    #[must_use]
    pub fn state(&self) -> RegistrationState {
        self.inner.state.read().0
    }

    #[must_use]
    pub fn radio_tech(&self) -> RadioTech {
        self.inner.state.read().1
    }

    /// Starts a registration attempt. Legal from any state; re-attempting
    /// while already registered models a refresh.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Internal`] if the change event cannot be published.
    pub fn attempt_register(&self) -> Result<(), RegistrationError> {
        self.transition(RegistrationState::Attempting, RadioTech::None)
    }

    /// Records a successful registration over `tech`.
    ///
    /// # Errors
    /// Returns [`RegistrationError::InvalidTransition`] unless an attempt is in
    /// flight or an existing registration is being refreshed.
    pub fn notify_registered(&self, tech: RadioTech) -> Result<(), RegistrationError> {
        if self.state() == RegistrationState::NotRegistered {
            return Err(RegistrationError::InvalidTransition {
                message: "registered indication without a prior attempt".into(),
                context: Some(format!("slot {}", self.inner.slot).into()),
            });
        }
        self.transition(RegistrationState::Registered, tech)
    }

    /// Records a failed registration attempt.
    ///
    /// # Errors
    /// Returns [`RegistrationError::InvalidTransition`] if no attempt is in flight.
    pub fn notify_attempt_failed(&self) -> Result<(), RegistrationError> {
        if self.state() != RegistrationState::Attempting {
            return Err(RegistrationError::InvalidTransition {
                message: "attempt-failed indication without an attempt in flight".into(),
                context: Some(format!("slot {}", self.inner.slot).into()),
            });
        }
        self.transition(RegistrationState::NotRegistered, RadioTech::None)
    }

    /// Tears the registration down. Legal from any state.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Internal`] if the change event cannot be published.
    pub fn notify_deregistered(&self) -> Result<(), RegistrationError> {
        self.transition(RegistrationState::NotRegistered, RadioTech::None)
    }

    fn transition(
        &self,
        next: RegistrationState,
        tech: RadioTech,
    ) -> Result<(), RegistrationError> {
        {
            let mut state = self.inner.state.write();
            *state = (next, tech);
        }

        info!(slot = self.inner.slot, state = ?next, tech = ?tech, "IMS registration state changed");

        self.inner
            .events
            .publish(RegistrationChanged { slot: self.inner.slot, state: next, tech })
            .map(|_| ())
            .map_err(|e| RegistrationError::Internal {
                message: e.to_string().into(),
                context: Some("publishing registration change".into()),
            })
    }
}
