use crate::error::EventBusError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::trace;

/// A safe default for broadcast buffers.
/// 128 comfortably covers the indication rate of a dual-SIM modem.
const DEFAULT_CAPACITY: usize = 128;
const MIN_CAPACITY: usize = 1;

/// Supported channel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Broadcast (fan-out) semantics.
    Broadcast { capacity: usize },
    /// Watch (latest-value) semantics.
    Watch,
}

impl ChannelKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Broadcast { .. } => "broadcast",
            Self::Watch => "watch",
        }
    }
}

/// Marker trait for types that can be sent across the [`EventBus`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

#[derive(Debug)]
struct ChannelState {
    kind: ChannelKind,
    sender: Box<dyn Any + Send + Sync>,
}

impl ChannelState {
    fn broadcast<T: Event>(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<Arc<T>>(capacity);
        Self { kind: ChannelKind::Broadcast { capacity }, sender: Box::new(tx) }
    }

    fn watch<T: Event>(initial: T) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { kind: ChannelKind::Watch, sender: Box::new(tx) }
    }

    fn sender_as<S: Event>(&self) -> Result<&S, EventBusError> {
        self.sender.downcast_ref::<S>().ok_or_else(|| EventBusError::TypeMismatch {
            message: std::any::type_name::<S>().into(),
            context: Some("Unexpected event type".into()),
        })
    }
}

/// A thread-safe event bus managing channels indexed by the [`TypeId`] of the event.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    channels: Arc<RwLock<FxHashMap<TypeId, ChannelState>>>,
}

impl EventBus {
    /// Creates a new, empty `EventBus`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to an event of type `T` using broadcast with default capacity.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a watch channel was
    /// already registered for `T`.
    pub fn subscribe<T: Event>(&self) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        self.subscribe_with_capacity::<T>(DEFAULT_CAPACITY)
    }

    /// Subscribes to an event of type `T` with a specific broadcast buffer capacity.
    ///
    /// The capacity of an already-registered channel is left untouched.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a watch channel was
    /// already registered for `T`, or [`EventBusError::InvalidCapacity`] if
    /// `capacity` is zero.
    pub fn subscribe_with_capacity<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        let capacity = validate_capacity(capacity)?;
        let mut channels = self.channels.write();
        let state = channels
            .entry(TypeId::of::<T>())
            .or_insert_with(|| ChannelState::broadcast::<T>(capacity));

        match state.kind {
            ChannelKind::Broadcast { .. } => {
                Ok(state.sender_as::<broadcast::Sender<Arc<T>>>()?.subscribe())
            },
            kind @ ChannelKind::Watch => Err(kind_mismatch::<T>("broadcast", kind)),
        }
    }

    /// Subscribes to the latest value of `T`, seeding the channel with
    /// `initial` if no watch channel exists yet.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a broadcast channel
    /// was already registered for `T`.
    pub fn watch<T: Event>(&self, initial: T) -> Result<watch::Receiver<Arc<T>>, EventBusError> {
        let mut channels = self.channels.write();
        let state =
            channels.entry(TypeId::of::<T>()).or_insert_with(|| ChannelState::watch(initial));

        match state.kind {
            ChannelKind::Watch => Ok(state.sender_as::<watch::Sender<Arc<T>>>()?.subscribe()),
            kind @ ChannelKind::Broadcast { .. } => Err(kind_mismatch::<T>("watch", kind)),
        }
    }

    /// Publishes an event, returning how many receivers will observe it.
    ///
    /// An event type without a registered channel is dropped and reported as
    /// zero receivers; indications fire whether or not anyone listens.
    ///
    /// # Errors
    /// Returns [`EventBusError::TypeMismatch`] if the registered sender does
    /// not match `T` (registry invariant violation).
    pub fn publish<T: Event>(&self, event: T) -> Result<usize, EventBusError> {
        let channels = self.channels.read();
        let Some(state) = channels.get(&TypeId::of::<T>()) else {
            trace!(event = std::any::type_name::<T>(), "No channel registered; event dropped");
            return Ok(0);
        };

        match state.kind {
            ChannelKind::Broadcast { .. } => {
                let tx = state.sender_as::<broadcast::Sender<Arc<T>>>()?;
                Ok(tx.send(Arc::new(event)).unwrap_or(0))
            },
            ChannelKind::Watch => {
                let tx = state.sender_as::<watch::Sender<Arc<T>>>()?;
                tx.send_replace(Arc::new(event));
                Ok(tx.receiver_count())
            },
        }
    }

    /// Number of channels currently registered (for diagnostics).
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.read().len()
    }
}

fn validate_capacity(capacity: usize) -> Result<usize, EventBusError> {
    if capacity < MIN_CAPACITY {
        return Err(EventBusError::InvalidCapacity {
            message: format!("capacity must be at least {MIN_CAPACITY}, got {capacity}").into(),
            context: None,
        });
    }
    Ok(capacity)
}

fn kind_mismatch<T: Event>(requested: &'static str, registered: ChannelKind) -> EventBusError {
    EventBusError::ChannelKindMismatch {
        message: format!(
            "{} is registered as {}, requested {requested}",
            std::any::type_name::<T>(),
            registered.name(),
        )
        .into(),
        context: None,
    }
}
