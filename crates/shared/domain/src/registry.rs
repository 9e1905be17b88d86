//! Handle contract for per-slot feature objects.
//! This provides a minimal type-erased view over the lazily constructed slot handles.

use crate::SlotId;
use std::any::Any;
use std::fmt::Debug;

/// Marker trait for per-slot handles that can be shared across threads.
///
/// A handle is constructed at most once per slot and then returned identically
/// on every access; implementors are expected to be cheap Arc-backed clones.
pub trait SlotHandle: Any + Debug + Send + Sync {
    /// The SIM slot this handle was constructed for.
    fn slot(&self) -> SlotId;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}
