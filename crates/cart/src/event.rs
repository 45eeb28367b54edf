//! Change notification events.
//!
//! Mirrors the reactive invalidation of the UI this core was carved out of:
//! after a mutation commits, every subscriber is told which collection
//! changed so it can re-read the corresponding view. No-op mutations (e.g.
//! removing an absent line) emit nothing.

use serde::{Deserialize, Serialize};

/// Which store collection a mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartEvent {
    /// The working cart's lines changed.
    CartUpdated,
    /// The checkout snapshot changed.
    CheckoutUpdated,
}

/// Handle identifying a registered observer, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }
}
