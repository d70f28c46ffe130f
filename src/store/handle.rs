//! Opaque graph handle
//!
//! A handle names one live slot in a [`CounterStore`](super::CounterStore).
//! It pairs a slot index with a generation tag; the store bumps the tag when
//! a slot is destroyed, so stale handles are detected instead of silently
//! reading recycled state.

/// Opaque reference to one handle's counters inside a `CounterStore`
///
/// Handles are cheap to copy but only meaningful to the store that issued
/// them. Presenting a destroyed (or foreign) handle to any store operation
/// yields `StoreError::InvalidHandle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphHandle {
    /// Slot index into the store's table
    pub(crate) index: u32,
    /// Generation of the slot when this handle was issued
    pub(crate) generation: u32,
}

impl GraphHandle {
    /// Slot index carried by this handle (diagnostics only)
    #[must_use]
    pub const fn slot(&self) -> u32 {
        self.index
    }
}
