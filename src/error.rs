//! Counter store error types
//!
//! Only two failures are modeled: allocation can fail at creation time, and
//! any operation can be given a handle that was already destroyed.

use thiserror::Error;

/// Counter store operation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backing storage for a new handle could not be obtained
    #[error("Failed to allocate backing storage for a new graph handle")]
    AllocationFailure,

    /// The handle was never issued by this store, or was already destroyed
    #[error("Invalid graph handle: slot {slot} (stale or destroyed)")]
    InvalidHandle {
        /// Slot index carried by the rejected handle
        slot: u32,
    },
}
