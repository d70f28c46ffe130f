//! Counter store: per-handle vertex/edge tallies
//!
//! The store is the whole of the engine for now: each handle owns two u64
//! counters (`vertex_count`, `edge_count`) that only ever grow. Topology,
//! identity tracking, and algorithms come later; this layer is just the
//! bookkeeping they will hang off.
//!
//! # Lifecycle
//!
//! Slots move between exactly two states, live and destroyed, and never back.
//! Destroyed slots are recycled through a free list with a bumped generation,
//! so a handle from a previous occupant is rejected rather than resurrected.

use crate::error::StoreError;
use crate::store::handle::GraphHandle;

/// Per-handle counter pair
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    vertices: u64,
    edges: u64,
}

/// One entry in the slot table
#[derive(Debug)]
struct Slot {
    /// Bumped on destroy; handles carry the generation they were issued under
    generation: u32,
    /// `Some` while live, `None` once destroyed
    tally: Option<Tally>,
}

/// Vertex/edge counter store with checked handle lifecycle
///
/// Owns a table of handle slots. All mutation goes through `&mut self`, so
/// one store has exactly one writer at a time within safe Rust. The store is
/// not internally synchronized: sharing it across threads must be serialized
/// by the caller (e.g. behind a `Mutex`), which is out of scope here.
///
/// Counters saturate at `u64::MAX`; increment calls return the amount
/// actually applied, which equals the requested amount everywhere below the
/// boundary.
///
/// # Example
///
/// ```
/// use graph_tally::CounterStore;
///
/// let mut store = CounterStore::new();
/// let handle = store.create()?;
///
/// store.add_vertices(handle, 8)?;
/// assert_eq!(store.vertex_count(handle)?, 8);
/// assert_eq!(store.edge_count(handle)?, 0);
///
/// store.destroy(handle)?;
/// assert!(store.vertex_count(handle).is_err());
/// # Ok::<(), graph_tally::StoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct CounterStore {
    /// Slot table; indices are stable for the store's lifetime
    slots: Vec<Slot>,
    /// Indices of destroyed slots available for reuse
    free: Vec<u32>,
    /// Number of live handles
    live: usize,
}

impl CounterStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new handle with both counters at zero
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AllocationFailure` when backing memory for the
    /// slot table cannot be obtained.
    pub fn create(&mut self) -> Result<GraphHandle, StoreError> {
        let handle = if let Some(index) = self.free.pop() {
            // Generation was already bumped when the slot was destroyed
            let slot = &mut self.slots[index as usize];
            slot.tally = Some(Tally::default());
            GraphHandle {
                index,
                generation: slot.generation,
            }
        } else {
            // Reserve free-list capacity for every slot up front so destroy
            // never allocates
            self.slots
                .try_reserve(1)
                .map_err(|_| StoreError::AllocationFailure)?;
            let worst_case_free = self.slots.len() + 1 - self.free.len();
            self.free
                .try_reserve(worst_case_free)
                .map_err(|_| StoreError::AllocationFailure)?;

            #[allow(clippy::cast_possible_truncation)] // Stores >4B live handles not supported
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                tally: Some(Tally::default()),
            });
            GraphHandle {
                index,
                generation: 0,
            }
        };

        self.live += 1;
        Ok(handle)
    }

    /// Destroy a handle, releasing its slot for reuse
    ///
    /// The slot's generation is bumped so every copy of `handle` becomes
    /// stale. There is no transition back: a destroyed handle stays invalid
    /// even after the slot is recycled.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidHandle` if the handle is stale or was
    /// already destroyed (a double destroy is an error, not undefined
    /// behavior).
    pub fn destroy(&mut self, handle: GraphHandle) -> Result<(), StoreError> {
        let slot = self.resolve_mut(handle)?;
        slot.tally = None;
        slot.generation = slot.generation.wrapping_add(1);

        // Capacity was reserved at create, push cannot allocate
        self.free.push(handle.index);
        self.live -= 1;
        Ok(())
    }

    /// Add `n` to the handle's vertex count
    ///
    /// Returns the amount actually applied (equals `n` unless the counter
    /// saturates at `u64::MAX`).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidHandle` if the handle is stale or destroyed.
    pub fn add_vertices(&mut self, handle: GraphHandle, n: u64) -> Result<u64, StoreError> {
        let tally = self.resolve_tally_mut(handle)?;
        let before = tally.vertices;
        tally.vertices = before.saturating_add(n);
        Ok(tally.vertices - before)
    }

    /// Add `n` to the handle's edge count
    ///
    /// Same contract as [`add_vertices`](Self::add_vertices), applied to the
    /// edge counter. The two counters are fully independent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidHandle` if the handle is stale or destroyed.
    pub fn add_edges(&mut self, handle: GraphHandle, n: u64) -> Result<u64, StoreError> {
        let tally = self.resolve_tally_mut(handle)?;
        let before = tally.edges;
        tally.edges = before.saturating_add(n);
        Ok(tally.edges - before)
    }

    /// Current vertex count for a handle
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidHandle` if the handle is stale or destroyed.
    pub fn vertex_count(&self, handle: GraphHandle) -> Result<u64, StoreError> {
        Ok(self.resolve_tally(handle)?.vertices)
    }

    /// Current edge count for a handle
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidHandle` if the handle is stale or destroyed.
    pub fn edge_count(&self, handle: GraphHandle) -> Result<u64, StoreError> {
        Ok(self.resolve_tally(handle)?.edges)
    }

    /// Number of live handles
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live
    }

    /// True when no handle is live
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Look up a live slot, rejecting stale handles
    fn resolve(&self, handle: GraphHandle) -> Result<&Slot, StoreError> {
        let invalid = StoreError::InvalidHandle { slot: handle.index };
        let slot = self.slots.get(handle.index as usize).ok_or(invalid)?;
        if slot.generation != handle.generation || slot.tally.is_none() {
            return Err(StoreError::InvalidHandle { slot: handle.index });
        }
        Ok(slot)
    }

    fn resolve_mut(&mut self, handle: GraphHandle) -> Result<&mut Slot, StoreError> {
        self.resolve(handle)?;
        Ok(&mut self.slots[handle.index as usize])
    }

    fn resolve_tally(&self, handle: GraphHandle) -> Result<&Tally, StoreError> {
        let invalid = StoreError::InvalidHandle { slot: handle.index };
        self.resolve(handle)?.tally.as_ref().ok_or(invalid)
    }

    fn resolve_tally_mut(&mut self, handle: GraphHandle) -> Result<&mut Tally, StoreError> {
        let invalid = StoreError::InvalidHandle { slot: handle.index };
        self.resolve_mut(handle)?.tally.as_mut().ok_or(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = CounterStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_starts_at_zero() {
        let mut store = CounterStore::new();
        let handle = store.create().unwrap();

        assert_eq!(store.vertex_count(handle).unwrap(), 0);
        assert_eq!(store.edge_count(handle).unwrap(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_vertices_accumulates() {
        let mut store = CounterStore::new();
        let handle = store.create().unwrap();

        assert_eq!(store.add_vertices(handle, 8).unwrap(), 8);
        assert_eq!(store.vertex_count(handle).unwrap(), 8);

        assert_eq!(store.add_vertices(handle, 8).unwrap(), 8);
        assert_eq!(store.vertex_count(handle).unwrap(), 16);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut store = CounterStore::new();
        let handle = store.create().unwrap();

        store.add_edges(handle, 3).unwrap();

        assert_eq!(store.edge_count(handle).unwrap(), 3);
        assert_eq!(store.vertex_count(handle).unwrap(), 0);

        store.add_vertices(handle, 5).unwrap();
        assert_eq!(store.edge_count(handle).unwrap(), 3);
    }

    #[test]
    fn test_zero_increment_is_noop() {
        let mut store = CounterStore::new();
        let handle = store.create().unwrap();

        store.add_vertices(handle, 7).unwrap();
        assert_eq!(store.add_vertices(handle, 0).unwrap(), 0);
        assert_eq!(store.vertex_count(handle).unwrap(), 7);
    }

    #[test]
    fn test_saturation_at_u64_max() {
        let mut store = CounterStore::new();
        let handle = store.create().unwrap();

        assert_eq!(store.add_edges(handle, u64::MAX).unwrap(), u64::MAX);
        // Applied amount is the delta, not the request
        assert_eq!(store.add_edges(handle, 10).unwrap(), 0);
        assert_eq!(store.edge_count(handle).unwrap(), u64::MAX);
    }

    #[test]
    fn test_destroy_invalidates_handle() {
        let mut store = CounterStore::new();
        let handle = store.create().unwrap();

        store.destroy(handle).unwrap();
        assert!(store.is_empty());

        assert_eq!(
            store.add_vertices(handle, 1),
            Err(StoreError::InvalidHandle { slot: 0 })
        );
        assert_eq!(
            store.vertex_count(handle),
            Err(StoreError::InvalidHandle { slot: 0 })
        );
    }

    #[test]
    fn test_double_destroy_is_error() {
        let mut store = CounterStore::new();
        let handle = store.create().unwrap();

        store.destroy(handle).unwrap();
        assert_eq!(
            store.destroy(handle),
            Err(StoreError::InvalidHandle { slot: 0 })
        );
    }

    #[test]
    fn test_recycled_slot_gets_fresh_counters() {
        let mut store = CounterStore::new();

        let old = store.create().unwrap();
        store.add_vertices(old, 100).unwrap();
        store.destroy(old).unwrap();

        // Same slot, new generation
        let new = store.create().unwrap();
        assert_eq!(new.slot(), old.slot());
        assert_ne!(new, old);

        assert_eq!(store.vertex_count(new).unwrap(), 0);
        assert!(store.vertex_count(old).is_err());
    }

    #[test]
    fn test_handles_do_not_interfere() {
        let mut store = CounterStore::new();
        let a = store.create().unwrap();
        let b = store.create().unwrap();

        store.add_vertices(a, 2).unwrap();
        store.add_vertices(b, 9).unwrap();
        store.add_edges(b, 4).unwrap();

        assert_eq!(store.vertex_count(a).unwrap(), 2);
        assert_eq!(store.edge_count(a).unwrap(), 0);
        assert_eq!(store.vertex_count(b).unwrap(), 9);
        assert_eq!(store.edge_count(b).unwrap(), 4);
        assert_eq!(store.len(), 2);
    }
}
