//! Counter storage layer
//!
//! Provides the handle table and the per-handle vertex/edge tallies.

pub mod counters;
pub mod handle;

pub use counters::CounterStore;
pub use handle::GraphHandle;
