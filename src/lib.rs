//! graph-tally: embedded vertex/edge counter store
//!
//! # Overview
//!
//! graph-tally is the bookkeeping core for a future embedded graph engine.
//! For now a graph is nothing but two monotonically growing tallies per
//! handle (`vertex_count`, `edge_count`); topology, identity tracking, and
//! algorithms are deliberately absent. What the crate does provide is a
//! checked handle lifecycle: destroyed handles are detectably stale instead
//! of undefined behavior, and allocation failure at creation is a real error.
//!
//! # Quick Start
//!
//! ```
//! use graph_tally::CounterStore;
//!
//! # fn example() -> Result<(), graph_tally::StoreError> {
//! let mut store = CounterStore::new();
//! let graph = store.create()?;
//!
//! store.add_vertices(graph, 8)?;
//! store.add_edges(graph, 3)?;
//!
//! assert_eq!(store.vertex_count(graph)?, 8);
//! assert_eq!(store.edge_count(graph)?, 3);
//!
//! store.destroy(graph)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Store**: slot table with generation-tagged handles (use-after-destroy
//!   becomes `StoreError::InvalidHandle`)
//! - **Counters**: `u64`, saturating at the boundary, never decreasing
//! - **Threading**: single-writer by construction (`&mut self`); cross-thread
//!   use must be serialized by the caller

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod store;

// Re-export core types
pub use error::StoreError;
pub use store::{CounterStore, GraphHandle};

// Error type
pub use anyhow::{Error, Result};
