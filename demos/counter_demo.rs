//! Walkthrough of the counter store lifecycle
//!
//! Run with: cargo run --example counter_demo

use anyhow::Result;
use graph_tally::CounterStore;

fn main() -> Result<()> {
    println!("🦀 graph-tally demo\n");

    // 1. Create a graph handle
    let mut store = CounterStore::new();
    let graph = store.create()?;
    println!("📊 Created handle (slot {})", graph.slot());

    // 2. Grow the tallies
    store.add_vertices(graph, 8)?;
    store.add_edges(graph, 3)?;
    println!(
        "  ✅ {} vertices, {} edges",
        store.vertex_count(graph)?,
        store.edge_count(graph)?
    );

    store.add_vertices(graph, 8)?;
    println!("  ✅ After second batch: {} vertices", store.vertex_count(graph)?);

    // 3. Destroy, then show that the stale handle is rejected
    store.destroy(graph)?;
    println!("\n🗑️  Handle destroyed ({} live handles left)", store.len());

    match store.add_vertices(graph, 1) {
        Err(err) => println!("  ✅ Stale handle rejected: {err}"),
        Ok(_) => println!("  ❌ Stale handle was accepted (bug!)"),
    }

    Ok(())
}
