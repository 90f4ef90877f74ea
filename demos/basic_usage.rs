//! Basic usage example for penamap-rs
//!
//! This example demonstrates how to:
//! - Load the bundled place store
//! - Classify places into marker categories
//! - Drive the autocomplete search

use penamap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== penamap Basic Usage Example ===\n");

    let store = PlaceStore::load()?;
    println!("✓ Loaded {} places\n", store.len());

    println!("--- Example 1: Places by category ---");
    for (category, count) in store.stats().by_category {
        println!("  {category}: {count}");
    }
    println!();

    println!("--- Example 2: First few places ---");
    for (i, place) in store.iter().take(5).enumerate() {
        println!(
            "{}. {} [{}] at {}",
            i + 1,
            place.name(),
            place.category(),
            place.coordinate
        );
    }
    println!();

    println!("--- Example 3: Autocomplete ---");
    let mut controller = SearchController::new(store);
    for q in ["peña", "BAR", "parada bus", "zzz"] {
        controller.set_query(q);
        let names: Vec<&str> = controller
            .state()
            .suggestions
            .iter()
            .map(|p| p.name())
            .collect();
        println!("  {q:?} -> {names:?}");
    }

    Ok(())
}
