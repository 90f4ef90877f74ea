//! Error handling example for penamap-rs
//!
//! Shows how malformed datasets surface and how the lenient loader
//! drops bad placemarks instead.

use penamap_core::prelude::*;

const BROKEN: &str = r#"{ "kml": { "Document": { "Placemark": [
    { "name": "Bar Pepe", "Point": { "coordinates": "-4.1510,40.5731" } },
    { "name": "Peña sin punto" },
    { "name": "Peña al revés", "Point": { "coordinates": "40.5731" } }
] } } }"#;

fn main() -> Result<()> {
    println!("=== penamap Error Handling Example ===\n");

    println!("--- Example 1: Strict load rejects the document ---");
    match PlaceStore::from_json_str(BROKEN, LoadOptions::strict()) {
        Ok(store) => println!("  unexpected: {} places", store.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    println!("--- Example 2: Lenient load keeps the valid entries ---");
    let store = PlaceStore::from_json_str(BROKEN, LoadOptions::lenient())?;
    for p in &store {
        println!("  ✓ {} ({})", p.name(), p.coordinate);
    }
    println!();

    println!("--- Example 3: Missing files ---");
    if let Err(e) = PlaceStore::load_from_path("does-not-exist.json", LoadOptions::default()) {
        println!("  ✗ {e}");
    }
    println!();

    println!("--- Example 4: Selecting something that is not suggested ---");
    let mut controller = SearchController::new(&store);
    controller.set_query("bar");
    let updates = controller.select_suggestion("Ayuntamiento");
    println!("  updates: {}, selected: {:?}", updates.len(), controller.state().selected);

    Ok(())
}
